//! Rough game-length estimate shown on the setup screen.

use super::{effective_mode, planned_rounds, GameSession, MIN_PLAYERS};
use crate::types::*;

/// Time budgeted per judge for casting a vote
pub const JUDGE_SECONDS: u32 = 10;

/// Estimated total game length in seconds.
///
/// Each round is two speeches, the optional discussion, and voting time per
/// judge. `fixed_rounds` overrides the planned round count once a game has
/// started. Fewer than three players estimate to zero; huge rosters saturate
/// at `u32::MAX`.
pub fn estimate_duration_seconds(
    settings: &GameSettings,
    player_count: usize,
    fixed_rounds: Option<u32>,
) -> u32 {
    if player_count < MIN_PLAYERS {
        return 0;
    }

    let speech = settings.round_duration.seconds();
    let discussion = if settings.remove_final_discussion {
        0
    } else {
        speech
    };
    let judges = u64::try_from(player_count.saturating_sub(2)).unwrap_or(u64::MAX);
    let per_round = u64::from(2 * speech + discussion)
        .saturating_add(u64::from(JUDGE_SECONDS).saturating_mul(judges));

    let rounds = fixed_rounds
        .filter(|r| *r > 0)
        .unwrap_or_else(|| planned_rounds(effective_mode(settings.game_mode, player_count), player_count));
    let total = per_round.saturating_mul(u64::from(rounds));
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// Render seconds as "M min S s", "M min" or "S s"
pub fn format_duration(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    match (minutes, seconds) {
        (0, s) => format!("{} s", s),
        (m, 0) => format!("{} min", m),
        (m, s) => format!("{} min {} s", m, s),
    }
}

impl GameSession {
    pub fn estimated_duration_seconds(&self) -> u32 {
        let fixed = (self.phase != GamePhase::Setup).then_some(self.total_rounds);
        estimate_duration_seconds(&self.settings, self.players.len(), fixed)
    }

    pub fn estimated_duration(&self) -> String {
        format_duration(self.estimated_duration_seconds())
    }
}
