use super::{
    all_pairs, planned_rounds, randomize_sides, shuffle_avoiding_back_to_back, GameSession,
    MIN_PLAYERS,
};
use crate::error::ActionError;
use crate::types::*;
use std::collections::VecDeque;

/// Every player holding the top score. Empty only for an empty roster.
pub fn winners_of(players: &[Player]) -> Vec<PlayerId> {
    let Some(best) = players.iter().map(|p| p.score).max() else {
        return Vec::new();
    };
    players
        .iter()
        .filter(|p| p.score == best)
        .map(|p| p.id.clone())
        .collect()
}

impl GameSession {
    /// Start a game with the current roster and settings.
    ///
    /// Scores and participation are cleared, the schedule is planned and the
    /// first round begins. Accepted from SETUP, or from GAME_OVER for a
    /// rematch with the same roster.
    pub fn start_game(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, GamePhase::Setup | GamePhase::GameOver) {
            return Err(ActionError::InvalidPhase {
                action: "start a game",
                phase: self.phase,
            });
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(ActionError::NotEnoughPlayers {
                have: self.players.len(),
                need: MIN_PLAYERS,
            });
        }

        self.enforce_quick_mode_minimum();
        self.mode = self.settings.game_mode;
        self.reset_player_stats();

        let roster = self.player_ids();
        self.matchup_queue = match self.mode {
            GameMode::AllVsAll => {
                let mut pairs = all_pairs(&roster);
                randomize_sides(&mut pairs, &mut self.rng);
                VecDeque::from(shuffle_avoiding_back_to_back(pairs, &mut self.rng))
            }
            GameMode::Quick => VecDeque::new(),
        };
        self.total_rounds = planned_rounds(self.mode, roster.len());
        self.round_number = 0;
        self.round_data = None;
        self.last_pair = None;
        self.winner_ids.clear();
        self.phase = GamePhase::RoundIntro;

        tracing::info!(
            "Game started: {} players, {:?} mode, {} rounds",
            roster.len(),
            self.mode,
            self.total_rounds
        );

        self.begin_round();
        Ok(())
    }

    /// End the game early and crown whoever leads
    pub fn end_game(&mut self) -> Result<(), ActionError> {
        if !self.phase.has_round() {
            return Err(ActionError::InvalidPhase {
                action: "end the game",
                phase: self.phase,
            });
        }
        self.finish_game();
        Ok(())
    }

    /// Drop the roster and all game progress; settings stay
    pub fn reset_game(&mut self) {
        self.players.clear();
        self.phase = GamePhase::Setup;
        self.round_number = 0;
        self.total_rounds = 0;
        self.round_data = None;
        self.matchup_queue.clear();
        self.last_pair = None;
        self.winner_ids.clear();
        self.mode = self.settings.game_mode;
        tracing::info!("Game reset");
    }

    pub(super) fn finish_game(&mut self) {
        self.winner_ids = winners_of(&self.players);
        self.round_data = None;
        self.matchup_queue.clear();
        self.phase = GamePhase::GameOver;

        let names: Vec<&str> = self
            .winner_ids
            .iter()
            .filter_map(|id| self.player(id))
            .map(|p| p.name.as_str())
            .collect();
        tracing::info!(
            "Game over after {} rounds, winners: {}",
            self.round_number,
            names.join(", ")
        );
    }
}
