//! The debate session: roster, phase machine and matchup schedule.
//!
//! `GameSession` is a plain synchronous state container. Every action either
//! applies completely or returns an [`ActionError`] and leaves the session
//! untouched, so the hosting layer can treat errors as ignored clicks.

mod duration;
mod game;
mod player;
mod round;
mod scheduler;
mod vote;

pub use duration::{estimate_duration_seconds, format_duration, JUDGE_SECONDS};
pub use game::winners_of;
pub use player::{normalize_player_name, MAX_NAME_CHARS};
pub use scheduler::{
    all_pairs, effective_mode, judges_for, pick_quick_pair, planned_rounds, randomize_sides,
    shuffle_avoiding_back_to_back,
};
pub use vote::Ballot;

use crate::error::ActionError;
use crate::rng::GameRng;
use crate::theses::ThesisPool;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

/// Minimum roster size to start a game
pub const MIN_PLAYERS: usize = 3;
/// Minimum roster size for quick mode; smaller rosters fall back to all-vs-all
pub const QUICK_MIN_PLAYERS: usize = 4;

pub struct GameSession {
    players: Vec<Player>,
    phase: GamePhase,
    round_number: u32,
    total_rounds: u32,
    round_data: Option<RoundData>,
    matchup_queue: VecDeque<Matchup>,
    last_pair: Option<Matchup>,
    winner_ids: Vec<PlayerId>,
    /// Scheduling policy locked in at game start
    mode: GameMode,
    settings: GameSettings,
    theses: Arc<ThesisPool>,
    rng: GameRng,
}

/// Read-only view of the session handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub players: Vec<Player>,
    pub phase: GamePhase,
    pub round_number: u32,
    pub total_rounds: u32,
    pub round_data: Option<RoundData>,
    pub matchup_queue: Vec<Matchup>,
    pub winner_ids: Vec<PlayerId>,
    pub mode: GameMode,
    pub settings: GameSettings,
    pub estimated_seconds: u32,
    pub estimated_duration: String,
}

impl GameSession {
    pub fn new(settings: GameSettings, theses: Arc<ThesisPool>, rng: GameRng) -> Self {
        Self {
            players: Vec::new(),
            phase: GamePhase::Setup,
            round_number: 0,
            total_rounds: 0,
            round_data: None,
            matchup_queue: VecDeque::new(),
            last_pair: None,
            winner_ids: Vec::new(),
            mode: settings.game_mode,
            settings,
            theses,
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn round_data(&self) -> Option<&RoundData> {
        self.round_data.as_ref()
    }

    /// Matchups still to be played, next first
    pub fn matchup_queue(&self) -> &VecDeque<Matchup> {
        &self.matchup_queue
    }

    /// The pair that debated in the most recent round
    pub fn last_pair(&self) -> Option<&Matchup> {
        self.last_pair.as_ref()
    }

    pub fn winner_ids(&self) -> &[PlayerId] {
        &self.winner_ids
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The scheduling policy in effect: locked during a game, otherwise what
    /// the current settings and roster would give.
    pub fn mode(&self) -> GameMode {
        if self.phase == GamePhase::Setup {
            effective_mode(self.settings.game_mode, self.players.len())
        } else {
            self.mode
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            players: self.players.clone(),
            phase: self.phase,
            round_number: self.round_number,
            total_rounds: self.total_rounds,
            round_data: self.round_data.clone(),
            matchup_queue: self.matchup_queue.iter().cloned().collect(),
            winner_ids: self.winner_ids.clone(),
            mode: self.mode(),
            settings: self.settings.clone(),
            estimated_seconds: self.estimated_duration_seconds(),
            estimated_duration: self.estimated_duration(),
        }
    }

    // ========== Settings ==========

    /// Choose the scheduling policy. Quick mode needs at least
    /// [`QUICK_MIN_PLAYERS`]; with fewer players all-vs-all is stored instead.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        let mode = effective_mode(mode, self.players.len());
        self.settings.game_mode = mode;
    }

    pub fn toggle_sound(&mut self) {
        self.settings.is_sound_enabled = !self.settings.is_sound_enabled;
    }

    pub fn toggle_theme(&mut self) {
        self.settings.is_dark_mode = !self.settings.is_dark_mode;
    }

    pub fn toggle_final_discussion(&mut self) {
        self.settings.remove_final_discussion = !self.settings.remove_final_discussion;
    }

    pub fn set_round_duration(&mut self, duration: RoundDuration) {
        self.settings.round_duration = duration;
    }

    /// Guard for actions that need a round on the table
    fn require_round(&self) -> Result<&RoundData, ActionError> {
        self.round_data.as_ref().ok_or(ActionError::NoActiveRound)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn session_with_seed(names: &[&str], seed: u64) -> GameSession {
        let mut session = GameSession::new(
            GameSettings::default(),
            Arc::new(ThesisPool::builtin()),
            GameRng::new(seed),
        );
        for name in names {
            session.add_player(name).unwrap();
        }
        session
    }

    pub(crate) fn session_with(names: &[&str]) -> GameSession {
        session_with_seed(names, 42)
    }

    #[test]
    fn test_new_session_is_in_setup() {
        let session = session_with(&[]);
        assert_eq!(session.phase(), GamePhase::Setup);
        assert_eq!(session.round_number(), 0);
        assert_eq!(session.total_rounds(), 0);
        assert!(session.round_data().is_none());
        assert!(session.winner_ids().is_empty());
    }

    #[test]
    fn test_quick_mode_requires_four_players() {
        let mut session = session_with(&["Anna", "Bruno", "Carla"]);
        session.set_game_mode(GameMode::Quick);
        assert_eq!(session.settings().game_mode, GameMode::AllVsAll);

        session.add_player("Dario").unwrap();
        session.set_game_mode(GameMode::Quick);
        assert_eq!(session.settings().game_mode, GameMode::Quick);
    }

    #[test]
    fn test_settings_toggles() {
        let mut session = session_with(&[]);
        session.toggle_sound();
        session.toggle_theme();
        session.toggle_final_discussion();
        session.set_round_duration(RoundDuration::Long);

        let settings = session.settings();
        assert!(!settings.is_sound_enabled);
        assert!(settings.is_dark_mode);
        assert!(settings.remove_final_discussion);
        assert_eq!(settings.round_duration, RoundDuration::Long);
    }

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut session = session_with(&["Anna", "Bruno", "Carla"]);
        session.start_game().unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, GamePhase::RoundIntro);
        assert_eq!(snapshot.round_number, 1);
        assert_eq!(snapshot.total_rounds, 3);
        assert_eq!(snapshot.matchup_queue.len(), 2);
        assert_eq!(snapshot.round_data.as_ref(), session.round_data());
        assert_eq!(snapshot.players.len(), 3);
        assert_eq!(snapshot.mode, GameMode::AllVsAll);
    }

    #[test]
    fn test_snapshot_serializes_phase_names() {
        let session = session_with(&[]);
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["phase"], "SETUP");
        assert_eq!(json["round_data"], serde_json::Value::Null);
    }
}
