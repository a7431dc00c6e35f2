use serde::{Deserialize, Serialize};

/// Opaque ID type for players
pub type PlayerId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    /// Rounds this player has debated in (defender or opponent)
    pub participation_count: u32,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name,
            score: 0,
            participation_count: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Setup,
    RoundIntro,
    Defense,
    Offense,
    Discussion,
    Voting,
    RoundEnd,
    GameOver,
}

impl GamePhase {
    /// Phases that carry round data
    pub fn has_round(&self) -> bool {
        !matches!(self, GamePhase::Setup | GamePhase::GameOver)
    }

    /// Phases with a speaking countdown
    pub fn is_timed(&self) -> bool {
        matches!(
            self,
            GamePhase::Defense | GamePhase::Offense | GamePhase::Discussion
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Every unordered pair of players debates exactly once
    #[default]
    AllVsAll,
    /// Roughly one debate per player
    Quick,
}

#[derive(Debug, thiserror::Error)]
#[error("Round duration must be 30, 60 or 120 seconds, got {0}")]
pub struct InvalidRoundDuration(pub u32);

/// Speaking time per phase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum RoundDuration {
    Short,
    #[default]
    Medium,
    Long,
}

impl RoundDuration {
    pub fn seconds(&self) -> u32 {
        match self {
            RoundDuration::Short => 30,
            RoundDuration::Medium => 60,
            RoundDuration::Long => 120,
        }
    }
}

impl TryFrom<u32> for RoundDuration {
    type Error = InvalidRoundDuration;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        match seconds {
            30 => Ok(RoundDuration::Short),
            60 => Ok(RoundDuration::Medium),
            120 => Ok(RoundDuration::Long),
            other => Err(InvalidRoundDuration(other)),
        }
    }
}

impl From<RoundDuration> for u32 {
    fn from(duration: RoundDuration) -> Self {
        duration.seconds()
    }
}

/// User preferences, persisted across restarts.
///
/// Keys are camelCase so the stored blob stays readable by older app builds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    pub game_mode: GameMode,
    pub is_sound_enabled: bool,
    pub is_dark_mode: bool,
    pub remove_final_discussion: bool,
    pub round_duration: RoundDuration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            game_mode: GameMode::AllVsAll,
            is_sound_enabled: true,
            is_dark_mode: false,
            remove_final_discussion: false,
            round_duration: RoundDuration::Medium,
        }
    }
}

/// The current round: who debates, on what, and who judges
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundData {
    pub defender_id: PlayerId,
    pub opponent_id: PlayerId,
    pub thesis: String,
    /// Everyone else, in roster order
    pub judge_ids: Vec<PlayerId>,
}

/// One required debate between two players
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Matchup {
    pub defender_id: PlayerId,
    pub opponent_id: PlayerId,
}

impl Matchup {
    pub fn new(defender_id: PlayerId, opponent_id: PlayerId) -> Self {
        Self {
            defender_id,
            opponent_id,
        }
    }

    /// Swap who defends and who opposes
    pub fn swap_sides(&mut self) {
        std::mem::swap(&mut self.defender_id, &mut self.opponent_id);
    }

    pub fn involves(&self, player_id: &str) -> bool {
        self.defender_id == player_id || self.opponent_id == player_id
    }

    pub fn shares_player(&self, other: &Matchup) -> bool {
        self.involves(&other.defender_id) || self.involves(&other.opponent_id)
    }

    /// Same two players, regardless of side
    pub fn same_pair(&self, other: &Matchup) -> bool {
        self.involves(&other.defender_id) && self.involves(&other.opponent_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

/// Sound effects the presentation layer plays when sound is enabled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Start,
    Pause,
    End,
    Next,
    Vote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_blob_uses_camel_case_keys() {
        let json = serde_json::to_value(GameSettings::default()).unwrap();
        assert_eq!(json["gameMode"], "all_vs_all");
        assert_eq!(json["isSoundEnabled"], true);
        assert_eq!(json["isDarkMode"], false);
        assert_eq!(json["removeFinalDiscussion"], false);
        assert_eq!(json["roundDuration"], 60);
    }

    #[test]
    fn test_settings_missing_keys_take_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{"gameMode":"quick","roundDuration":120}"#).unwrap();
        assert_eq!(settings.game_mode, GameMode::Quick);
        assert_eq!(settings.round_duration, RoundDuration::Long);
        assert!(settings.is_sound_enabled);
        assert!(!settings.remove_final_discussion);
    }

    #[test]
    fn test_round_duration_rejects_unknown_values() {
        assert!(RoundDuration::try_from(45).is_err());
        let parsed: Result<GameSettings, _> = serde_json::from_str(r#"{"roundDuration":45}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_matchup_overlap() {
        let ab = Matchup::new("a".into(), "b".into());
        let bc = Matchup::new("b".into(), "c".into());
        let cd = Matchup::new("c".into(), "d".into());
        let ba = Matchup::new("b".into(), "a".into());

        assert!(ab.shares_player(&bc));
        assert!(!ab.shares_player(&cd));
        assert!(ab.same_pair(&ba));
        assert!(!ab.same_pair(&bc));
    }

    #[test]
    fn test_phase_round_and_timer_flags() {
        assert!(!GamePhase::Setup.has_round());
        assert!(!GamePhase::GameOver.has_round());
        assert!(GamePhase::RoundEnd.has_round());
        assert!(GamePhase::Discussion.is_timed());
        assert!(!GamePhase::Voting.is_timed());
    }
}
