use crate::session::{Ballot, SessionSnapshot};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Protocol version announced in the welcome message
pub const PROTOCOL_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    // Roster
    AddPlayer {
        name: String,
    },
    RemovePlayer {
        player_id: PlayerId,
    },
    // Game flow
    StartGame,
    StartRound,
    NextPhase,
    SubmitVotes {
        /// judge id -> voted player id
        votes: Ballot,
    },
    EndGame,
    ResetGame,
    // Settings
    SetGameMode {
        mode: GameMode,
    },
    ToggleSound,
    ToggleTheme,
    ToggleFinalDiscussion,
    SetRoundDuration {
        seconds: RoundDuration,
    },
    // Timer
    ToggleTimer,
    /// Ask for a fresh snapshot
    GetState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        protocol: String,
        snapshot: SessionSnapshot,
        timer: TimerInfo,
        server_now: String,
    },
    State {
        snapshot: SessionSnapshot,
    },
    Timer(TimerInfo),
    Sound {
        cue: SoundCue,
    },
    Error {
        code: String,
        msg: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimerInfo {
    pub status: TimerStatus,
    pub remaining: u32,
    pub duration: u32,
}

impl From<&crate::timer::PhaseTimer> for TimerInfo {
    fn from(timer: &crate::timer::PhaseTimer) -> Self {
        Self {
            status: timer.status(),
            remaining: timer.remaining(),
            duration: timer.duration(),
        }
    }
}
