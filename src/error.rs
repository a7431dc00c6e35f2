use crate::types::{GamePhase, PlayerId};

/// Why a session action was ignored.
///
/// An `Err` never leaves partial changes behind: the session is exactly as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Need at least {need} players, have {have}")]
    NotEnoughPlayers { have: usize, need: usize },

    #[error("Cannot {action} during {phase:?}")]
    InvalidPhase {
        action: &'static str,
        phase: GamePhase,
    },

    #[error("No active round")]
    NoActiveRound,

    #[error("Players can only be changed before the game starts")]
    RosterLocked,

    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("A player named {0} already exists")]
    DuplicateName(String),

    #[error("Player {0} not found")]
    UnknownPlayer(PlayerId),
}

impl ActionError {
    /// Stable code for error replies
    pub fn code(&self) -> &'static str {
        match self {
            ActionError::NotEnoughPlayers { .. } => "NOT_ENOUGH_PLAYERS",
            ActionError::InvalidPhase { .. } => "INVALID_PHASE",
            ActionError::NoActiveRound => "NO_ACTIVE_ROUND",
            ActionError::RosterLocked => "ROSTER_LOCKED",
            ActionError::EmptyName => "EMPTY_NAME",
            ActionError::DuplicateName(_) => "DUPLICATE_NAME",
            ActionError::UnknownPlayer(_) => "UNKNOWN_PLAYER",
        }
    }
}

/// Errors reading or writing the persisted settings blob
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors loading a thesis pool
#[derive(Debug, thiserror::Error)]
pub enum ThesisPoolError {
    #[error("Failed to read thesis file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Thesis pool is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_messages() {
        let err = ActionError::NotEnoughPlayers { have: 2, need: 3 };
        assert_eq!(err.code(), "NOT_ENOUGH_PLAYERS");
        assert_eq!(err.to_string(), "Need at least 3 players, have 2");

        let err = ActionError::InvalidPhase {
            action: "advance phase",
            phase: GamePhase::Voting,
        };
        assert_eq!(err.code(), "INVALID_PHASE");
        assert_eq!(err.to_string(), "Cannot advance phase during Voting");
    }
}
