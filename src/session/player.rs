use super::{effective_mode, GameSession};
use crate::error::ActionError;
use crate::types::*;

/// Longest accepted display name, in characters
pub const MAX_NAME_CHARS: usize = 25;

/// Trim a display name and cap its length
pub fn normalize_player_name(raw: &str) -> Result<String, ActionError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ActionError::EmptyName);
    }
    Ok(name.chars().take(MAX_NAME_CHARS).collect::<String>().trim_end().to_string())
}

impl GameSession {
    /// Add a player to the roster (SETUP only)
    pub fn add_player(&mut self, name: &str) -> Result<Player, ActionError> {
        self.require_roster_unlocked()?;

        let name = normalize_player_name(name)?;
        if self.has_player_named(&name) {
            return Err(ActionError::DuplicateName(name));
        }

        let player = Player::new(name);
        tracing::info!("Added player {} ({})", player.name, player.id);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Remove a player from the roster (SETUP only)
    pub fn remove_player(&mut self, player_id: &str) -> Result<Player, ActionError> {
        self.require_roster_unlocked()?;

        let index = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| ActionError::UnknownPlayer(player_id.to_string()))?;
        let player = self.players.remove(index);
        tracing::info!("Removed player {} ({})", player.name, player.id);

        self.enforce_quick_mode_minimum();
        Ok(player)
    }

    /// Case-insensitive name lookup
    pub fn has_player_named(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.players.iter().any(|p| p.name.to_lowercase() == wanted)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Roster in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    /// Players by score, highest first; ties keep roster order
    pub fn leaderboard(&self) -> Vec<Player> {
        let mut players = self.players.clone();
        players.sort_by(|a, b| b.score.cmp(&a.score));
        players
    }

    /// Drop back to all-vs-all when quick mode no longer has enough players.
    /// Returns true if the setting changed.
    pub(super) fn enforce_quick_mode_minimum(&mut self) -> bool {
        let mode = effective_mode(self.settings.game_mode, self.players.len());
        if mode != self.settings.game_mode {
            tracing::info!(
                "Only {} players left, switching from quick mode to all-vs-all",
                self.players.len()
            );
            self.settings.game_mode = mode;
            return true;
        }
        false
    }

    pub(super) fn reset_player_stats(&mut self) {
        for player in &mut self.players {
            player.score = 0;
            player.participation_count = 0;
        }
    }

    fn require_roster_unlocked(&self) -> Result<(), ActionError> {
        if self.phase != GamePhase::Setup {
            return Err(ActionError::RosterLocked);
        }
        Ok(())
    }
}
