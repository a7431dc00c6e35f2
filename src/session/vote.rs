use super::GameSession;
use crate::error::ActionError;
use crate::types::*;
use std::collections::HashMap;

/// Judge id -> id of the debater they voted for
pub type Ballot = HashMap<PlayerId, PlayerId>;

impl GameSession {
    /// Tally a round's votes and move to ROUND_END.
    ///
    /// Every vote naming a known player adds one point to that player; votes
    /// for unknown ids are dropped. Completeness of the ballot is the
    /// caller's concern. Returns the number of votes counted.
    pub fn submit_votes(&mut self, ballot: &Ballot) -> Result<u32, ActionError> {
        self.require_round()?;
        if self.phase == GamePhase::RoundEnd {
            return Err(ActionError::InvalidPhase {
                action: "submit votes",
                phase: self.phase,
            });
        }

        let mut counted = 0;
        for voted_id in ballot.values() {
            match self.players.iter_mut().find(|p| p.id == *voted_id) {
                Some(player) => {
                    player.score += 1;
                    counted += 1;
                }
                None => tracing::debug!("Ignoring vote for unknown player {}", voted_id),
            }
        }

        tracing::info!(
            "Round {} tallied: {} of {} votes counted",
            self.round_number,
            counted,
            ballot.len()
        );
        self.phase = GamePhase::RoundEnd;
        Ok(counted)
    }
}
