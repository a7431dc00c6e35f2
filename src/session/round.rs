use super::{judges_for, pick_quick_pair, GameSession};
use crate::error::ActionError;
use crate::types::*;

impl GameSession {
    /// Start the next round from ROUND_END.
    ///
    /// Ends the game instead when the planned rounds are used up or the
    /// all-vs-all queue is empty.
    pub fn start_round(&mut self) -> Result<(), ActionError> {
        if self.phase != GamePhase::RoundEnd {
            return Err(ActionError::InvalidPhase {
                action: "start a round",
                phase: self.phase,
            });
        }
        self.begin_round();
        Ok(())
    }

    /// Advance through the speaking phases.
    ///
    /// ROUND_INTRO → DEFENSE → OFFENSE → DISCUSSION → VOTING, with DISCUSSION
    /// skipped when the final discussion is turned off. VOTING only ends by
    /// submitting votes and ROUND_END only by starting a round.
    pub fn next_phase(&mut self) -> Result<GamePhase, ActionError> {
        let next = match self.phase {
            GamePhase::RoundIntro => GamePhase::Defense,
            GamePhase::Defense => GamePhase::Offense,
            GamePhase::Offense if self.settings.remove_final_discussion => GamePhase::Voting,
            GamePhase::Offense => GamePhase::Discussion,
            GamePhase::Discussion => GamePhase::Voting,
            phase => {
                return Err(ActionError::InvalidPhase {
                    action: "advance phase",
                    phase,
                })
            }
        };

        tracing::debug!("Phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
        Ok(next)
    }

    pub(super) fn begin_round(&mut self) {
        if self.total_rounds > 0 && self.round_number >= self.total_rounds {
            self.finish_game();
            return;
        }

        let roster = self.player_ids();
        let matchup = match self.mode {
            GameMode::AllVsAll => self.matchup_queue.pop_front(),
            GameMode::Quick => pick_quick_pair(&roster, self.last_pair.as_ref(), &mut self.rng),
        };
        let Some(matchup) = matchup else {
            self.finish_game();
            return;
        };

        let judge_ids = judges_for(&roster, &matchup);
        let thesis = self.theses.pick(&mut self.rng).to_string();

        self.round_number += 1;
        for player in &mut self.players {
            if matchup.involves(&player.id) {
                player.participation_count += 1;
            }
        }

        tracing::info!(
            "Round {}/{}: {} defends, {} opposes, {} judges",
            self.round_number,
            self.total_rounds,
            matchup.defender_id,
            matchup.opponent_id,
            judge_ids.len()
        );

        self.round_data = Some(RoundData {
            defender_id: matchup.defender_id.clone(),
            opponent_id: matchup.opponent_id.clone(),
            thesis,
            judge_ids,
        });
        self.phase = GamePhase::RoundIntro;
        self.last_pair = Some(matchup);
    }
}
