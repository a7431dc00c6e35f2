//! Per-phase speaking countdown.
//!
//! The timer is a display aid: it never moves the session to another phase.
//! Players advance manually once it runs out, or skip ahead early.

use crate::types::{GamePhase, TimerStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PhaseTimer {
    status: TimerStatus,
    remaining: u32,
    duration: u32,
}

impl PhaseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer with a full duration, not yet running
    pub fn reset(&mut self, seconds: u32) {
        self.status = TimerStatus::Idle;
        self.remaining = seconds;
        self.duration = seconds;
    }

    /// Disarm the timer outside speaking phases
    pub fn stop(&mut self) {
        self.reset(0);
    }

    /// Follow the session into a new phase
    pub fn sync_with_phase(&mut self, phase: GamePhase, round_seconds: u32) {
        if phase.is_timed() {
            self.reset(round_seconds);
        } else {
            self.stop();
        }
    }

    /// Start, pause or resume. A finished or disarmed timer stays as is.
    pub fn toggle(&mut self) -> TimerStatus {
        self.status = match self.status {
            TimerStatus::Idle | TimerStatus::Paused if self.remaining > 0 => TimerStatus::Running,
            TimerStatus::Running => TimerStatus::Paused,
            other => other,
        };
        self.status
    }

    /// Count down one second. Returns true on the tick that finishes it.
    pub fn tick(&mut self) -> bool {
        if self.status != TimerStatus::Running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.status = TimerStatus::Finished;
            return true;
        }
        false
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }
}
