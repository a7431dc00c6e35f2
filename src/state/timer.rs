use super::AppState;
use crate::protocol::{ServerMessage, TimerInfo};
use crate::types::{SoundCue, TimerStatus};

impl AppState {
    /// Start, pause or resume the phase countdown
    pub async fn toggle_timer(&self) -> TimerInfo {
        let settings = self.settings().await;
        let (before, info) = {
            let mut timer = self.timer.write().await;
            let before = timer.status();
            timer.toggle();
            (before, TimerInfo::from(&*timer))
        };

        if info.status != before {
            match info.status {
                TimerStatus::Running => self.play_cue(&settings, SoundCue::Start),
                TimerStatus::Paused => self.play_cue(&settings, SoundCue::Pause),
                _ => {}
            }
        }

        self.broadcast_to_all(ServerMessage::Timer(info));
        info
    }

    /// Advance a running countdown by one second.
    /// Returns None when the timer isn't running.
    pub async fn tick_timer(&self) -> Option<TimerInfo> {
        let (finished, info) = {
            let mut timer = self.timer.write().await;
            if timer.status() != TimerStatus::Running {
                return None;
            }
            let finished = timer.tick();
            (finished, TimerInfo::from(&*timer))
        };

        self.broadcast_to_all(ServerMessage::Timer(info));
        if finished {
            tracing::debug!("Phase timer finished");
            let settings = self.settings().await;
            self.play_cue(&settings, SoundCue::End);
        }
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::state_with;
    use super::*;

    #[tokio::test]
    async fn test_toggle_outside_speaking_phase_does_nothing() {
        let state = state_with(&["Anna", "Bruno", "Carla"]).await;
        let info = state.toggle_timer().await;
        assert_eq!(info.status, TimerStatus::Idle);
        assert!(state.tick_timer().await.is_none());
    }

    #[tokio::test]
    async fn test_countdown_runs_to_end() {
        let state = state_with(&["Anna", "Bruno", "Carla"]).await;
        state.apply(|s| s.start_game()).await.unwrap();
        state.apply(|s| s.next_phase()).await.unwrap();
        let mut rx = state.broadcast.subscribe();

        assert_eq!(state.toggle_timer().await.status, TimerStatus::Running);

        let mut last = None;
        while let Some(info) = state.tick_timer().await {
            last = Some(info);
        }
        let last = last.unwrap();
        assert_eq!(last.status, TimerStatus::Finished);
        assert_eq!(last.remaining, 0);

        let mut cues = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            if let ServerMessage::Sound { cue } = msg {
                cues.push(cue);
            }
        }
        assert_eq!(cues, vec![SoundCue::Start, SoundCue::End]);

        // The countdown never moves the phase
        assert_eq!(state.snapshot().await.phase, crate::types::GamePhase::Defense);
    }

    #[tokio::test]
    async fn test_pause_stops_ticking() {
        let state = state_with(&["Anna", "Bruno", "Carla"]).await;
        state.apply(|s| s.start_game()).await.unwrap();
        state.apply(|s| s.next_phase()).await.unwrap();

        state.toggle_timer().await;
        state.tick_timer().await;
        assert_eq!(state.toggle_timer().await.status, TimerStatus::Paused);
        assert!(state.tick_timer().await.is_none());
        assert_eq!(state.timer_info().await.remaining, 59);
    }
}
