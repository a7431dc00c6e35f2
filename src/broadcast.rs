use crate::state::AppState;
use std::sync::Arc;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// Spawn a background task that counts the phase timer down while it runs.
///
/// Every tick of a running timer is broadcast to all clients; reaching zero
/// plays the end cue. The phase never advances on its own.
pub fn spawn_timer_ticker(state: Arc<AppState>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            if let Some(info) = state.tick_timer().await {
                tracing::trace!("Timer tick: {}s left", info.remaining);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::state_with;
    use crate::types::TimerStatus;

    #[tokio::test(start_paused = true)]
    async fn test_ticker_counts_down_running_timer() {
        let state = Arc::new(state_with(&["Anna", "Bruno", "Carla"]).await);
        state.apply(|s| s.start_game()).await.unwrap();
        state.apply(|s| s.next_phase()).await.unwrap();
        state.toggle_timer().await;

        spawn_timer_ticker(state.clone());
        tokio::time::sleep(Duration::from_millis(3500)).await;

        let info = state.timer_info().await;
        assert_eq!(info.status, TimerStatus::Running);
        assert_eq!(info.remaining, 57);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_ignores_idle_timer() {
        let state = Arc::new(state_with(&["Anna", "Bruno", "Carla"]).await);
        state.apply(|s| s.start_game()).await.unwrap();
        state.apply(|s| s.next_phase()).await.unwrap();

        spawn_timer_ticker(state.clone());
        tokio::time::sleep(Duration::from_secs(5)).await;

        let info = state.timer_info().await;
        assert_eq!(info.status, TimerStatus::Idle);
        assert_eq!(info.remaining, 60);
    }
}
