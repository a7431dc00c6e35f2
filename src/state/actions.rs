use super::AppState;
use crate::error::ActionError;
use crate::protocol::ServerMessage;
use crate::session::GameSession;
use crate::types::*;

/// Sound played when the session lands in `phase`
fn transition_cue(phase: GamePhase) -> Option<SoundCue> {
    match phase {
        GamePhase::Setup | GamePhase::GameOver => None,
        GamePhase::RoundEnd => Some(SoundCue::Vote),
        _ => Some(SoundCue::Next),
    }
}

impl AppState {
    /// Run a session action and fan out the result.
    ///
    /// On success the phase timer follows any phase change, changed settings
    /// are persisted, and a fresh snapshot is broadcast. Rejected actions
    /// change nothing and broadcast nothing.
    pub async fn apply<T, F>(&self, action: F) -> Result<T, ActionError>
    where
        F: FnOnce(&mut GameSession) -> Result<T, ActionError>,
    {
        let mut session = self.session.write().await;
        let before_phase = session.phase();
        let before_round = session.round_number();
        let before_settings = session.settings().clone();

        let value = match action(&mut *session) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Ignored action: {}", e);
                return Err(e);
            }
        };

        let phase = session.phase();
        let round = session.round_number();
        let settings = session.settings().clone();
        let snapshot = session.snapshot();

        // Re-arm the timer before releasing the session, so a toggle or tick
        // can't act on the previous phase's countdown
        let phase_changed = phase != before_phase || round != before_round;
        let timer_info = if phase_changed {
            let mut timer = self.timer.write().await;
            timer.sync_with_phase(phase, settings.round_duration.seconds());
            Some(crate::protocol::TimerInfo::from(&*timer))
        } else {
            None
        };
        drop(session);

        if let Some(info) = timer_info {
            self.broadcast_to_all(ServerMessage::Timer(info));
            if let Some(cue) = transition_cue(phase) {
                self.play_cue(&settings, cue);
            }
        }

        if settings != before_settings {
            self.persist_settings(&settings).await;
        }

        self.broadcast_to_all(ServerMessage::State { snapshot });
        Ok(value)
    }

    /// Broadcast a sound cue if sound is on
    pub(super) fn play_cue(&self, settings: &GameSettings, cue: SoundCue) {
        if settings.is_sound_enabled {
            self.broadcast_to_all(ServerMessage::Sound { cue });
        }
    }

    /// Best effort: a failed write is logged and otherwise ignored
    async fn persist_settings(&self, settings: &GameSettings) {
        let Some(store) = &self.settings_store else {
            return;
        };
        match store.save(settings).await {
            Ok(()) => tracing::debug!("Saved settings to {}", store.path().display()),
            Err(e) => tracing::warn!(
                "Failed to save settings to {}: {}",
                store.path().display(),
                e
            ),
        }
    }
}
