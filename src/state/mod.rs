mod actions;
mod timer;

use crate::protocol::{ServerMessage, TimerInfo};
use crate::session::{GameSession, SessionSnapshot};
use crate::settings::SettingsStore;
use crate::timer::PhaseTimer;
use crate::types::GameSettings;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<GameSession>>,
    pub timer: Arc<RwLock<PhaseTimer>>,
    /// Broadcast channel for snapshots, timer ticks and sound cues
    pub broadcast: broadcast::Sender<ServerMessage>,
    /// Where settings are persisted (None = in-memory only)
    settings_store: Option<SettingsStore>,
}

impl AppState {
    pub fn new(session: GameSession) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            session: Arc::new(RwLock::new(session)),
            timer: Arc::new(RwLock::new(PhaseTimer::new())),
            broadcast: tx,
            settings_store: None,
        }
    }

    /// Persist settings changes through `store`
    pub fn with_settings_store(mut self, store: SettingsStore) -> Self {
        self.settings_store = Some(store);
        self
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }

    pub async fn settings(&self) -> GameSettings {
        self.session.read().await.settings().clone()
    }

    pub async fn timer_info(&self) -> TimerInfo {
        TimerInfo::from(&*self.timer.read().await)
    }

    /// Send a message to every connected client
    pub fn broadcast_to_all(&self, msg: ServerMessage) {
        // No receivers connected is fine
        let _ = self.broadcast.send(msg);
    }
}
