//! Settings persistence.
//!
//! Only user preferences survive a restart. They are kept as one JSON blob;
//! a missing file means defaults.

use crate::error::SettingsError;
use crate::types::GameSettings;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<GameSettings, SettingsError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(GameSettings::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load, falling back to defaults on any error
    pub async fn load_or_default(&self) -> GameSettings {
        match self.load().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    "Could not load settings from {}: {}. Using defaults.",
                    self.path.display(),
                    e
                );
                GameSettings::default()
            }
        }
    }

    pub async fn save(&self, settings: &GameSettings) -> Result<(), SettingsError> {
        let json = serde_json::to_vec_pretty(settings)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
