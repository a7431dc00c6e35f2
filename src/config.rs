//! Server configuration from environment variables.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 7474;
const DEFAULT_SETTINGS_PATH: &str = "dibattito-settings.json";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub settings_path: PathBuf,
    /// Custom thesis file (built-in pool when unset)
    pub theses_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    /// Fixed RNG seed for rehearsals (random when unset)
    pub seed: Option<u64>,
}

impl ServerConfig {
    /// Load config from environment variables:
    /// DIBATTITO_PORT, DIBATTITO_SETTINGS_PATH, DIBATTITO_THESES_PATH,
    /// DIBATTITO_STATIC_DIR, DIBATTITO_SEED
    pub fn from_env() -> Self {
        Self {
            port: parse_var("DIBATTITO_PORT").unwrap_or(DEFAULT_PORT),
            settings_path: path_var("DIBATTITO_SETTINGS_PATH")
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH)),
            theses_path: path_var("DIBATTITO_THESES_PATH"),
            static_dir: path_var("DIBATTITO_STATIC_DIR")
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            seed: parse_var("DIBATTITO_SEED"),
        }
    }

    /// Loopback only: the game runs on a single device
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            theses_path: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn path_var(name: &str) -> Option<PathBuf> {
    non_empty_var(name).map(PathBuf::from)
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = non_empty_var(name)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}, using default", name, raw);
            None
        }
    }
}
