// Public API for integration tests and potential library usage

pub mod api;
pub mod config;
pub mod error;
pub mod protocol;
pub mod rng;
pub mod session;
pub mod settings;
pub mod state;
pub mod theses;
pub mod timer;
pub mod types;
pub mod ws;

// Re-export broadcast for testing
pub mod broadcast;
