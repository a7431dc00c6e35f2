use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dibattito::{
    api, broadcast, config::ServerConfig, rng::GameRng, session::GameSession,
    settings::SettingsStore, state::AppState, theses::ThesisPool, ws,
};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dibattito=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Dibattito...");

    let config = ServerConfig::from_env();

    let theses = match &config.theses_path {
        Some(path) => match ThesisPool::load(path) {
            Ok(pool) => {
                tracing::info!("Loaded {} theses from {}", pool.len(), path.display());
                pool
            }
            Err(e) => {
                tracing::error!("Failed to load theses from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ThesisPool::builtin(),
    };

    let store = SettingsStore::new(config.settings_path.clone());
    let settings = store.load_or_default().await;

    let rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_os_rng(),
    };
    tracing::info!("Game RNG seed: {}", rng.seed());

    let session = GameSession::new(settings, Arc::new(theses), rng);
    let state = Arc::new(AppState::new(session).with_settings_store(store));

    // Spawn background task counting down the phase timer
    broadcast::spawn_timer_ticker(state.clone());

    let app = Router::new()
        .route("/ws", get(ws::ws_handler))
        .merge(api::router())
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
