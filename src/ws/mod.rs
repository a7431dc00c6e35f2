pub mod handlers;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::protocol::{ClientMessage, ServerMessage, PROTOCOL_VERSION};
use crate::state::AppState;

/// WebSocket upgrade handler
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    tracing::info!("WebSocket connection request");
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Build the greeting sent to a freshly connected screen
pub async fn welcome_message(state: &AppState) -> ServerMessage {
    ServerMessage::Welcome {
        protocol: PROTOCOL_VERSION.to_string(),
        snapshot: state.snapshot().await,
        timer: state.timer_info().await,
        server_now: chrono::Utc::now().to_rfc3339(),
    }
}

/// Next message to forward from the broadcast channel.
///
/// A client that fell behind gets a full snapshot in place of the dropped
/// updates. Returns None once the channel is closed.
pub async fn next_broadcast(
    rx: &mut broadcast::Receiver<ServerMessage>,
    state: &AppState,
) -> Option<ServerMessage> {
    match rx.recv().await {
        Ok(msg) => Some(msg),
        Err(RecvError::Lagged(skipped)) => {
            tracing::warn!("Client lagged behind by {} messages", skipped);
            Some(ServerMessage::State {
                snapshot: state.snapshot().await,
            })
        }
        Err(RecvError::Closed) => None,
    }
}

/// Parse a text frame and dispatch it
pub async fn handle_text(text: &str, state: &Arc<AppState>) -> Option<ServerMessage> {
    match serde_json::from_str::<ClientMessage>(text) {
        Ok(client_msg) => handlers::handle_message(client_msg, state).await,
        Err(e) => {
            tracing::warn!("Failed to parse client message: {}", e);
            Some(ServerMessage::Error {
                code: "PARSE_ERROR".to_string(),
                msg: format!("Invalid message format: {}", e),
            })
        }
    }
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // Subscribe before the welcome so no update slips in between
    let mut broadcast_rx = state.broadcast.subscribe();

    let welcome = welcome_message(&state).await;
    if let Ok(msg) = serde_json::to_string(&welcome) {
        if sender.send(Message::Text(msg.into())).await.is_err() {
            tracing::error!("Failed to send welcome message");
            return;
        }
    }

    tracing::info!("WebSocket connected");

    loop {
        tokio::select! {
            broadcast_msg = next_broadcast(&mut broadcast_rx, &state) => {
                let Some(msg) = broadcast_msg else {
                    break;
                };
                if let Ok(json) = serde_json::to_string(&msg) {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
            }

            ws_msg = receiver.next() => {
                match ws_msg {
                    Some(Ok(Message::Text(text))) => {
                        tracing::debug!("Received message: {}", text);

                        if let Some(response) = handle_text(&text, &state).await {
                            if let Ok(json) = serde_json::to_string(&response) {
                                if sender.send(Message::Text(json.into())).await.is_err() {
                                    tracing::error!("Failed to send response");
                                    break;
                                }
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) => {
                        tracing::info!("WebSocket closed");
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if sender.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("WebSocket error: {}", e);
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    tracing::info!("WebSocket connection closed");
}
