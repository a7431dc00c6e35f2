//! WebSocket message dispatch
//!
//! Every screen on the device talks to the same session, so there is no role
//! check here. Accepted actions reach all clients (the sender included)
//! through the broadcast channel; only rejections and explicit state requests
//! get a direct reply.

use crate::error::ActionError;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use std::sync::Arc;

fn error_reply(e: ActionError) -> ServerMessage {
    ServerMessage::Error {
        code: e.code().to_string(),
        msg: e.to_string(),
    }
}

/// Reply only when the action was rejected
fn reply<T>(result: Result<T, ActionError>) -> Option<ServerMessage> {
    result.err().map(error_reply)
}

/// Handle client messages and return optional response
pub async fn handle_message(msg: ClientMessage, state: &Arc<AppState>) -> Option<ServerMessage> {
    match msg {
        // Roster
        ClientMessage::AddPlayer { name } => reply(state.apply(|s| s.add_player(&name)).await),
        ClientMessage::RemovePlayer { player_id } => {
            reply(state.apply(|s| s.remove_player(&player_id)).await)
        }

        // Game flow
        ClientMessage::StartGame => reply(state.apply(|s| s.start_game()).await),
        ClientMessage::StartRound => reply(state.apply(|s| s.start_round()).await),
        ClientMessage::NextPhase => reply(state.apply(|s| s.next_phase()).await),
        ClientMessage::SubmitVotes { votes } => {
            reply(state.apply(|s| s.submit_votes(&votes)).await)
        }
        ClientMessage::EndGame => reply(state.apply(|s| s.end_game()).await),
        ClientMessage::ResetGame => reply(
            state
                .apply(|s| {
                    s.reset_game();
                    Ok(())
                })
                .await,
        ),

        // Settings
        ClientMessage::SetGameMode { mode } => reply(
            state
                .apply(|s| {
                    s.set_game_mode(mode);
                    Ok(())
                })
                .await,
        ),
        ClientMessage::ToggleSound => reply(
            state
                .apply(|s| {
                    s.toggle_sound();
                    Ok(())
                })
                .await,
        ),
        ClientMessage::ToggleTheme => reply(
            state
                .apply(|s| {
                    s.toggle_theme();
                    Ok(())
                })
                .await,
        ),
        ClientMessage::ToggleFinalDiscussion => reply(
            state
                .apply(|s| {
                    s.toggle_final_discussion();
                    Ok(())
                })
                .await,
        ),
        ClientMessage::SetRoundDuration { seconds } => reply(
            state
                .apply(|s| {
                    s.set_round_duration(seconds);
                    Ok(())
                })
                .await,
        ),

        // Timer
        ClientMessage::ToggleTimer => {
            let info = state.toggle_timer().await;
            tracing::debug!("Timer toggled: {:?}", info.status);
            None
        }

        ClientMessage::GetState => Some(ServerMessage::State {
            snapshot: state.snapshot().await,
        }),
    }
}
