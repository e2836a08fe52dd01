//! # Chat Handlers
//!
//! Handlers for sending student messages and switching the difficulty level.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::TutorService;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{flatten_transcript, DifficultyLevel, Message, TutorConfig, TutorRequest};
use std::sync::Arc;

/// Handle a send action (Send button or Enter).
///
/// Internal handler function - use [`crate::app::App::handle_send_click`] instead.
///
/// Empty input and a request already in flight are silent no-ops. Otherwise
/// the student turn is appended, the input cleared, the busy flag set, and a
/// single request task spawned; the result comes back as
/// [`AppEvent::TutorReply`].
pub(crate) fn handle_send_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (text, history, level) = {
        let mut state = state.write();

        if state.chat.sending || state.chat.input.trim().is_empty() {
            return;
        }

        let text = std::mem::take(&mut state.chat.input);
        let history = if state.chat.messages.is_empty() {
            None
        } else {
            Some(flatten_transcript(&state.chat.messages))
        };

        state.chat.messages.push(Message::student(text.clone()));
        state.chat.sending = true;

        (text, history, state.chat.level)
    }; // Lock released here

    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => {
            // Settle the request immediately so the busy flag clears and the
            // apology is shown through the normal failure path.
            let _ = event_tx.try_send(AppEvent::TutorReply(Err(
                "API client not available".to_string(),
            )));
            return;
        }
    };

    tracing::info!(level = ?level, chars = text.len(), "Sending student message");

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let request = TutorRequest {
            message: text,
            config: TutorConfig::for_level(level),
            chat_history: history,
        };
        let result = api_client.send_message(request).await;
        let _ = tx.send(AppEvent::TutorReply(result)).await;
    });
}

/// Select a difficulty level.
///
/// Only affects the `depth` of subsequent requests; existing messages are
/// untouched.
pub(crate) fn handle_level_select(state: Arc<RwLock<AppState>>, level: DifficultyLevel) {
    let mut state = state.write();
    if state.chat.level != level {
        tracing::debug!(level = ?level, "Difficulty level changed");
        state.chat.level = level;
    }
}
