//! # Event Handler
//!
//! Handles async event results from background tasks, updating application
//! state accordingly.

use crate::app::{App, AppEvent};
use crate::utils::format::format_tutor_response;
use shared::Message;

/// Fallback shown in place of a tutor reply when the round trip fails.
/// The underlying error goes to the log, never to the student.
pub(crate) const APOLOGY: &str =
    "I apologize, but I encountered an error. Could you please try again?";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per-event for minimal duration.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::TutorReply(result) => {
                self.handle_tutor_reply(result);
            }
            AppEvent::HealthChecked(result) => {
                self.handle_health_checked(result);
            }
        }
    }
}

impl App {
    fn handle_tutor_reply(&mut self, result: Result<String, String>) {
        let mut state = self.state.write();
        state.chat.sending = false;

        match result {
            Ok(text) => {
                let formatted = format_tutor_response(&text);
                tracing::info!(chars = formatted.len(), "Appending tutor reply");
                state.chat.messages.push(Message::tutor(formatted));
            }
            Err(e) => {
                tracing::error!(error = %e, "Tutor request failed - showing apology");
                state.chat.messages.push(Message::tutor(APOLOGY));
            }
        }
    }

    fn handle_health_checked(&mut self, result: Result<(), String>) {
        let healthy = result.is_ok();
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Backend health probe failed");
        }

        let mut state = self.state.write();
        state.backend_healthy = Some(healthy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    #[test]
    fn test_successful_reply_appends_tutor_turn() {
        let mut app = App::new("http://127.0.0.1:9");

        // Simulate the state right after a send: student turn appended,
        // request in flight.
        {
            let mut state = app.state.write();
            state.chat.messages.push(Message::student("What is 6 * 7?"));
            state.chat.sending = true;
        }

        app.handle_event_impl(AppEvent::TutorReply(Ok("42".to_string())));

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 2);
        assert_eq!(state.chat.messages[0].role, Role::Student);
        assert_eq!(state.chat.messages[0].content, "What is 6 * 7?");
        assert_eq!(state.chat.messages[1].role, Role::Tutor);
        assert_eq!(state.chat.messages[1].content, "42");
        assert!(!state.chat.sending);
    }

    #[test]
    fn test_reply_is_formatted_before_append() {
        let mut app = App::new("http://127.0.0.1:9");
        {
            let mut state = app.state.write();
            state.chat.sending = true;
        }

        app.handle_event_impl(AppEvent::TutorReply(Ok(
            "*waves* Hello\n\nWorld*smiles*".to_string()
        )));

        let state = app.state.read();
        assert_eq!(state.chat.messages.last().unwrap().content, "Hello\n\nWorld");
    }

    #[test]
    fn test_failed_reply_appends_apology() {
        let mut app = App::new("http://127.0.0.1:9");
        {
            let mut state = app.state.write();
            state.chat.messages.push(Message::student("What is 6 * 7?"));
            state.chat.sending = true;
        }

        app.handle_event_impl(AppEvent::TutorReply(Err("HTTP 500".to_string())));

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 2);
        assert_eq!(state.chat.messages[1].role, Role::Tutor);
        assert_eq!(state.chat.messages[1].content, APOLOGY);
        assert!(!state.chat.sending);
    }

    #[test]
    fn test_health_probe_result_is_recorded() {
        let mut app = App::new("http://127.0.0.1:9");
        assert_eq!(app.state.read().backend_healthy, None);

        app.handle_event_impl(AppEvent::HealthChecked(Ok(())));
        assert_eq!(app.state.read().backend_healthy, Some(true));

        app.handle_event_impl(AppEvent::HealthChecked(Err("refused".to_string())));
        assert_eq!(app.state.read().backend_healthy, Some(false));
    }
}
