//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async task
//! results, and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                Main Thread (egui)                   │
//! │  App (orchestrator)                                 │
//! │  - update()        - called every frame             │
//! │  - on_tick()       - drains async results           │
//! │  - handle_*        - user action handlers           │
//! │         │                                           │
//! │  State: Arc<RwLock<AppState>>                       │
//! └─────────┬───────────────────────────────────────────┘
//!           │ async_channel (unbounded)
//! ┌─────────▼───────────────────────────────────────────┐
//! │            Async Tasks (Tokio)                      │
//! │  - tutoring round trip (one in flight at a time)    │
//! │  - startup health probe                             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! All state mutation happens on the main thread: async tasks never touch the
//! conversation log directly, they send an [`AppEvent`] that `on_tick` applies
//! next frame. Locks are held briefly to keep the UI responsive.

mod event_handler;
mod events;
mod handlers;
mod state;

pub use events::AppEvent;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::DifficultyLevel;
use std::sync::Arc;

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - `read()` for rendering snapshots (shared lock)
    /// - `write()` for updates (exclusive lock, held briefly)
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()` with
    /// `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into async tasks.
    event_tx: Sender<AppEvent>,

    /// Whether the startup health probe has been spawned yet.
    health_probe_started: bool,
}

impl App {
    /// Create a new application instance.
    ///
    /// `api_url` is the backend base URL, resolved once by the caller and
    /// injected here; nothing else consults the environment. Construction
    /// spawns no tasks - the health probe starts on the first frame.
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_client = Arc::new(crate::services::api::ApiClient::new(api_url));

        let theme_config = handlers::settings::load_settings();
        let settings = SettingsState {
            theme_config,
            config_path: handlers::settings::get_config_path()
                .to_string_lossy()
                .to_string(),
        };

        let state = AppState {
            chat: ChatState::default(),
            api_client: Some(api_client),
            backend_healthy: None,
            settings,
        };

        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - event channel created");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            health_probe_started: false,
        }
    }

    /// Called every frame to process async events and update state.
    ///
    /// Non-blocking: drains all pending events with `try_recv()` and applies
    /// each through the event handler.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handle one async event result.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Spawn the one-shot startup health probe. Subsequent calls are no-ops.
    pub fn spawn_health_probe(&mut self) {
        if self.health_probe_started {
            return;
        }
        self.health_probe_started = true;

        let api_client = match self.state.read().api_client.as_ref() {
            Some(client) => client.clone(),
            None => return,
        };

        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            use crate::core::service::TutorService;
            let result = api_client.check_health().await;
            let _ = tx.send(AppEvent::HealthChecked(result)).await;
        });
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle a send action (Send button or Enter without Shift)
    pub fn handle_send_click(&mut self) {
        handlers::chat::handle_send_click(self.state.clone(), self.event_tx.clone());
    }

    /// Handle a difficulty level selection
    pub fn handle_level_select(&mut self, level: DifficultyLevel) {
        handlers::chat::handle_level_select(self.state.clone(), level);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();
        self.spawn_health_probe();

        // Render from a snapshot so no lock is held during UI code.
        let snapshot = self.state.read().clone();

        if snapshot.chat.sending {
            // Keep the thinking indicator animating while a request is in flight.
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::ui::screens::chat::render(ui, &snapshot, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    fn test_app() -> App {
        // Discard port: any spawned request fails fast with connection refused.
        App::new("http://127.0.0.1:9")
    }

    // ========== Initial State Tests ==========

    #[test]
    fn test_initial_state() {
        let app = test_app();
        let state = app.state.read();

        assert!(state.chat.messages.is_empty());
        assert!(state.chat.input.is_empty());
        assert!(!state.chat.sending);
        assert_eq!(state.chat.level, DifficultyLevel::Highschool);
        assert!(state.api_client.is_some());
        assert_eq!(state.backend_healthy, None);
    }

    // ========== Level Selection Tests ==========

    #[test]
    fn test_level_select_updates_level_only() {
        let mut app = test_app();
        {
            let mut state = app.state.write();
            state.chat.messages.push(shared::Message::student("hi"));
        }

        app.handle_level_select(DifficultyLevel::Graduate);

        let state = app.state.read();
        assert_eq!(state.chat.level, DifficultyLevel::Graduate);
        // Prior messages are unaffected by a level change.
        assert_eq!(state.chat.messages.len(), 1);
        assert_eq!(state.chat.messages[0].content, "hi");
    }

    #[test]
    fn test_level_select_same_level_is_noop() {
        let mut app = test_app();
        app.handle_level_select(DifficultyLevel::Highschool);
        assert_eq!(app.state.read().chat.level, DifficultyLevel::Highschool);
    }

    // ========== Send Validation Tests ==========

    #[test]
    fn test_send_with_empty_input_does_nothing() {
        let mut app = test_app();
        app.handle_send_click();

        let state = app.state.read();
        assert!(state.chat.messages.is_empty());
        assert!(!state.chat.sending);
    }

    #[test]
    fn test_send_with_whitespace_input_does_nothing() {
        let mut app = test_app();
        app.state.write().chat.input = "   \n ".to_string();

        app.handle_send_click();

        let state = app.state.read();
        assert!(state.chat.messages.is_empty());
        assert!(!state.chat.sending);
        // The rejected input is left in the buffer.
        assert_eq!(state.chat.input, "   \n ");
    }

    #[test]
    fn test_send_while_request_in_flight_does_nothing() {
        let mut app = test_app();
        {
            let mut state = app.state.write();
            state.chat.sending = true;
            state.chat.input = "second question".to_string();
        }

        app.handle_send_click();

        let state = app.state.read();
        assert!(state.chat.messages.is_empty());
        assert_eq!(state.chat.input, "second question");
        assert!(state.chat.sending);
    }

    // ========== Send Flow Tests ==========

    #[tokio::test]
    async fn test_send_appends_student_turn_and_sets_busy_flag() {
        let mut app = test_app();
        app.state.write().chat.input = "What is 2 + 2?".to_string();

        app.handle_send_click();

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 1);
        assert_eq!(state.chat.messages[0].role, Role::Student);
        assert_eq!(state.chat.messages[0].content, "What is 2 + 2?");
        assert!(state.chat.input.is_empty());
        assert!(state.chat.sending);
    }

    #[tokio::test]
    async fn test_failed_round_trip_settles_with_apology() {
        let mut app = test_app();
        app.state.write().chat.input = "What is 2 + 2?".to_string();

        app.handle_send_click();

        // The backend is unreachable, so the spawned task settles with an Err.
        let event = app.event_rx.recv().await.expect("task should send an event");
        app.handle_event(event);

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 2);
        assert_eq!(state.chat.messages[0].role, Role::Student);
        assert_eq!(state.chat.messages[1].role, Role::Tutor);
        assert_eq!(
            state.chat.messages[1].content,
            "I apologize, but I encountered an error. Could you please try again?"
        );
        assert!(!state.chat.sending);
    }

    // ========== Event Pump Tests ==========

    #[test]
    fn test_on_tick_drains_pending_events() {
        let mut app = test_app();
        app.state.write().chat.sending = true;

        app.event_tx
            .try_send(AppEvent::TutorReply(Ok("42".to_string())))
            .unwrap();
        app.on_tick();

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 1);
        assert_eq!(state.chat.messages[0].content, "42");
        assert!(!state.chat.sending);
    }
}
