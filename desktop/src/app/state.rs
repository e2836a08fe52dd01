//! # Application State Types
//!
//! All state-related types for the application: the conversation store,
//! in-flight request tracking, and settings.

use shared::{DifficultyLevel, Message};
use std::sync::Arc;

/// Chat state: the conversation store plus input and in-flight tracking.
#[derive(Debug, Clone)]
pub struct ChatState {
    /// Append-only conversation log; grows for the life of the session.
    /// Entries are immutable once pushed and ordered by arrival.
    pub messages: Vec<Message>,
    /// Current input buffer.
    pub input: String,
    /// Exactly one tutoring request may be outstanding at a time; the send
    /// action is disabled while this is set.
    pub sending: bool,
    /// Currently selected difficulty level. Mirrors into the `depth` field
    /// of the next request's config.
    pub level: DifficultyLevel,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            sending: false,
            level: DifficultyLevel::default(),
        }
    }
}

/// Settings state (theme configuration persistence).
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// Current theme configuration
    pub theme_config: crate::ui::theme::ThemeConfig,
    /// Path to the config file
    pub config_path: String,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            theme_config: crate::ui::theme::ThemeConfig::default(),
            config_path: "./pythagore-config.json".to_string(),
        }
    }
}

/// Global application state.
///
/// Wrapped in `Arc<RwLock<AppState>>` by [`crate::app::App`]; rendering works
/// from a cloned snapshot so no lock is held during UI code.
#[derive(Clone)]
pub struct AppState {
    /// Chat state (conversation store, busy flag, selected level)
    pub chat: ChatState,
    /// API client
    pub api_client: Option<Arc<crate::services::api::ApiClient>>,
    /// Result of the startup health probe; `None` until it settles
    pub backend_healthy: Option<bool>,
    /// Settings state (theme configuration)
    pub settings: SettingsState,
}
