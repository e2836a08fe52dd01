//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

/// Async task results sent to the main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Tutoring round trip settled: the reply text, or a diagnostic for the log
    TutorReply(Result<String, String>),
    /// Backend health probe settled
    HealthChecked(Result<(), String>),
}
