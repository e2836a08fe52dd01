//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::TutorRequest;

/// Trait for the tutoring API surface.
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait TutorService: Send + Sync {
    /// Send one student message and return the tutor's reply text.
    async fn send_message(&self, request: TutorRequest) -> Result<String, String>;

    /// Probe the backend health endpoint.
    async fn check_health(&self) -> Result<(), String>;
}
