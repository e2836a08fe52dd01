//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::service::TutorService;
use reqwest::Client;

/// HTTP client for communicating with the tutoring backend.
///
/// Maintains a connection pool. The base URL is injected at construction
/// time rather than read from the environment at call sites.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given base URL.
    ///
    /// No request timeout is configured: a send is a single attempt that
    /// stays in flight until the backend settles it, and the busy flag
    /// already prevents overlapping requests.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl TutorService for ApiClient {
    async fn send_message(&self, request: shared::TutorRequest) -> Result<String, String> {
        crate::services::api::tutor::send_message(self, request).await
    }

    async fn check_health(&self) -> Result<(), String> {
        crate::services::api::health::check_health(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_base_url_kept_verbatim_otherwise() {
        let client = ApiClient::new("https://tutor.example.com/api");
        assert_eq!(client.base_url(), "https://tutor.example.com/api");
    }
}
