//! # Health Endpoint
//!
//! Startup probe against the backend's liveness route.

use super::client::ApiClient;
use shared::HealthResponse;

/// Probe the backend health endpoint.
pub async fn check_health(client: &ApiClient) -> Result<(), String> {
    let response = client
        .client
        .get(format!("{}/health", client.base_url()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("Health check failed: {}", response.status()));
    }

    let health = response
        .json::<HealthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if health.status == "healthy" {
        Ok(())
    } else {
        Err(format!("Backend reported status: {}", health.status))
    }
}
