//! # Tutoring Endpoint
//!
//! Sends one student message to the backend and returns the tutor's reply text.

use super::client::ApiClient;
use shared::{ErrorResponse, TutorReply, TutorRequest};

/// Perform one tutoring round trip.
///
/// A single attempt: no retry, no backoff. Any network error, non-success
/// status, or parse failure comes back as an `Err` with a diagnostic string
/// for the log; the caller decides what the user sees.
#[tracing::instrument(skip(client, request), fields(chars = request.message.len()))]
pub async fn send_message(client: &ApiClient, request: TutorRequest) -> Result<String, String> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/api/tutor", client.base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Tutor request network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response
            .json::<TutorReply>()
            .await
            .map(|reply| reply.response)
            .map_err(|e| {
                tracing::error!(error = %e, "Tutor response parse error");
                format!("Failed to parse response: {}", e)
            });

        if result.is_ok() {
            tracing::info!(duration_ms = duration.as_millis(), "Tutor reply received");
        }
        result
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("Tutor request failed: {}", status));

        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Tutor request failed"
        );
        Err(error)
    }
}
