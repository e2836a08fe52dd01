//! Tutoring endpoint handler.

use crate::tutor::TutorEngine;
use axum::{extract::State, http::StatusCode, Json};
use shared::{ErrorResponse, TutorReply, TutorRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// `POST /api/tutor` - one student message in, one tutor reply out.
pub async fn tutor_chat(
    State(engine): State<Arc<TutorEngine>>,
    Json(request): Json<TutorRequest>,
) -> Result<(StatusCode, Json<TutorReply>), (StatusCode, Json<ErrorResponse>)> {
    info!(
        depth = ?request.config.depth,
        chars = request.message.len(),
        has_history = request.chat_history.is_some(),
        "Tutor request received"
    );

    if request.message.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Message must not be empty".to_string(),
            }),
        ));
    }

    let start = std::time::Instant::now();

    match engine.chat(&request).await {
        Ok(response) => {
            debug!(
                chars = response.len(),
                duration_ms = start.elapsed().as_millis(),
                "Tutor reply generated"
            );
            Ok((StatusCode::OK, Json(TutorReply { response })))
        }
        Err(e) => {
            warn!(
                error = %e,
                duration_ms = start.elapsed().as_millis(),
                "Tutor engine failed"
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to generate tutor response: {}", e),
                }),
            ))
        }
    }
}
