//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the desktop client and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::chat`]**: Conversation turns (roles, messages, transcript flattening)
//!   - **[`dto::tutor`]**: Tutoring request/response bodies and the tutor configuration
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in Backend
//!
//! ```ignore
//! use shared::dto::tutor::{TutorRequest, TutorReply};
//! use axum::Json;
//!
//! async fn tutor_chat(Json(request): Json<TutorRequest>) -> Json<TutorReply> {
//!     // Request is automatically deserialized from JSON
//!     // Response is automatically serialized to JSON
//!     todo!()
//! }
//! ```
//!
//! ## Usage in Frontend
//!
//! ```ignore
//! use shared::dto::tutor::{TutorConfig, TutorRequest, TutorReply};
//!
//! let request = TutorRequest {
//!     message: "What is a prime number?".to_string(),
//!     config: TutorConfig::default(),
//!     chat_history: None,
//! };
//!
//! let reply: TutorReply = reqwest::Client::new()
//!     .post("http://127.0.0.1:8000/api/tutor")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
