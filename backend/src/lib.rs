//! # Pythagore Tutoring Backend
//!
//! Axum HTTP server exposing the tutoring API consumed by the desktop client.
//!
//! ## Endpoints
//!
//! - `POST /api/tutor` - one student message in, one tutor reply out
//! - `GET /health` - liveness probe
//! - `GET /` - running banner
//!
//! The tutor engine renders the request's [`shared::TutorConfig`] into a
//! system prompt and forwards the exchange to an OpenAI-compatible
//! chat-completions API.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod tutor;

pub use config::Config;
pub use error::{AppError, Result};
