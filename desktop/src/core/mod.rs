//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`TutorService`)

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::TutorService;
