//! # Backend API Client Module
//!
//! HTTP client for communicating with the tutoring backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient struct and common functionality
//! ├── tutor.rs    - Tutoring endpoint (send message, receive reply)
//! └── health.rs   - Health probe endpoint
//! ```

pub mod client;
pub mod health;
pub mod tutor;

pub use client::ApiClient;
