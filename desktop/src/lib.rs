//! # Pythagore Desktop Client - Library Root
//!
//! A native desktop GUI for the Pythagore math tutor. This library crate
//! contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              desktop (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTP/JSON
//!                          ▼
//!               ┌─────────────────────┐
//!               │  Tutoring backend   │
//!               │  (Axum server)      │
//!               └─────────────────────┘
//! ```
//!
//! ## Event-Driven Architecture
//!
//! The application uses an **async channel** for communication:
//! - Main thread: handles input and rendering (single-threaded, egui)
//! - Async tasks: network requests (Tokio runtime)
//!
//! Results flow from async tasks back to the main thread as [`app::AppEvent`]
//! values, drained once per frame by `App::on_tick`. Application state lives
//! in `Arc<RwLock<AppState>>`, with locks held briefly to keep the UI
//! responsive. The conversation log itself is only ever mutated from the
//! event-handling context, so exactly one tutoring request can be in flight
//! at a time (enforced by a busy flag).
//!
//! ## Module Structure
//!
//! - **app**: Application state, events, and user action handlers
//! - **core**: Error types and service traits for dependency injection
//! - **services**: Backend HTTP client (`api`)
//! - **ui**: Rendering (chat screen, theme, layout widgets)
//! - **utils**: Pure helpers (tutor reply formatting)

pub mod app;
pub mod core;
pub mod logging;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState};
pub use core::{AppError, Result};
