//! # Screen Modules
//!
//! Screen rendering follows one pattern: a `render` function receiving the
//! egui `Ui`, a cloned state snapshot (no locks held during rendering), and
//! the [`crate::app::App`] for user actions.

pub mod chat;
