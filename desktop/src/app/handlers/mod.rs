//! # User Action Handlers
//!
//! Handlers invoked by the UI layer. Each handler validates, updates state
//! with a briefly-held lock, and spawns async work where a network round
//! trip is needed.

pub(crate) mod chat;
pub(crate) mod settings;
