//! Data Transfer Objects shared between the desktop client and the backend.

pub mod chat;
pub mod tutor;

pub use chat::*;
pub use tutor::*;
