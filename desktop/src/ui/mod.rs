//! # UI Rendering
//!
//! - **[`screens`]**: Screen rendering (the chat screen)
//! - **[`widgets`]**: Reusable layout components
//! - **[`theme`]**: Color palette, styling, and theme persistence

pub mod screens;
pub mod theme;
pub mod widgets;
