//! # Widgets
//!
//! Reusable UI components shared by screens.

pub mod layouts;
