//! # Tutoring Data Transfer Objects
//!
//! Request and response bodies for the tutoring endpoint, plus the
//! fixed-shape tutor configuration.

use serde::{Deserialize, Serialize};

/// Coarse difficulty setting controlling response complexity.
///
/// Sent to the backend as the `depth` field of [`TutorConfig`]. Exactly one
/// level is selected at any time; serialized as its capitalized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyLevel {
    Elementary,
    #[default]
    Highschool,
    College,
    Graduate,
}

impl DifficultyLevel {
    /// All levels in selector order.
    pub fn all() -> &'static [DifficultyLevel] {
        &[
            DifficultyLevel::Elementary,
            DifficultyLevel::Highschool,
            DifficultyLevel::College,
            DifficultyLevel::Graduate,
        ]
    }

    /// Display label for the level-selection buttons.
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Elementary => "Elementary",
            DifficultyLevel::Highschool => "Highschool",
            DifficultyLevel::College => "College",
            DifficultyLevel::Graduate => "Graduate",
        }
    }
}

/// Fixed-shape tutor configuration sent with every request.
///
/// Only `depth` tracks the selected difficulty level; the remaining fields
/// are pinned to the house tutoring style.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TutorConfig {
    pub depth: DifficultyLevel,
    pub learning_style: String,
    pub communication_style: String,
    pub tone_style: String,
    pub reasoning_framework: String,
    pub use_emojis: bool,
    pub language: String,
}

impl TutorConfig {
    /// Build the configuration for the given difficulty level.
    pub fn for_level(level: DifficultyLevel) -> Self {
        Self {
            depth: level,
            learning_style: "Active".to_string(),
            communication_style: "Socratic".to_string(),
            tone_style: "Encouraging".to_string(),
            reasoning_framework: "Causal".to_string(),
            use_emojis: true,
            language: "English".to_string(),
        }
    }
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self::for_level(DifficultyLevel::default())
    }
}

/// Body of `POST /api/tutor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorRequest {
    pub message: String,
    pub config: TutorConfig,
    /// Prior turns flattened to `"role: content"` lines, one per turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_history: Option<String>,
}

/// Successful tutoring response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TutorReply {
    pub response: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}
