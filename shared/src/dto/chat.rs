//! # Chat Data Transfer Objects
//!
//! Conversation turns exchanged between the student and the tutor.

use serde::{Deserialize, Serialize};

/// Who authored a conversation turn.
///
/// A closed two-variant enum rather than a free-form string, so exhaustive
/// handling is checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
}

impl Role {
    /// Label used when flattening a transcript for the backend.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
        }
    }
}

/// A single conversation turn.
///
/// Immutable once appended; ordering is arrival order. There is no identity
/// beyond position in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn student(content: impl Into<String>) -> Self {
        Self {
            role: Role::Student,
            content: content.into(),
        }
    }

    pub fn tutor(content: impl Into<String>) -> Self {
        Self {
            role: Role::Tutor,
            content: content.into(),
        }
    }
}

/// Flatten prior turns into the `"role: content"` transcript the backend
/// accepts as `chat_history`.
pub fn flatten_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role.label(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}
