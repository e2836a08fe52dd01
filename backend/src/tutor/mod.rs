//! # Tutor Engine
//!
//! Renders the tutor configuration into a system prompt and drives the
//! upstream chat-completions API.

pub mod llm;
pub mod prompt;

pub use llm::LlmClient;

use crate::config::Config;
use crate::error::{AppError, Result};
use shared::TutorRequest;

/// The tutoring engine: prompt rendering plus the upstream round trip.
pub struct TutorEngine {
    llm: LlmClient,
}

impl TutorEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            llm: LlmClient::new(config),
        }
    }

    /// Produce a tutor reply for one student message.
    pub async fn chat(&self, request: &TutorRequest) -> Result<String> {
        let system_prompt = prompt::build_system_prompt(&request.config);
        let user_prompt =
            prompt::build_user_prompt(&request.message, request.chat_history.as_deref());

        let reply = self.llm.complete(&system_prompt, &user_prompt).await?;

        let reply = reply.trim().to_string();
        if reply.is_empty() {
            return Err(AppError::Upstream("Empty response from model".to_string()));
        }
        Ok(reply)
    }
}
