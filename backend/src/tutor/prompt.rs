//! System prompt rendering from the tutor configuration.

use shared::{DifficultyLevel, TutorConfig};

/// Render the tutor persona for one request.
pub fn build_system_prompt(config: &TutorConfig) -> String {
    let emoji = if config.use_emojis {
        "Use emojis where they aid engagement."
    } else {
        "Do not use emojis."
    };

    format!(
        "You are Pythagore, a math tutor.\n\
         Teach at {depth}.\n\
         Learning style: {learning}. Communication style: {communication}.\n\
         Tone: {tone}. Reasoning framework: {reasoning}.\n\
         {emoji}\n\
         Respond in {language}.\n\
         Guide the student towards the answer instead of stating it outright.",
        depth = depth_directive(config.depth),
        learning = config.learning_style,
        communication = config.communication_style,
        tone = config.tone_style,
        reasoning = config.reasoning_framework,
        emoji = emoji,
        language = config.language,
    )
}

fn depth_directive(depth: DifficultyLevel) -> &'static str {
    match depth {
        DifficultyLevel::Elementary => "an elementary school level, with simple words and small steps",
        DifficultyLevel::Highschool => "a high school level, assuming algebra fundamentals",
        DifficultyLevel::College => "a college level, comfortable with calculus and proofs",
        DifficultyLevel::Graduate => "a graduate level, with full mathematical rigor",
    }
}

/// Combine the transcript of prior turns with the new student message.
pub fn build_user_prompt(message: &str, chat_history: Option<&str>) -> String {
    match chat_history {
        Some(history) if !history.trim().is_empty() => {
            format!("Conversation so far:\n{}\n\nstudent: {}", history, message)
        }
        _ => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_reflects_depth() {
        let elementary = build_system_prompt(&TutorConfig::for_level(DifficultyLevel::Elementary));
        let graduate = build_system_prompt(&TutorConfig::for_level(DifficultyLevel::Graduate));

        assert!(elementary.contains("elementary school level"));
        assert!(graduate.contains("graduate level"));
        assert_ne!(elementary, graduate);
    }

    #[test]
    fn test_system_prompt_carries_style_fields() {
        let prompt = build_system_prompt(&TutorConfig::default());

        assert!(prompt.contains("Learning style: Active"));
        assert!(prompt.contains("Communication style: Socratic"));
        assert!(prompt.contains("Tone: Encouraging"));
        assert!(prompt.contains("Reasoning framework: Causal"));
        assert!(prompt.contains("Respond in English"));
    }

    #[test]
    fn test_emoji_directive_follows_flag() {
        let mut config = TutorConfig::default();
        assert!(build_system_prompt(&config).contains("Use emojis"));

        config.use_emojis = false;
        assert!(build_system_prompt(&config).contains("Do not use emojis"));
    }

    #[test]
    fn test_user_prompt_without_history_is_plain() {
        assert_eq!(build_user_prompt("Is 7 prime?", None), "Is 7 prime?");
        assert_eq!(build_user_prompt("Is 7 prime?", Some("  ")), "Is 7 prime?");
    }

    #[test]
    fn test_user_prompt_prepends_history() {
        let prompt = build_user_prompt("And 9?", Some("student: Is 7 prime?\ntutor: Yes."));

        assert!(prompt.starts_with("Conversation so far:\nstudent: Is 7 prime?"));
        assert!(prompt.ends_with("student: And 9?"));
    }
}
