use std::env;

/// Default upstream chat-completions endpoint.
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1/chat/completions";

/// Default upstream model.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("TUTOR_API_KEY")
            .map_err(|_| "TUTOR_API_KEY must be set in environment")?;

        let api_base = env::var("TUTOR_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let model = env::var("TUTOR_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_tokens = env::var("TUTOR_MAX_TOKENS")
            .unwrap_or_else(|_| "700".to_string())
            .parse()
            .map_err(|_| "TUTOR_MAX_TOKENS must be a valid number")?;

        let temperature = env::var("TUTOR_TEMPERATURE")
            .unwrap_or_else(|_| "0.7".to_string())
            .parse()
            .map_err(|_| "TUTOR_TEMPERATURE must be a valid number")?;

        Ok(Self {
            api_key,
            api_base,
            model,
            max_tokens,
            temperature,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("TUTOR_API_KEY must not be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err("TUTOR_MAX_TOKENS must be greater than zero".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("TUTOR_TEMPERATURE must be between 0.0 and 2.0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            api_key: "sk-test".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 700,
            temperature: 0.7,
        }
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut config = valid_config();
        config.api_key = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        let mut config = valid_config();
        config.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let mut config = valid_config();
        config.temperature = 2.5;
        assert!(config.validate().is_err());
    }
}
