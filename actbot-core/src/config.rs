//! Engine config: user-facing fallback texts and the text chunk size. Loaded from env.

use std::env;

use crate::error::{ActbotError, Result};

/// Telegram accepts 4096 characters per message; chunks stay below that.
pub const DEFAULT_MAX_TEXT_LEN: usize = 4000;
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const DEFAULT_UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command.";

/// Texts and limits used by the engine and the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// ACTBOT_ERROR_MESSAGE: sent when an action fails.
    pub error_message: String,
    /// ACTBOT_UNKNOWN_COMMAND_MESSAGE: sent when the matched action produces no output.
    pub unknown_command_message: String,
    /// ACTBOT_MAX_TEXT_LEN: longer texts are split into several messages.
    pub max_text_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            unknown_command_message: DEFAULT_UNKNOWN_COMMAND_MESSAGE.to_string(),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }
}

impl EngineConfig {
    /// Loads from env; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let error_message = env::var("ACTBOT_ERROR_MESSAGE").unwrap_or(defaults.error_message);
        let unknown_command_message = env::var("ACTBOT_UNKNOWN_COMMAND_MESSAGE")
            .unwrap_or(defaults.unknown_command_message);
        let max_text_len = match env::var("ACTBOT_MAX_TEXT_LEN") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                ActbotError::Config(format!("ACTBOT_MAX_TEXT_LEN is not a number: {}", raw))
            })?,
            Err(_) => defaults.max_text_len,
        };

        let config = Self {
            error_message,
            unknown_command_message,
            max_text_len,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_text_len == 0 {
            return Err(ActbotError::Config(
                "ACTBOT_MAX_TEXT_LEN must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("ACTBOT_ERROR_MESSAGE");
        env::remove_var("ACTBOT_UNKNOWN_COMMAND_MESSAGE");
        env::remove_var("ACTBOT_MAX_TEXT_LEN");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = EngineConfig::from_env().unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.max_text_len, 4000);
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("ACTBOT_ERROR_MESSAGE", "Oops");
        env::set_var("ACTBOT_MAX_TEXT_LEN", "100");
        let config = EngineConfig::from_env().unwrap();
        assert_eq!(config.error_message, "Oops");
        assert_eq!(config.unknown_command_message, DEFAULT_UNKNOWN_COMMAND_MESSAGE);
        assert_eq!(config.max_text_len, 100);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_chunk_size() {
        clear_env();
        env::set_var("ACTBOT_MAX_TEXT_LEN", "zero");
        assert!(EngineConfig::from_env().is_err());
        env::set_var("ACTBOT_MAX_TEXT_LEN", "0");
        assert!(EngineConfig::from_env().is_err());
        clear_env();
    }
}
