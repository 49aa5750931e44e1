//! Telegram connection config: token, API URL, log path and the session database.
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE, DATABASE_URL.

use anyhow::Result;
use std::env;

/// Log file used when LOG_FILE is not set.
pub const DEFAULT_LOG_FILE: &str = "logs/actbot.log";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Overrides the Bot API base URL (e.g. a local mock server).
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    /// SQLite session database; `None` keeps sessions in memory.
    pub database_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. BOT_TOKEN is required unless `token` is given; it wins over the env.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let config = Self {
            bot_token,
            telegram_api_url,
            log_file,
            database_url,
        };
        config.validate()?;
        Ok(config)
    }

    /// Uses the given token; everything else takes its default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
            database_url: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(url) = &self.telegram_api_url {
            reqwest::Url::parse(url)
                .map_err(|e| anyhow::anyhow!("TELEGRAM_API_URL is not a valid URL ({}): {}", url, e))?;
        }
        Ok(())
    }
}
