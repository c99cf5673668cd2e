//! Environment-backed configuration.
//!
//! The whole runtime surface is environment variables (plus an optional
//! `.env` file loaded by `main`): credentials for the four external services,
//! a workspace database id, a chat id, and a handful of overridable defaults.

use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

/// Default candidate model list, priority order (cheaper/faster first).
const DEFAULT_MODELS: &[&str] = &["grok-3-mini", "grok-4-0709"];

const DEFAULT_LLM_URL: &str = "https://api.x.ai/v1/chat/completions";
const DEFAULT_QUOTES_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_NOTION_URL: &str = "https://api.notion.com/v1";

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub quotes: QuotesConfig,
    pub llm: LlmConfig,
    pub notion: NotionConfig,
    pub telegram: TelegramConfig,
    pub logging: LoggingConfig,
}

/// Quote source (CoinGecko-compatible) configuration.
#[derive(Debug, Clone)]
pub struct QuotesConfig {
    pub api_url: String,
}

/// LLM endpoint configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: String,
    /// Candidate model identifiers, tried in order until one succeeds.
    pub models: Vec<String>,
    pub max_tokens: usize,
    pub temperature: f64,
    /// Per-attempt request timeout.
    pub request_timeout: Duration,
    /// Delay between failed attempts.
    pub retry_delay: Duration,
}

/// Document workspace (Notion) configuration.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub token: String,
    pub database_id: String,
    pub api_url: String,
}

/// Telegram channel configuration.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: i64,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            quotes: QuotesConfig {
                api_url: env_or("COINGECKO_URL", DEFAULT_QUOTES_URL),
            },
            llm: LlmConfig {
                api_url: env_or("COINBRIEF_LLM_URL", DEFAULT_LLM_URL),
                api_key: require("GROK_API_KEY")?,
                models: parse_models(std::env::var("COINBRIEF_MODELS").ok()),
                max_tokens: 8000,
                temperature: 0.5,
                request_timeout: Duration::from_secs(120),
                retry_delay: Duration::from_secs(1),
            },
            notion: NotionConfig {
                token: require("NOTION_TOKEN")?,
                database_id: require("NOTION_DATABASE_ID")?,
                api_url: env_or("NOTION_API_URL", DEFAULT_NOTION_URL),
            },
            telegram: TelegramConfig {
                bot_token: require("TELEGRAM_BOT_TOKEN")?,
                chat_id: require("TELEGRAM_CHAT_ID")?.parse().map_err(|_| {
                    ConfigError::InvalidValue {
                        field: "TELEGRAM_CHAT_ID",
                        reason: "expected a numeric chat id".into(),
                    }
                })?,
            },
            logging: LoggingConfig {
                level: env_or("COINBRIEF_LOG_LEVEL", "info"),
                format: env_or("COINBRIEF_LOG_FORMAT", "pretty"),
            },
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.llm.models.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "COINBRIEF_MODELS",
                reason: "candidate model list cannot be empty".into(),
            }
            .into());
        }
        for (field, value) in [
            ("COINGECKO_URL", &self.quotes.api_url),
            ("COINBRIEF_LLM_URL", &self.llm.api_url),
            ("NOTION_API_URL", &self.notion.api_url),
        ] {
            Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

fn require(field: &'static str) -> Result<String> {
    std::env::var(field)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingVar { field }.into())
}

fn env_or(field: &str, default: &str) -> String {
    std::env::var(field)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.into())
}

fn parse_models(raw: Option<String>) -> Vec<String> {
    match raw {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from)
            .collect(),
        None => DEFAULT_MODELS.iter().map(|m| (*m).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const REQUIRED: &[&str] = &[
        "GROK_API_KEY",
        "NOTION_TOKEN",
        "NOTION_DATABASE_ID",
        "TELEGRAM_BOT_TOKEN",
        "TELEGRAM_CHAT_ID",
    ];

    fn clear_env() {
        for var in REQUIRED {
            std::env::remove_var(var);
        }
        std::env::remove_var("COINBRIEF_MODELS");
        std::env::remove_var("TELEGRAM_CHAT_ID");
    }

    fn set_required() {
        std::env::set_var("GROK_API_KEY", "test-key");
        std::env::set_var("NOTION_TOKEN", "secret-token");
        std::env::set_var("NOTION_DATABASE_ID", "db-123");
        std::env::set_var("TELEGRAM_BOT_TOKEN", "bot-token");
        std::env::set_var("TELEGRAM_CHAT_ID", "-100123456");
    }

    #[test]
    fn from_env_missing_api_key() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("GROK_API_KEY"), "{err}");
    }

    #[test]
    fn from_env_invalid_chat_id() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();
        std::env::set_var("TELEGRAM_CHAT_ID", "not-a-number");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_CHAT_ID"), "{err}");

        clear_env();
    }

    #[test]
    fn from_env_valid_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();

        let config = Config::from_env().unwrap();
        assert_eq!(config.telegram.chat_id, -100_123_456);
        assert_eq!(config.llm.models, vec!["grok-3-mini", "grok-4-0709"]);
        assert!(config.quotes.api_url.contains("coingecko.com"));

        clear_env();
    }

    #[test]
    fn model_list_override_is_ordered() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();
        std::env::set_var("COINBRIEF_MODELS", " fast-1, slow-2 ,, big-3 ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.llm.models, vec!["fast-1", "slow-2", "big-3"]);

        clear_env();
    }

    #[test]
    fn empty_model_list_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();
        std::env::set_var("COINBRIEF_MODELS", " , ");

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
