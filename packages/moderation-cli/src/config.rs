use anyhow::{Context, Result};
use comment_board::BoardLabels;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Option<Duration>,
    pub labels: BoardLabels,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let timeout = match env::var("COMMENTS_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(
                secs.parse()
                    .context("COMMENTS_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            Err(_) => None,
        };

        let defaults = BoardLabels::default();

        Ok(Self {
            api_url: env::var("COMMENTS_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            timeout,
            labels: BoardLabels {
                approve: env::var("COMMENTS_APPROVE_LABEL").unwrap_or(defaults.approve),
                delete: env::var("COMMENTS_DELETE_LABEL").unwrap_or(defaults.delete),
            },
        })
    }
}
