use std::time::Duration;

use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: Option<String>,
    pub log_level: String,
    pub http_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("FEED_API_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());
        let http_timeout_secs = parse_u64(
            "FEED_HTTP_TIMEOUT_SECS",
            std::env::var("FEED_HTTP_TIMEOUT_SECS").ok(),
            15,
        )?;

        Ok(Self {
            api_url,
            log_level,
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}

fn parse_u64(key: &str, raw: Option<String>, default: u64) -> Result<u64> {
    let value = raw
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
