use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_HISTORY_KEY: &str = "jd_analyzer_history";

/// Application configuration loaded from environment variables.
///
/// The history backend is chosen by what is set: `REDIS_URL` wins over
/// `HISTORY_FILE`; with neither, history lives in memory for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: Option<String>,
    pub history_file: Option<PathBuf>,
    pub history_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            history_file: optional_env("HISTORY_FILE").map(PathBuf::from),
            history_key: optional_env("HISTORY_KEY")
                .unwrap_or_else(|| DEFAULT_HISTORY_KEY.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads `key`, treating an unset or blank value as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
