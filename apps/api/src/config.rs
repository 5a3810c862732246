use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub anthropic_api_url: String,
    pub llm_timeout_secs: u64,
    /// Transport attempts per model call. 1 means the matcher never retries.
    pub llm_max_attempts: u32,
    pub match_min_interest_chars: usize,
    pub match_max_candidates: usize,
    /// JSON file of alumni records. Falls back to the built-in seed when unset.
    pub alumni_directory_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            anthropic_api_url: std::env::var("ANTHROPIC_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            llm_max_attempts: parse_env("LLM_MAX_ATTEMPTS", 1)?,
            match_min_interest_chars: min_interest_chars(parse_env(
                "MATCH_MIN_INTEREST_CHARS",
                10,
            )?),
            match_max_candidates: parse_env("MATCH_MAX_CANDIDATES", 25)?,
            alumni_directory_path: std::env::var("ALUMNI_DIRECTORY_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Interests may never be empty, whatever the configured minimum.
fn min_interest_chars(configured: usize) -> usize {
    configured.max(1)
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
