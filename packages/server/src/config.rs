use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

use crate::domains::triage::utils::location::{
    DEFAULT_FALLBACK_JITTER_DEG, DEFAULT_LANDMARK_JITTER_DEG, MAX_JITTER_DEG,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Absent: every message gets the fallback extraction
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub openai_model: String,
    pub openai_timeout_secs: u64,
    pub landmark_jitter_deg: f64,
    pub fallback_jitter_deg: f64,
    /// Empty: permissive CORS
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: parse_var("PORT", 8080)?,
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_base_url: non_empty_var("OPENAI_BASE_URL"),
            openai_model: non_empty_var("OPENAI_MODEL")
                .unwrap_or_else(|| openai_client::DEFAULT_MODEL.to_string()),
            openai_timeout_secs: parse_var("OPENAI_TIMEOUT_SECS", 30)?,
            landmark_jitter_deg: parse_jitter("LANDMARK_JITTER_DEG", DEFAULT_LANDMARK_JITTER_DEG)?,
            fallback_jitter_deg: parse_jitter("FALLBACK_JITTER_DEG", DEFAULT_FALLBACK_JITTER_DEG)?,
            allowed_origins: non_empty_var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty_var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid {}", key, std::any::type_name::<T>())),
        None => Ok(default),
    }
}

/// Jitter ranges must be finite and within `0.0..=MAX_JITTER_DEG` degrees.
fn parse_jitter(key: &str, default: f64) -> Result<f64> {
    let value: f64 = parse_var(key, default)?;
    if !(0.0..=MAX_JITTER_DEG).contains(&value) {
        bail!("{} must be between 0 and {} degrees, got {}", key, MAX_JITTER_DEG, value);
    }
    Ok(value)
}
