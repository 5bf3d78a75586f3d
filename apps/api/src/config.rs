use anyhow::{Context, Result};

/// Value shipped in `.env.example`; treated the same as an absent key.
pub const PLACEHOLDER_API_KEY: &str = "your_groq_api_key_here";

/// Application configuration loaded from environment variables.
/// Only malformed numeric settings abort start-up; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key. `None` routes every chat message to the keyword fallback.
    pub groq_api_key: Option<String>,
    /// PostgreSQL URL for conversation history. `None` disables persistence.
    pub database_url: Option<String>,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            database_url: optional_env("DATABASE_URL"),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when a usable provider key is present.
    pub fn llm_configured(&self) -> bool {
        is_usable_api_key(self.groq_api_key.as_deref())
    }
}

/// An API key is usable when it is non-blank and not the shipped placeholder.
pub fn is_usable_api_key(key: Option<&str>) -> bool {
    match key.map(str::trim) {
        Some(k) => !k.is_empty() && k != PLACEHOLDER_API_KEY,
        None => false,
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
