use std::fmt;

use anyhow::{Context, Result};

/// Which AI backend the operator asked for via `AI_PROVIDER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiProvider {
    Anthropic,
    OpenAi,
    /// Any other value. Kept verbatim so `/health` reports what was configured;
    /// generation falls back to the template.
    Unknown(String),
}

impl AiProvider {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "anthropic" => AiProvider::Anthropic,
            "openai" => AiProvider::OpenAi,
            _ => AiProvider::Unknown(raw.to_string()),
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiProvider::Anthropic => f.write_str("anthropic"),
            AiProvider::OpenAi => f.write_str("openai"),
            AiProvider::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Read once at startup and shared read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub ai_provider: AiProvider,
    /// `None` when unset or empty.
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb = std::env::var("MAX_UPLOAD_MB")
            .unwrap_or_else(|_| "16".to_string())
            .parse::<usize>()
            .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;
        let max_upload_bytes = upload_limit_bytes(max_upload_mb)?;

        Ok(Config {
            ai_provider: AiProvider::parse(
                &std::env::var("AI_PROVIDER").unwrap_or_else(|_| "anthropic".to_string()),
            ),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when at least one AI credential is present, regardless of which
    /// provider is selected.
    pub fn ai_configured(&self) -> bool {
        self.anthropic_api_key.is_some() || self.openai_api_key.is_some()
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Config {
            ai_provider: AiProvider::Anthropic,
            anthropic_api_key: None,
            openai_api_key: None,
            port: 8080,
            max_upload_bytes: 16 * 1024 * 1024,
            rust_log: "info".to_string(),
        }
    }
}

fn upload_limit_bytes(megabytes: usize) -> Result<usize> {
    megabytes
        .checked_mul(1024 * 1024)
        .with_context(|| format!("MAX_UPLOAD_MB={megabytes} is too large"))
}

fn optional_env(key: &str) -> Option<String> {
    non_empty(std::env::var(key).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
