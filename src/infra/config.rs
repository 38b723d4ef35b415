//! Centralized configuration (environment variables + defaults).
//!
//! Binaries call `dotenv::dotenv().ok()` first, so everything here can also come from `.env`.

use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;

/// Name of the variable holding the upstream LLM credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_CATALOG_PATH: &str = "data/products.json";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_LLM_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_LLM_MODEL: &str = "openrouter/auto";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(name) {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} must be a valid number (got {:?})", name, v)),
        None => Ok(default),
    }
}

/// Listening port for the API server.
pub fn port() -> anyhow::Result<u16> {
    parse_var("PORT", DEFAULT_PORT)
}

/// Origin allowed by CORS (the web front end).
pub fn frontend_url() -> String {
    var("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string())
}

/// Location of the static catalog file.
pub fn catalog_path() -> PathBuf {
    var("CATALOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}

/// Base URL the terminal client talks to.
pub fn api_base_url() -> String {
    var("CATALOG_API_URL")
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Connection settings for the chat-completion upstream.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// `None` when no credential is configured; `/api/ask` then answers 502.
    pub api_key: Option<String>,
    /// OpenAI-compatible base URL; `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api_key: var(API_KEY_VAR),
            base_url: var("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            timeout: Duration::from_secs(parse_var("LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)?),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
