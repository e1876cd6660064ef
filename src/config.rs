use std::time::Duration;
use thiserror::Error;

pub const DEMO_KEY: &str = "DEMO_KEY";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    pub fn is_demo(&self) -> bool { self.api_key == DEMO_KEY }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `*` alone allows any origin.
    pub allowed_origins: Vec<String>,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => 8000,
        };
        let timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(v) => Some(Duration::from_secs(
                v.parse().map_err(|_| ConfigError::Invalid { key: "REQUEST_TIMEOUT_SECS", value: v })?,
            )),
            None => None,
        };
        let allowed_origins = get("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            allowed_origins,
            gemini: GeminiConfig {
                api_key: get("GEMINI_API_KEY").unwrap_or_else(|| DEMO_KEY.into()),
                base_url: get("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into()),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
                timeout,
            },
        })
    }
}
