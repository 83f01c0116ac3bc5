//! Application configuration domain models.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from an optional `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP listener configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Hosted completion endpoint configuration.
    #[serde(default)]
    pub completion: CompletionApiConfig,
    /// Login session configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Reply formatting configuration.
    #[serde(default)]
    pub formatter: FormatterConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5008))
}

/// Hosted completion endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionApiConfig {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CompletionApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl CompletionApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.groq.com/openai/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "llama3-8b-8192".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Minutes a login stays valid.
    #[serde(default = "default_lifetime_minutes")]
    pub lifetime_minutes: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { lifetime_minutes: default_lifetime_minutes() }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.lifetime_minutes == 0 {
            return Err(AppError::InvalidConfig(
                "lifetime_minutes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn lifetime(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.lifetime_minutes))
    }
}

fn default_lifetime_minutes() -> u32 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatterConfig {
    /// Escape model text before embedding it in pages.
    #[serde(default = "default_true")]
    pub escape_html: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self { escape_html: default_true() }
    }
}

fn default_true() -> bool {
    true
}
