//! Pure parse/validate for application configuration (`config.toml`).

use crate::domain::{AppConfig, AppError};

/// Parse and validate application configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
