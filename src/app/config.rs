//! Application configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, parse_config_content};

/// Load configuration from `path`, or use defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        AppError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_config_content(&content)
}
