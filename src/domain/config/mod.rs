pub mod app_config;
pub mod parse;

pub use app_config::{AppConfig, CompletionApiConfig, FormatterConfig, ServerConfig, SessionConfig};
pub use parse::parse_config_content;
