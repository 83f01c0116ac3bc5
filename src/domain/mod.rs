pub mod config;
pub mod error;
pub mod form_input;
pub mod password_policy;
pub mod prompt_builder;
pub mod reply_format;

pub use config::{
    AppConfig, CompletionApiConfig, FormatterConfig, ServerConfig, SessionConfig,
    parse_config_content,
};
pub use error::AppError;
pub use form_input::{FormInput, FormNumber};
pub use password_policy::validate_password;
pub use prompt_builder::build_prompt;
pub use reply_format::{EscapePolicy, ListState, format_reply};
