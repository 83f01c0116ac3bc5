use std::io;

use thiserror::Error;

/// Library-wide error type for yoga-advisor operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required form field was not submitted.
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A form field was submitted but could not be accepted.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The hosted completion endpoint could not produce a reply.
    #[error("Upstream model unavailable: {message}")]
    UpstreamUnavailable { message: String, status: Option<u16> },

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Page template failed to render.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Password does not satisfy the signup policy.
    #[error("{0}")]
    PasswordPolicy(String),

    /// Signup attempted with an email that already has an account.
    #[error("Email is already in use.")]
    EmailTaken,

    /// Login attempted with an unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl AppError {
    pub fn upstream<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::UpstreamUnavailable { message: message.into(), status }
    }

    /// Errors caused by what the user typed into a form.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingField { .. }
                | AppError::InvalidField { .. }
                | AppError::PasswordPolicy(_)
                | AppError::EmailTaken
                | AppError::InvalidCredentials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = AppError::MissingField { field: "age" };
        assert_eq!(err.to_string(), "Missing required field 'age'");
        assert!(err.is_input_error());
    }

    #[test]
    fn upstream_error_is_not_an_input_error() {
        let err = AppError::upstream("connection refused", None);
        assert_eq!(err.to_string(), "Upstream model unavailable: connection refused");
        assert!(!err.is_input_error());
    }
}
