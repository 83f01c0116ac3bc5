//! Hosted completion endpoint port definition.

use crate::domain::AppError;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
}

impl ChatRole {
    /// Convert to API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Request for a single chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Model identifier understood by the endpoint.
    pub model: String,
    /// Conversation sent to the model, oldest first.
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// A request made of one user message.
    pub fn user_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage { role: ChatRole::User, content: prompt.into() }],
        }
    }
}

/// Port for hosted chat-completion calls.
///
/// Implementations block until the endpoint answers. Every failure is
/// reported as `AppError::UpstreamUnavailable`.
pub trait CompletionClient: Send + Sync {
    /// Send the request and return the text of the first choice.
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}
