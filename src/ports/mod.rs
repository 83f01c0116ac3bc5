mod completion_client;
mod session_store;
mod user_store;

pub use completion_client::{ChatMessage, ChatRole, CompletionClient, CompletionRequest};
pub use session_store::{Session, SessionStore};
pub use user_store::{User, UserStore};
