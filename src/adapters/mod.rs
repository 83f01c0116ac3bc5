pub mod argon2_credentials;
pub mod completion_client_http;
pub mod memory_session_store;
pub mod memory_user_store;
pub mod views;

pub use completion_client_http::HttpCompletionClient;
pub use memory_session_store::MemorySessionStore;
pub use memory_user_store::MemoryUserStore;
pub use views::Views;
