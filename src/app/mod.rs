pub mod auth;
pub mod config;
mod context;
pub mod handlers;
pub mod logging;
pub mod server;

pub use context::AppContext;
