use std::sync::Arc;

use crate::adapters::Views;
use crate::domain::{AppConfig, EscapePolicy};
use crate::ports::{CompletionClient, SessionStore, UserStore};

/// Application context holding the dependencies shared by every request.
///
/// Built once at startup and handed to the router behind an `Arc`.
pub struct AppContext {
    completion: Arc<dyn CompletionClient>,
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    views: Views,
    model: String,
    escape_policy: EscapePolicy,
    session_lifetime: chrono::Duration,
}

impl AppContext {
    /// Create a new application context.
    pub fn new(
        config: &AppConfig,
        completion: Arc<dyn CompletionClient>,
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        views: Views,
    ) -> Self {
        Self {
            completion,
            users,
            sessions,
            views,
            model: config.completion.model.clone(),
            escape_policy: EscapePolicy::from_escape_flag(config.formatter.escape_html),
            session_lifetime: config.session.lifetime(),
        }
    }

    /// Shared handle to the completion client, for use on a blocking worker.
    pub fn completion(&self) -> Arc<dyn CompletionClient> {
        Arc::clone(&self.completion)
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    /// Model identifier sent with each completion request.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn escape_policy(&self) -> EscapePolicy {
        self.escape_policy
    }

    pub fn session_lifetime(&self) -> chrono::Duration {
        self.session_lifetime
    }
}
