//! Login session storage port.

use chrono::{DateTime, Utc};

/// An authenticated browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque value carried in the session cookie.
    pub token: String,
    pub user_id: u64,
    pub expires_at: DateTime<Utc>,
}

/// Port for session bookkeeping.
///
/// Callers pass the current time so expiry is decided in one place.
pub trait SessionStore: Send + Sync {
    /// Start a session for `user_id`.
    fn create(&self, user_id: u64, now: DateTime<Utc>) -> Session;

    /// Find a live session. Expired sessions are dropped and reported as absent.
    fn lookup(&self, token: &str, now: DateTime<Utc>) -> Option<Session>;

    fn remove(&self, token: &str);
}
