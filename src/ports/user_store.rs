//! User account storage port.

use crate::domain::AppError;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    /// PHC-formatted password hash.
    pub password_hash: String,
}

/// Port for account persistence.
pub trait UserStore: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Register a new account. Fails with `AppError::EmailTaken` on duplicates.
    fn insert(&self, email: &str, password_hash: String) -> Result<User, AppError>;
}
