use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::AppError;
use crate::ports::{User, UserStore};

/// In-process account store. Accounts live as long as the server process.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    inner: Arc<Mutex<Accounts>>,
}

#[derive(Debug, Default)]
struct Accounts {
    next_id: u64,
    by_email: HashMap<String, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn accounts(&self) -> MutexGuard<'_, Accounts> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UserStore for MemoryUserStore {
    fn find_by_email(&self, email: &str) -> Option<User> {
        self.accounts().by_email.get(email).cloned()
    }

    fn insert(&self, email: &str, password_hash: String) -> Result<User, AppError> {
        let mut accounts = self.accounts();
        if accounts.by_email.contains_key(email) {
            return Err(AppError::EmailTaken);
        }

        accounts.next_id += 1;
        let user = User { id: accounts.next_id, email: email.to_string(), password_hash };
        accounts.by_email.insert(email.to_string(), user.clone());
        Ok(user)
    }
}
