use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::ports::{Session, SessionStore};

/// In-process session table with a fixed lifetime per session.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    lifetime: Duration,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl MemorySessionStore {
    pub fn new(lifetime: Duration) -> Self {
        Self { lifetime, sessions: Arc::new(Mutex::new(HashMap::new())) }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self, user_id: u64, now: DateTime<Utc>) -> Session {
        let session = Session {
            token: Uuid::new_v4().simple().to_string(),
            user_id,
            expires_at: now + self.lifetime,
        };
        let mut sessions = self.sessions();
        sessions.retain(|_, existing| existing.expires_at > now);
        sessions.insert(session.token.clone(), session.clone());
        session
    }

    fn lookup(&self, token: &str, now: DateTime<Utc>) -> Option<Session> {
        let mut sessions = self.sessions();
        match sessions.get(token) {
            Some(session) if session.expires_at > now => Some(session.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    fn remove(&self, token: &str) {
        self.sessions().remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemorySessionStore {
        MemorySessionStore::new(Duration::minutes(30))
    }

    #[test]
    fn created_session_can_be_looked_up() {
        let store = store();
        let now = Utc::now();
        let session = store.create(7, now);

        assert_eq!(session.expires_at, now + Duration::minutes(30));
        assert_eq!(store.lookup(&session.token, now), Some(session));
    }

    #[test]
    fn tokens_are_unique() {
        let store = store();
        let now = Utc::now();
        assert_ne!(store.create(1, now).token, store.create(1, now).token);
    }

    #[test]
    fn expired_session_is_dropped() {
        let store = store();
        let now = Utc::now();
        let session = store.create(7, now);

        let later = now + Duration::minutes(30);
        assert_eq!(store.lookup(&session.token, later), None);
        assert_eq!(store.lookup(&session.token, now), None);
    }

    #[test]
    fn creating_a_session_sweeps_abandoned_ones() {
        let store = store();
        let start = Utc::now();
        for user_id in 0..1000 {
            store.create(user_id, start);
        }

        let much_later = start + Duration::days(365);
        let fresh = store.create(7, much_later);
        assert_eq!(store.lookup("unrelated", much_later), None);

        let sessions = store.sessions();
        assert_eq!(sessions.len(), 1);
        assert!(sessions.contains_key(&fresh.token));
    }

    #[test]
    fn sweep_keeps_live_sessions() {
        let store = store();
        let now = Utc::now();
        let earlier = store.create(1, now);
        let later = store.create(2, now + Duration::minutes(29));
        assert_eq!(store.lookup(&earlier.token, now + Duration::minutes(29)), Some(earlier));
        assert_eq!(store.lookup(&later.token, now + Duration::minutes(29)), Some(later));
    }

    #[test]
    fn removed_session_is_gone() {
        let store = store();
        let now = Utc::now();
        let session = store.create(7, now);
        store.remove(&session.token);
        assert_eq!(store.lookup(&session.token, now), None);
    }

    #[test]
    fn unknown_token_is_absent() {
        assert_eq!(store().lookup("nope", Utc::now()), None);
    }
}
