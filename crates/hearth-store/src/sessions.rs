use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
}

/// In-memory session table keyed by opaque token. Fixed TTL, no sliding
/// renewal; expired entries are dropped on access and swept periodically.
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Creates a session for the user and returns its opaque token.
    pub fn create(&self, user_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            expires_at: Utc::now() + self.ttl,
        };
        self.lock().insert(token.clone(), session);
        token
    }

    /// Returns the live session for a token. Unknown and expired tokens both
    /// yield `None`; expired entries are removed on the way out.
    pub fn get(&self, token: &str) -> Option<Session> {
        let mut sessions = self.lock();
        match sessions.get(token) {
            Some(s) if s.expires_at > Utc::now() => Some(s.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Removes a session; returns whether one existed.
    pub fn destroy(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    /// Removes all expired sessions and returns how many were dropped.
    pub fn sweep(&self) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        let now = Utc::now();
        sessions.retain(|_, s| s.expires_at > now);
        before - sessions.len()
    }
}

/// Background task that prunes expired sessions on an interval.
pub async fn run_session_sweeper(sessions: Arc<SessionStore>, interval_secs: u64) {
    let mut interval = tokio::time::interval(StdDuration::from_secs(interval_secs));

    loop {
        interval.tick().await;

        let swept = sessions.sweep();
        if swept > 0 {
            info!("Session sweep: dropped {} expired sessions", swept);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_get_roundtrip() {
        let store = SessionStore::new(Duration::hours(24));
        let token = store.create(7);
        let session = store.get(&token).expect("session should be live");
        assert_eq!(session.user_id, 7);
        assert!(session.expires_at > Utc::now());
    }

    #[test]
    fn unknown_token_is_none() {
        let store = SessionStore::new(Duration::hours(24));
        assert!(store.get("not-a-token").is_none());
    }

    #[test]
    fn destroy_removes_the_session() {
        let store = SessionStore::new(Duration::hours(24));
        let token = store.create(1);
        assert!(store.destroy(&token));
        assert!(!store.destroy(&token));
        assert!(store.get(&token).is_none());
    }

    #[test]
    fn expired_sessions_are_invisible_and_swept() {
        let store = SessionStore::new(Duration::seconds(0));
        let token = store.create(1);
        std::thread::sleep(StdDuration::from_millis(10));

        assert!(store.get(&token).is_none());

        // get() already dropped it; a fresh expired entry is caught by sweep.
        let other = store.create(2);
        std::thread::sleep(StdDuration::from_millis(10));
        assert_eq!(store.sweep(), 1);
        assert!(store.get(&other).is_none());
    }
}
