//! Application State
//!
//! Holds shared state for the server: the database connection and the
//! in-memory session table mapping bearer tokens to user ids.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use dashmap::DashMap;
use rand::RngCore;

use petpals_core::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: Mutex<Database>,
    /// token -> user id
    sessions: DashMap<String, String>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { inner: Arc::new(AppStateInner { db: Mutex::new(db), sessions: DashMap::new() }) }
    }

    /// Borrow the database. Handlers must not hold the guard across an await.
    pub fn db(&self) -> MutexGuard<'_, Database> {
        self.inner.db.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mint an opaque bearer token for a freshly authenticated user.
    pub fn create_session(&self, user_id: &str) -> String {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = URL_SAFE_NO_PAD.encode(bytes);
        self.inner.sessions.insert(token.clone(), user_id.to_string());
        token
    }

    /// Resolve a bearer token to its user id, if the session exists.
    pub fn session_user(&self, token: &str) -> Option<String> {
        self.inner.sessions.get(token).map(|entry| entry.value().clone())
    }

    pub fn revoke_session(&self, token: &str) {
        self.inner.sessions.remove(token);
    }

    pub fn session_count(&self) -> usize {
        self.inner.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip() {
        let state = AppState::new(Database::open_in_memory().expect("db"));
        let token = state.create_session("user-1");
        assert_eq!(state.session_user(&token).as_deref(), Some("user-1"));

        state.revoke_session(&token);
        assert!(state.session_user(&token).is_none());
    }

    #[test]
    fn test_tokens_are_unique() {
        let state = AppState::new(Database::open_in_memory().expect("db"));
        let a = state.create_session("user-1");
        let b = state.create_session("user-1");
        assert_ne!(a, b);
        assert_eq!(state.session_count(), 2);
    }

    #[test]
    fn test_unknown_token_rejected() {
        let state = AppState::new(Database::open_in_memory().expect("db"));
        assert!(state.session_user("forged-token").is_none());
    }

    #[test]
    fn test_file_backed_database_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("petpals.db");
        {
            let db = Database::open(&path).expect("open");
            db.seed().expect("seed");
        }

        let state = AppState::new(Database::open(&path).expect("reopen"));
        assert_eq!(state.db().list_categories().expect("list").len(), 5);
    }
}
