//! Authentication context for the running app.
//!
//! The backend hands out a bearer token and a numeric user id at login;
//! both live in per-tab session storage on the web target so a reload
//! keeps the session but closing the tab ends it. A missing token is not
//! an error: every API call silently degrades to anonymous behavior.

const TOKEN_KEY: &str = "authToken";
const USER_ID_KEY: &str = "userId";

/// Snapshot of the current auth state, passed down explicitly instead of
/// read ambiently at call sites.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthSession {
    pub token: Option<String>,
    pub user_id: Option<i64>,
}

impl AuthSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user_id.is_some()
    }

    /// Load whatever the storage adapter has persisted.
    pub fn load() -> Self {
        Self {
            token: storage::get(TOKEN_KEY),
            user_id: storage::get(USER_ID_KEY).and_then(|raw: String| raw.parse().ok()),
        }
    }

    /// Persist this session so a reload within the tab keeps it.
    pub fn persist(&self) {
        match &self.token {
            Some(token) => storage::set(TOKEN_KEY, token),
            None => storage::remove(TOKEN_KEY),
        }
        match self.user_id {
            Some(id) => storage::set(USER_ID_KEY, &id.to_string()),
            None => storage::remove(USER_ID_KEY),
        }
    }

    /// Drop the session everywhere: memory and storage.
    pub fn clear() -> Self {
        storage::remove(TOKEN_KEY);
        storage::remove(USER_ID_KEY);
        Self::anonymous()
    }
}

#[cfg(target_arch = "wasm32")]
mod storage {
    use gloo_storage::{SessionStorage, Storage};

    pub fn get(key: &str) -> Option<String> {
        SessionStorage::get(key).ok()
    }

    pub fn set(key: &str, value: &str) {
        let _ = SessionStorage::set(key, value);
    }

    pub fn remove(key: &str) {
        SessionStorage::delete(key);
    }
}

/// Native fallback keeps the session for the process lifetime only, which
/// mirrors the per-tab scope of browser session storage closely enough
/// for desktop runs and tests.
#[cfg(not(target_arch = "wasm32"))]
mod storage {
    use once_cell::sync::Lazy;
    use std::collections::HashMap;
    use std::sync::Mutex;

    static STORE: Lazy<Mutex<HashMap<String, String>>> = Lazy::new(|| Mutex::new(HashMap::new()));

    pub fn get(key: &str) -> Option<String> {
        STORE.lock().ok()?.get(key).cloned()
    }

    pub fn set(key: &str, value: &str) {
        if let Ok(mut store) = STORE.lock() {
            store.insert(key.to_string(), value.to_string());
        }
    }

    pub fn remove(key: &str) {
        if let Ok(mut store) = STORE.lock() {
            store.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persist_and_load_round_trip() {
        let session = AuthSession {
            token: Some("abc123".into()),
            user_id: Some(42),
        };
        session.persist();

        let loaded = AuthSession::load();
        assert_eq!(loaded, session);
        assert!(loaded.is_authenticated());

        let cleared = AuthSession::clear();
        assert!(!cleared.is_authenticated());
        assert_eq!(AuthSession::load(), AuthSession::anonymous());
    }

    #[test]
    fn token_without_user_id_is_not_authenticated() {
        let session = AuthSession {
            token: Some("abc".into()),
            user_id: None,
        };
        assert!(!session.is_authenticated());
    }
}
