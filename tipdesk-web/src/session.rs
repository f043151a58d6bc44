//! Session persistence across reloads.
//!
//! The token and account kind are mirrored to LocalStorage on login and
//! removed on logout, so a browser refresh restores the session without
//! a second sign-in.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

const SESSION_STORAGE_KEY: &str = "tipdesk.session";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub kind: i32,
}

pub fn load() -> Option<StoredSession> {
    #[cfg(target_arch = "wasm32")]
    {
        LocalStorage::get(SESSION_STORAGE_KEY).ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn store(session: &StoredSession) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = LocalStorage::set(SESSION_STORAGE_KEY, session);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = session;
    }
}

pub fn clear() {
    #[cfg(target_arch = "wasm32")]
    {
        LocalStorage::delete(SESSION_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_session_round_trip() {
        let session = StoredSession {
            token: "t1".to_string(),
            kind: 1,
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: StoredSession = serde_json::from_str(&json).unwrap();

        assert_eq!(session, back);
    }
}
