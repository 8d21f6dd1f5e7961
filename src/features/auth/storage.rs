//! `localStorage`-backed session store for the browser build.

use crate::features::auth::session::{Session, SessionStore};
use gloo_storage::{LocalStorage, Storage};

/// Browser persistence behind the [`SessionStore`] trait.
#[derive(Clone, Copy, Default)]
pub struct LocalSession;

impl SessionStore for LocalSession {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        // Storage can fail (quota, private mode); the session then behaves
        // as absent, which every caller already handles.
        let _ = LocalStorage::set(key, value.to_string());
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// The session object used throughout the browser build.
pub fn browser_session() -> Session<LocalSession> {
    Session::new(LocalSession)
}
