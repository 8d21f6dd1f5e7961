//! Session lifecycle over a key-value store.
//!
//! The browser build persists the session in `localStorage`; tests and any
//! host build use [`MemoryStore`]. Claims are recomputed from the token on
//! every read rather than persisted separately, so the stored token is the
//! single source of truth. Login and logout are the only write paths.

use crate::features::auth::claims::{extract_claims, Claims, DecodeError};
use crate::features::auth::types::UserProfile;
use crate::navigation::Role;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "hireflow.token";
/// Storage key for the last-known user profile (JSON, optional).
pub const USER_KEY: &str = "hireflow.user";

/// Minimal per-key persisted store, matching `localStorage` granularity.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and host builds.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// The session object injected into views; wraps a store and exposes the
/// lifecycle operations.
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes the token and, when provided, the user profile. Runs on the
    /// single UI thread, so no reader can observe one write without the
    /// other.
    pub fn login(&self, token: &str, profile: Option<&UserProfile>) {
        self.store.set(TOKEN_KEY, token);
        match profile.and_then(|profile| serde_json::to_string(profile).ok()) {
            Some(json) => self.store.set(USER_KEY, &json),
            None => self.store.remove(USER_KEY),
        }
    }

    /// Clears the token and all derived local state. Safe to call with no
    /// session present.
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        super::otp::clear_verification(&self.store);
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// The last profile the backend returned at login, if any. Informational
    /// only; access decisions come from [`Session::claims`].
    pub fn profile(&self) -> Option<UserProfile> {
        let json = self.store.get(USER_KEY)?;
        serde_json::from_str(&json).ok()
    }

    /// Decodes claims from the stored token. A missing or undecodable token
    /// yields the error, which callers downgrade to "not signed in".
    pub fn claims(&self) -> Result<Claims, DecodeError> {
        let token = self.token();
        extract_claims(token.as_deref())
    }

    /// True when a decodable, non-expired token is present.
    pub fn is_authenticated(&self, now_secs: u64) -> bool {
        match self.claims() {
            Ok(claims) => !claims.is_expired(now_secs),
            Err(_) => false,
        }
    }

    /// Roles from the current token; empty when not signed in.
    pub fn roles(&self) -> BTreeSet<Role> {
        self.claims().map(|claims| claims.roles).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::claims::forge_token;
    use crate::features::auth::otp;
    use crate::navigation::{visible_items, NAV_ITEMS};
    use serde_json::json;

    const NOW: u64 = 1_700_000_000;

    fn admin_token() -> String {
        forge_token(&json!({ "username": "ada", "roles": ["ADMIN"] }))
    }

    #[test]
    fn login_then_read_back_claims() {
        let session = Session::new(MemoryStore::new());
        let profile = UserProfile {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            display_name: Some("Ada".to_string()),
        };

        session.login(&admin_token(), Some(&profile));

        assert!(session.is_authenticated(NOW));
        let claims = session.claims().unwrap();
        assert_eq!(claims.username, "ada");
        assert!(claims.roles.contains(&Role::Admin));
        assert_eq!(session.profile().unwrap().email, "ada@example.com");
    }

    #[test]
    fn login_then_immediate_logout_clears_everything() {
        let session = Session::new(MemoryStore::new());
        session.login(&admin_token(), None);
        otp::begin_verification(session.store(), "ada@example.com", NOW * 1000 + 60_000);

        session.logout();

        assert!(!session.is_authenticated(NOW));
        assert_eq!(session.token(), None);
        assert_eq!(session.profile(), None);
        assert_eq!(session.store().get(otp::PENDING_EMAIL_KEY), None);
        assert!(visible_items(NAV_ITEMS, &session.roles()).is_empty());
    }

    #[test]
    fn logout_without_a_session_is_a_no_op() {
        let session = Session::new(MemoryStore::new());
        session.logout();
        assert!(!session.is_authenticated(NOW));
    }

    #[test]
    fn malformed_stored_token_reads_as_unauthenticated() {
        let session = Session::new(MemoryStore::new());
        session.store().set(TOKEN_KEY, "abc");

        assert!(!session.is_authenticated(NOW));
        assert!(session.roles().is_empty());
        assert!(session.claims().is_err());
    }

    #[test]
    fn expired_token_reads_as_unauthenticated() {
        let session = Session::new(MemoryStore::new());
        let token = forge_token(&json!({
            "username": "ada",
            "roles": ["USER"],
            "exp": NOW - 1,
        }));
        session.login(&token, None);

        assert!(!session.is_authenticated(NOW));
        // Roles are still decodable; authentication is what expired.
        assert!(session.roles().contains(&Role::User));
    }

    #[test]
    fn relogin_replaces_the_previous_profile() {
        let session = Session::new(MemoryStore::new());
        let profile = UserProfile {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            display_name: None,
        };
        session.login(&admin_token(), Some(&profile));
        session.login(&admin_token(), None);

        assert_eq!(session.profile(), None);
        assert!(session.is_authenticated(NOW));
    }
}
