//! Auth session state and context for the frontend. The provider decodes the
//! stored token once on mount and exposes derived signals for guards, the
//! navigation chrome, and routes. Login and logout go through this context
//! so the persisted session and the reactive copy never diverge.

use crate::app_lib::clock;
use crate::features::auth::claims::Claims;
use crate::features::auth::storage::browser_session;
use crate::features::auth::types::UserProfile;
use crate::navigation::Role;
use leptos::prelude::*;
use std::collections::BTreeSet;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    claims: RwSignal<Option<Claims>>,
    pub is_authenticated: Signal<bool>,
    pub roles: Signal<BTreeSet<Role>>,
    pub username: Signal<Option<String>>,
}

impl AuthContext {
    /// Builds a context around the provided claims signal.
    fn new(claims: RwSignal<Option<Claims>>) -> Self {
        let is_authenticated = Signal::derive(move || {
            claims
                .get()
                .is_some_and(|claims| !claims.is_expired(clock::now_secs()))
        });
        let roles = Signal::derive(move || {
            claims.get().map(|claims| claims.roles).unwrap_or_default()
        });
        let username = Signal::derive(move || claims.get().map(|claims| claims.username));
        Self {
            claims,
            is_authenticated,
            roles,
            username,
        }
    }

    /// Persists the token and profile, then refreshes the reactive claims.
    pub fn login(&self, token: &str, profile: Option<&UserProfile>) {
        let session = browser_session();
        session.login(token, profile);
        self.claims.set(session.claims().ok());
    }

    /// Clears the persisted session and the reactive claims.
    pub fn logout(&self) {
        let session = browser_session();
        session.logout();
        self.claims.set(None);
    }

    /// Re-reads claims from storage, e.g. after a 401 cleared the token.
    pub fn refresh(&self) {
        self.claims.set(browser_session().claims().ok());
    }

    /// Current claims, tracked reactively.
    pub fn claims_snapshot(&self) -> Option<Claims> {
        self.claims.get()
    }
}

/// Provides auth context, decoding the persisted token once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let claims = RwSignal::new(browser_session().claims().ok());
    let auth = AuthContext::new(claims);
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let claims = RwSignal::new(None);
        AuthContext::new(claims)
    })
}
