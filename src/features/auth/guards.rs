//! Route guard components. Each guard re-evaluates the shared gate on
//! render and, when denied, issues a history-replacing redirect so the back
//! button cannot loop into the denied view. These are UX guards only; the
//! backend enforces the real access control on every request.

use crate::app_lib::clock;
use crate::features::auth::gate::{evaluate, GateOutcome};
use crate::features::auth::otp;
use crate::features::auth::state::use_auth;
use crate::features::auth::storage::browser_session;
use crate::navigation::Role;
use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};

fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

fn outcome_for(required: &'static [Role]) -> impl Fn() -> GateOutcome + Copy {
    let auth = use_auth();
    move || {
        let claims = auth.claims_snapshot();
        evaluate(claims.as_ref(), required, clock::now_secs())
    }
}

/// Renders children only for authenticated sessions; otherwise redirects to
/// `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let outcome = outcome_for(&[]);
    let navigate = use_navigate();

    Effect::new(move |_| {
        if outcome() != GateOutcome::Allowed {
            navigate("/login", replace_history());
        }
    });

    view! {
        <Show when=move || outcome() == GateOutcome::Allowed fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Renders children only when the session's roles intersect `required`.
/// Unauthenticated sessions go to `/login`; authenticated-but-forbidden
/// ones are sent back to the dashboard.
#[component]
pub fn RequireRoles(required: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let outcome = outcome_for(required);
    let navigate = use_navigate();

    Effect::new(move |_| match outcome() {
        GateOutcome::Allowed => {}
        GateOutcome::DenyUnauthenticated => navigate("/login", replace_history()),
        GateOutcome::DenyForbidden => navigate("/", replace_history()),
    });

    view! {
        <Show when=move || outcome() == GateOutcome::Allowed fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Guards `/verify-otp`: requires an unexpired pending-registration marker.
/// The predicate self-heals expired markers, so a stale visit lands on
/// `/register` with clean storage.
#[component]
pub fn RequireOtpPending(children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    let pending =
        move || otp::has_pending_verification(browser_session().store(), clock::now_ms());

    Effect::new(move |_| {
        if !pending() {
            navigate("/register", replace_history());
        }
    });

    view! {
        <Show when=pending fallback=|| ()>
            {children()}
        </Show>
    }
}
