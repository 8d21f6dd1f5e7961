//! Fetch-error rendering with one special case: a 401 means the session is
//! gone, so instead of a retryable banner the user is routed back to login,
//! mirroring the route guard's denied path.

use crate::app_lib::AppError;
use crate::components::ui::{Alert, AlertKind};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};

#[component]
pub fn ErrorBanner(error: AppError) -> impl IntoView {
    let auth_required = error.is_auth_required();
    let navigate = use_navigate();
    let auth = use_auth();

    Effect::new(move |_| {
        if auth_required {
            // The stored token no longer works; drop it so guards agree.
            auth.logout();
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { <Alert kind=AlertKind::Error message=error.to_string() /> }
}
