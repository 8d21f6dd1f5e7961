//! Admin screens. Unlike the other guarded routes, a signed-in non-admin who
//! lands here gets an explicit "not authorized" panel instead of a silent
//! redirect, so deep links shared between staff fail loudly.

mod roles;
mod technologies;
mod user_roles;
mod users;

pub use roles::AdminRolesPage;
pub use technologies::AdminTechnologiesPage;
pub use user_roles::AdminUserRolesPage;
pub use users::AdminUsersPage;

use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::navigation::{intersects, ADMIN_ONLY};
use leptos::prelude::*;

/// Shell for admin pages: requires a session, then either renders the page
/// or the not-authorized panel.
#[component]
pub(crate) fn AdminSection(children: ChildrenFn) -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <AdminGate children=children.clone() />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn AdminGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let is_admin = move || intersects(ADMIN_ONLY, &auth.roles.get());

    view! {
        <Show when=is_admin fallback=NotAuthorized>
            {children()}
        </Show>
    }
}

#[component]
fn NotAuthorized() -> impl IntoView {
    view! {
        <div class=format!("{} max-w-md mx-auto p-8 text-center space-y-2", Theme::CARD)>
            <h1 class="text-lg font-semibold text-gray-900 dark:text-white">
                "Not authorized"
            </h1>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "This area is restricted to administrators."
            </p>
        </div>
    }
}
