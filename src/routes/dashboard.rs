//! Landing page: a role-aware summary with links into the main areas. The
//! cards reuse the same filtered navigation table as the menus.

use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::navigation::{visible_items, NavItem, NAV_ITEMS};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <DashboardContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.username
            .get()
            .map(|name| format!("Welcome back, {name}."))
            .unwrap_or_else(|| "Welcome.".to_string())
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                {greeting}
            </h1>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                <For
                    each=move || {
                        visible_items(NAV_ITEMS, &auth.roles.get())
                            .into_iter()
                            .filter(|item| item.path != "/")
                            .collect::<Vec<_>>()
                    }
                    key=|item| item.path
                    children=|item: &'static NavItem| {
                        view! {
                            <A href=move || item.path.to_string() {..} class="block">
                                <div class=format!("{} p-5 hover:shadow-md transition-shadow", Theme::CARD)>
                                    <span class="material-symbols-outlined text-3xl text-blue-600 dark:text-blue-400">
                                        {item.icon}
                                    </span>
                                    <h2 class="mt-2 font-medium text-gray-900 dark:text-white">
                                        {item.label}
                                    </h2>
                                </div>
                            </A>
                        }
                    }
                />
            </div>
        </div>
    }
}
