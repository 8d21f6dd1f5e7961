//! Desktop side navigation for authenticated users.
//!
//! The entries come from [`crate::navigation::visible_items`] over the
//! static table, so this surface and the mobile menu in the app shell can
//! never disagree about what a role may see.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use crate::navigation::{visible_items, NavItem, NAV_ITEMS};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let pathname = move || location.pathname.get();

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-1">
                <For
                    each=move || visible_items(NAV_ITEMS, &auth.roles.get())
                    key=|item| item.path
                    children=move |item: &'static NavItem| {
                        let pathname = pathname.clone();
                        let active = move || is_active(&pathname(), item.path);
                        view! { <SidebarLink item=item active=active /> }
                    }
                />
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    "Hireflow " {build_info::git_commit_hash()}
                </p>
            </div>
        </aside>
    }
}

/// Dashboard matches exactly; every other entry matches its subtree.
fn is_active(pathname: &str, target: &str) -> bool {
    if target == "/" {
        pathname == "/"
    } else {
        pathname == target || pathname.starts_with(&format!("{target}/"))
    }
}

#[component]
fn SidebarLink<F>(item: &'static NavItem, active: F) -> impl IntoView
where
    F: Fn() -> bool + Clone + Send + Sync + 'static,
{
    let link_active = active.clone();
    let link_class = move || {
        if link_active() {
            "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors text-blue-600 bg-blue-50 dark:bg-blue-900 dark:text-blue-400"
        } else {
            "group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors text-gray-600 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white"
        }
    };
    let icon_class = move || {
        if active() {
            "material-symbols-outlined mr-3 text-xl transition-colors text-blue-600 dark:text-blue-400"
        } else {
            "material-symbols-outlined mr-3 text-xl transition-colors text-gray-400 group-hover:text-gray-900 dark:group-hover:text-white"
        }
    };

    view! {
        <A href=move || item.path.to_string() {..} attr:class=link_class>
            <span class=icon_class>{item.icon}</span>
            {item.label}
        </A>
    }
}
