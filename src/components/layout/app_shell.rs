//! Shared layout wrapper with header, navigation, and content container.
//! The mobile menu renders the same role-filtered navigation items as the
//! desktop sidebar; signing out clears the session context and returns to
//! the login page.

use crate::components::layout::Sidebar;
use crate::features::auth::state::use_auth;
use crate::navigation::{visible_items, NavItem, NAV_ITEMS};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate, NavigateOptions};

/// Wraps routes with the app chrome. Unauthenticated pages (login,
/// registration) get the header only; the sidebar appears with a session.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let navigate = use_navigate();

    let sign_out = Callback::new(move |()| {
        auth.logout();
        set_menu_open.set(false);
        navigate(
            "/login",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
                <div class="flex flex-wrap items-center justify-between p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt="hireflow" />
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Hireflow"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-menu"
                        class="w-full md:w-auto md:hidden"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 mt-4 border border-gray-100 rounded-lg bg-gray-50 dark:bg-gray-800 dark:border-gray-700">
                            // Same filtered table as the sidebar; abbreviated
                            // surface, identical membership.
                            <For
                                each=move || visible_items(NAV_ITEMS, &auth.roles.get())
                                key=|item| item.path
                                children=move |item: &'static NavItem| {
                                    view! {
                                        <li>
                                            <A
                                                href=move || item.path.to_string()
                                                {..}
                                                class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700"
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {item.label}
                                            </A>
                                        </li>
                                    }
                                }
                            />
                            <li>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <A
                                                href="/login"
                                                {..}
                                                class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700"
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Sign In"
                                            </A>
                                        }
                                    }
                                >
                                    <button
                                        type="button"
                                        class="block w-full text-left py-2 px-3 text-gray-900 rounded hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700"
                                        on:click=move |_| sign_out.run(())
                                    >
                                        "Sign Out"
                                    </button>
                                </Show>
                            </li>
                        </ul>
                    </div>
                    <div class="hidden md:block">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <A
                                        href="/login"
                                        {..}
                                        class="py-2 px-3 text-gray-900 rounded hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700"
                                    >
                                        "Sign In"
                                    </A>
                                }
                            }
                        >
                            <span class="text-sm text-gray-500 dark:text-gray-400 mr-3">
                                {move || auth.username.get().unwrap_or_default()}
                            </span>
                            <button
                                type="button"
                                class="py-2 px-3 text-gray-900 rounded hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700"
                                on:click=move |_| sign_out.run(())
                            >
                                "Sign Out"
                            </button>
                        </Show>
                    </div>
                </div>
            </header>
            <div class="flex flex-1">
                <Show when=move || is_authenticated.get()>
                    <Sidebar />
                </Show>
                <main class="flex-1">
                    <div class="container mx-auto p-4 mt-6">
                        {children()}
                    </div>
                </main>
            </div>
        </div>
    }
}
