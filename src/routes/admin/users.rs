//! User account overview with activate/deactivate.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{ErrorBanner, Spinner};
use crate::features::admin::client;
use crate::features::admin::types::UserAccount;
use crate::routes::admin::AdminSection;
use leptos::prelude::*;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <AdminSection>
            <UsersManager />
        </AdminSection>
    }
}

#[component]
fn UsersManager() -> impl IntoView {
    let (error, set_error) = signal::<Option<AppError>>(None);

    let users = LocalResource::new(move || async move { client::list_users().await });

    let active_action = Action::new_local(move |input: &(String, bool)| {
        let (username, active) = input.clone();
        async move { client::set_user_active(&username, active).await }
    });

    Effect::new(move |_| {
        if let Some(result) = active_action.value().get() {
            match result {
                Ok(()) => users.refetch(),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Users"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Deactivated accounts cannot sign in."
                </p>
            </div>

            {move || error.get().map(|err| view! { <ErrorBanner error=err /> })}

            <div class=Theme::CARD>
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=Theme::TH>"Username"</th>
                            <th scope="col" class=Theme::TH>"Email"</th>
                            <th scope="col" class=Theme::TH>"Roles"</th>
                            <th scope="col" class=Theme::TH>"Status"</th>
                            <th scope="col" class=Theme::TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="5" class="px-6 py-12 text-center">
                                    <Spinner />
                                </td>
                            </tr>
                        }>
                            {move || match users.get() {
                                Some(Ok(list)) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No users found."
                                        </td>
                                    </tr>
                                }
                                .into_any(),
                                Some(Ok(list)) => view! {
                                    <For
                                        each=move || list.clone()
                                        key=|user| user.id.clone()
                                        children=move |user: UserAccount| {
                                            let username = user.username.clone();
                                            let active = user.active;
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                        {user.username.clone()}
                                                    </td>
                                                    <td class=Theme::TD>{user.email.clone()}</td>
                                                    <td class=Theme::TD>{user.roles.join(", ")}</td>
                                                    <td class=Theme::TD>
                                                        {if active { "Active" } else { "Inactive" }}
                                                    </td>
                                                    <td class=Theme::TD>
                                                        <button
                                                            type="button"
                                                            class=if active {
                                                                "text-sm text-red-600 hover:text-red-800 dark:text-red-400"
                                                            } else {
                                                                "text-sm text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                                                            }
                                                            on:click=move |_| {
                                                                active_action
                                                                    .dispatch((username.clone(), !active));
                                                            }
                                                        >
                                                            {if active { "Deactivate" } else { "Activate" }}
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                }
                                .into_any(),
                                Some(Err(err)) => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-4">
                                            <ErrorBanner error=err />
                                        </td>
                                    </tr>
                                }
                                .into_any(),
                                None => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center">
                                            <Spinner />
                                        </td>
                                    </tr>
                                }
                                .into_any(),
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
