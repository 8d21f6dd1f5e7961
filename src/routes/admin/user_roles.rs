//! Role assignment per user. The whole role set is replaced on save, so the
//! checkboxes always reflect what the server will store.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{ErrorBanner, Spinner};
use crate::features::admin::client;
use crate::features::admin::types::{RoleRecord, UserAccount};
use crate::routes::admin::AdminSection;
use leptos::prelude::*;
use std::collections::BTreeSet;

#[component]
pub fn AdminUserRolesPage() -> impl IntoView {
    view! {
        <AdminSection>
            <UserRolesManager />
        </AdminSection>
    }
}

#[component]
fn UserRolesManager() -> impl IntoView {
    let (error, set_error) = signal::<Option<AppError>>(None);

    let data = LocalResource::new(move || async move {
        let users = client::list_users().await?;
        let roles = client::list_roles().await?;
        Ok::<_, AppError>((users, roles))
    });

    let save_action = Action::new_local(move |input: &(String, Vec<String>)| {
        let (username, roles) = input.clone();
        async move { client::set_user_roles(&username, roles).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => data.refetch(),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "User roles"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Grant or revoke roles per account. Saving replaces the full set."
                </p>
            </div>

            {move || error.get().map(|err| view! { <ErrorBanner error=err /> })}

            <Suspense fallback=move || view! {
                <div class="py-12 text-center"><Spinner /></div>
            }>
                {move || match data.get() {
                    Some(Ok((users, roles))) => view! {
                        <div class="space-y-4">
                            <For
                                each=move || users.clone()
                                key=|user| user.id.clone()
                                children=move |user: UserAccount| {
                                    view! {
                                        <UserRolesCard
                                            user=user
                                            all_roles=roles.clone()
                                            on_save=Callback::new(move |input: (String, Vec<String>)| {
                                                save_action.dispatch(input);
                                            })
                                        />
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any(),
                    Some(Err(err)) => view! { <ErrorBanner error=err /> }.into_any(),
                    None => view! {
                        <div class="py-12 text-center"><Spinner /></div>
                    }
                    .into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn UserRolesCard(
    user: UserAccount,
    all_roles: Vec<RoleRecord>,
    on_save: Callback<(String, Vec<String>)>,
) -> impl IntoView {
    let username = user.username.clone();
    let save_username = user.username.clone();
    let selected = RwSignal::new(user.roles.iter().cloned().collect::<BTreeSet<String>>());

    view! {
        <div class=format!("{} p-5 space-y-3", Theme::CARD)>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-900 dark:text-white">{username}</p>
                    <p class="text-xs text-gray-500 dark:text-gray-400">{user.email.clone()}</p>
                </div>
                <button
                    type="button"
                    class=Theme::LINK
                    on:click=move |_| {
                        let roles = selected.get_untracked().into_iter().collect::<Vec<_>>();
                        on_save.run((save_username.clone(), roles));
                    }
                >
                    "Save"
                </button>
            </div>
            <div class="flex flex-wrap gap-4">
                {all_roles
                    .into_iter()
                    .map(|role| {
                        let name = role.name.clone();
                        let toggle_name = role.name.clone();
                        let checked_name = role.name;
                        view! {
                            <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        selected.with(|set| set.contains(&checked_name))
                                    }
                                    on:change=move |_| {
                                        selected.update(|set| {
                                            if !set.remove(&toggle_name) {
                                                set.insert(toggle_name.clone());
                                            }
                                        });
                                    }
                                />
                                {name}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
