//! Role catalogue management.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Button, ErrorBanner, Spinner};
use crate::features::admin::client;
use crate::features::admin::types::RoleRecord;
use crate::routes::admin::AdminSection;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn AdminRolesPage() -> impl IntoView {
    view! {
        <AdminSection>
            <RolesManager />
        </AdminSection>
    }
}

#[component]
fn RolesManager() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let roles = LocalResource::new(move || async move { client::list_roles().await });

    let create_action = Action::new_local(move |name: &String| {
        let name = name.clone();
        async move { client::create_role(&name).await }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_role(&id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    set_name.set(String::new());
                    roles.refetch();
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => roles.refetch(),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        let value = name.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        create_action.dispatch(value);
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Roles"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Role names are stored upper-cased."
                </p>
            </div>

            <form class="flex gap-3" on:submit=on_submit>
                <input
                    type="text"
                    class=Theme::INPUT
                    placeholder="e.g. INTERVIEWER"
                    prop:value=move || name.get()
                    on:input=move |event| set_name.set(event_target_value(&event))
                />
                <Button button_type="submit" disabled=create_action.pending()>
                    "Add"
                </Button>
            </form>

            {move || error.get().map(|err| view! { <ErrorBanner error=err /> })}

            <div class=Theme::CARD>
                <Suspense fallback=move || view! {
                    <div class="py-8 text-center"><Spinner /></div>
                }>
                    {move || match roles.get() {
                        Some(Ok(list)) if list.is_empty() => view! {
                            <p class="px-6 py-8 text-center text-sm text-gray-500 dark:text-gray-400">
                                "No roles defined."
                            </p>
                        }
                        .into_any(),
                        Some(Ok(list)) => view! {
                            <ul class="divide-y divide-gray-200 dark:divide-gray-700">
                                <For
                                    each=move || list.clone()
                                    key=|role| role.id.clone()
                                    children=move |role: RoleRecord| {
                                        let id = role.id.clone();
                                        view! {
                                            <li class="flex items-center justify-between px-6 py-3">
                                                <span class="text-sm font-medium text-gray-900 dark:text-white">
                                                    {role.name.clone()}
                                                </span>
                                                <button
                                                    type="button"
                                                    class="text-sm text-red-600 hover:text-red-800 dark:text-red-400"
                                                    on:click=move |_| {
                                                        delete_action.dispatch(id.clone());
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        }
                        .into_any(),
                        Some(Err(err)) => view! {
                            <div class="p-4"><ErrorBanner error=err /></div>
                        }
                        .into_any(),
                        None => view! {
                            <div class="py-8 text-center"><Spinner /></div>
                        }
                        .into_any(),
                    }}
                </Suspense>
            </div>
        </div>
    }
}
