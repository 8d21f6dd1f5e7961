use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, ErrorBanner, Spinner};
use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::jobs::client;
use crate::features::jobs::types::{JobOpening, JobStatus};
use crate::navigation::{intersects, STAFF};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct JobParams {
    id: Option<String>,
}

#[component]
pub fn JobDetailPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <JobDetail />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn JobDetail() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let is_staff = move || intersects(STAFF, &auth.roles.get());
    let params = use_params::<JobParams>();
    let (applied, set_applied) = signal(false);
    let (action_error, set_action_error) = signal::<Option<AppError>>(None);

    let params_for_fetch = params;
    let job = LocalResource::new(move || {
        let id = params_for_fetch
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        async move {
            if id.trim().is_empty() {
                return Err(AppError::Config("Job id is required.".to_string()));
            }

            client::get_job(&id).await
        }
    });

    let apply_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::apply(&id).await }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_job(&id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = apply_action.value().get() {
            match result {
                Ok(()) => set_applied.set(true),
                Err(err) => set_action_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => navigate(paths::JOBS, Default::default()),
                Err(err) => set_action_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match job.get() {
                    Some(Ok(job)) => {
                        let JobOpening { id, title, description, technology, location,
                            experience_years, openings, status, posted_at } = job;
                        let apply_id = id.clone();
                        let delete_id = id.clone();
                        let edit_href = paths::job_edit(&id);
                        let can_apply = status == JobStatus::Open;
                        view! {
                            <div class=format!("{} p-6 space-y-4", Theme::CARD)>
                                <div class="flex items-center justify-between">
                                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                        {title}
                                    </h1>
                                    <span class="text-sm text-gray-500 dark:text-gray-400">
                                        {status.label()}
                                    </span>
                                </div>
                                <p class="text-gray-700 dark:text-gray-300 whitespace-pre-line">
                                    {description}
                                </p>
                                <dl class="grid grid-cols-2 gap-3 text-sm">
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">"Technology"</dt>
                                        <dd class="text-gray-900 dark:text-white">{technology}</dd>
                                    </div>
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">"Location"</dt>
                                        <dd class="text-gray-900 dark:text-white">{location}</dd>
                                    </div>
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">"Experience"</dt>
                                        <dd class="text-gray-900 dark:text-white">
                                            {format!("{experience_years}+ years")}
                                        </dd>
                                    </div>
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">"Openings"</dt>
                                        <dd class="text-gray-900 dark:text-white">{openings}</dd>
                                    </div>
                                    <div>
                                        <dt class="text-gray-500 dark:text-gray-400">"Posted"</dt>
                                        <dd class="text-gray-900 dark:text-white">
                                            {posted_at.format("%Y-%m-%d").to_string()}
                                        </dd>
                                    </div>
                                </dl>
                                <div class="flex items-center gap-3 pt-2">
                                    <Show when=move || can_apply && !applied.get()>
                                        {
                                            let apply_id = apply_id.clone();
                                            view! {
                                                <Button
                                                    disabled=apply_action.pending()
                                                    on_click=Callback::new(move |()| {
                                                        apply_action.dispatch(apply_id.clone());
                                                    })
                                                >
                                                    "Apply"
                                                </Button>
                                            }
                                        }
                                    </Show>
                                    <Show when=is_staff>
                                        {
                                            let edit_href = edit_href.clone();
                                            let delete_id = delete_id.clone();
                                            view! {
                                                <A href=edit_href.clone() {..} class=Theme::LINK>
                                                    "Edit"
                                                </A>
                                                <button
                                                    type="button"
                                                    class="text-sm text-red-600 hover:text-red-800 dark:text-red-400"
                                                    disabled=move || delete_action.pending().get()
                                                    on:click=move |_| {
                                                        delete_action.dispatch(delete_id.clone());
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            }
                                        }
                                    </Show>
                                </div>
                                {move || {
                                    applied.get().then_some(view! {
                                        <Alert
                                            kind=AlertKind::Success
                                            message="Application submitted.".to_string()
                                        />
                                    })
                                }}
                                {move || {
                                    action_error
                                        .get()
                                        .map(|err| view! { <ErrorBanner error=err /> })
                                }}
                            </div>
                        }
                        .into_any()
                    }
                    Some(Err(err)) => view! { <ErrorBanner error=err /> }.into_any(),
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
