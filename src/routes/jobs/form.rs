//! Create/edit form for job openings, staff-only. The edit page loads the
//! existing record first and pre-fills the fields; both variants share the
//! same form component and submit payload.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::guards::RequireRoles;
use crate::features::jobs::client;
use crate::features::jobs::types::{JobOpening, JobRequest};
use crate::navigation::STAFF;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

#[component]
pub fn JobNewPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRoles required=STAFF>
                <JobForm initial=None />
            </RequireRoles>
        </AppShell>
    }
}

#[derive(Params, PartialEq, Clone)]
struct JobParams {
    id: Option<String>,
}

#[component]
pub fn JobEditPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRoles required=STAFF>
                <JobEditLoader />
            </RequireRoles>
        </AppShell>
    }
}

#[component]
fn JobEditLoader() -> impl IntoView {
    let params = use_params::<JobParams>();
    let job = LocalResource::new(move || {
        let id = params
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

    view! {
        <Suspense fallback=move || view! { <Spinner /> }>
            {move || match job.get() {
                Some(Ok(job)) => view! { <JobForm initial=Some(job) /> }.into_any(),
                Some(Err(err)) => view! {
                    <Alert kind=AlertKind::Error message=err.to_string() />
                }
                .into_any(),
                None => view! { <Spinner /> }.into_any(),
            }}
        </Suspense>
    }
}

#[component]
fn JobForm(initial: Option<JobOpening>) -> impl IntoView {
    let navigate = use_navigate();
    let editing_id = initial.as_ref().map(|job| job.id.clone());
    let heading = if editing_id.is_some() {
        "Edit opening"
    } else {
        "New opening"
    };

    let (title, set_title) = signal(
        initial
            .as_ref()
            .map(|job| job.title.clone())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(
        initial
            .as_ref()
            .map(|job| job.description.clone())
            .unwrap_or_default(),
    );
    let (technology, set_technology) = signal(
        initial
            .as_ref()
            .map(|job| job.technology.clone())
            .unwrap_or_default(),
    );
    let (location, set_location) = signal(
        initial
            .as_ref()
            .map(|job| job.location.clone())
            .unwrap_or_default(),
    );
    let (experience, set_experience) = signal(
        initial
            .as_ref()
            .map(|job| job.experience_years.to_string())
            .unwrap_or_default(),
    );
    let (openings, set_openings) = signal(
        initial
            .as_ref()
            .map(|job| job.openings.to_string())
            .unwrap_or_else(|| "1".to_string()),
    );
    let (error, set_error) = signal::<Option<AppError>>(None);

    let save_action = Action::new_local(move |input: &(Option<String>, JobRequest)| {
        let (id, request) = input.clone();
        async move {
            match id {
                Some(id) => {
                    client::update_job(&id, &request).await?;
                    Ok::<_, AppError>(id)
                }
                None => {
                    let created = client::create_job(&request).await?;
                    Ok(created.id)
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(id) => navigate(&paths::job_detail(&id), Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let title_value = title.get_untracked().trim().to_string();
        let technology_value = technology.get_untracked().trim().to_string();
        if title_value.is_empty() || technology_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Title and technology are required.".to_string(),
            )));
            return;
        }
        let Ok(experience_years) = experience.get_untracked().trim().parse::<u8>() else {
            set_error.set(Some(AppError::Config(
                "Experience must be a whole number of years.".to_string(),
            )));
            return;
        };
        let Ok(openings_value) = openings.get_untracked().trim().parse::<u32>() else {
            set_error.set(Some(AppError::Config(
                "Openings must be a whole number.".to_string(),
            )));
            return;
        };

        let request = JobRequest {
            title: title_value,
            description: description.get_untracked().trim().to_string(),
            technology: technology_value,
            location: location.get_untracked().trim().to_string(),
            experience_years,
            openings: openings_value,
        };
        save_action.dispatch((editing_id.clone(), request));
    };

    view! {
        <form class="max-w-xl mx-auto space-y-5" on:submit=on_submit>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                {heading}
            </h1>
            <div>
                <label class=Theme::LABEL for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    class=Theme::INPUT
                    required
                    prop:value=move || title.get()
                    on:input=move |event| set_title.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=Theme::LABEL for="description">"Description"</label>
                <textarea
                    id="description"
                    class=Theme::INPUT
                    rows="5"
                    prop:value=move || description.get()
                    on:input=move |event| set_description.set(event_target_value(&event))
                ></textarea>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL for="technology">"Technology"</label>
                    <input
                        id="technology"
                        type="text"
                        class=Theme::INPUT
                        required
                        prop:value=move || technology.get()
                        on:input=move |event| set_technology.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="location">"Location"</label>
                    <input
                        id="location"
                        type="text"
                        class=Theme::INPUT
                        prop:value=move || location.get()
                        on:input=move |event| set_location.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="experience">"Experience (years)"</label>
                    <input
                        id="experience"
                        type="number"
                        min="0"
                        class=Theme::INPUT
                        prop:value=move || experience.get()
                        on:input=move |event| set_experience.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="openings">"Openings"</label>
                    <input
                        id="openings"
                        type="number"
                        min="1"
                        class=Theme::INPUT
                        prop:value=move || openings.get()
                        on:input=move |event| set_openings.set(event_target_value(&event))
                    />
                </div>
            </div>
            <Button button_type="submit" disabled=save_action.pending()>
                "Save"
            </Button>
            {move || {
                save_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
