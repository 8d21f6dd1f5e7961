//! Application tracking. Candidates see their own pipeline; staff see all
//! applications and can advance the status. Status changes refetch the list
//! after the server confirms, so the table never shows an optimistic state
//! the backend rejected.

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, ErrorBanner, Spinner};
use crate::features::applications::client;
use crate::features::applications::types::{ApplicationStatus, JobApplication};
use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::app_lib::AppError;
use crate::navigation::{intersects, STAFF};
use leptos::prelude::*;

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <ApplicationsList />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn ApplicationsList() -> impl IntoView {
    let auth = use_auth();
    let is_staff = move || intersects(STAFF, &auth.roles.get());
    let (action_error, set_action_error) = signal::<Option<AppError>>(None);

    let applications =
        LocalResource::new(move || async move { client::list_applications().await });

    let status_action = Action::new_local(move |input: &(String, ApplicationStatus)| {
        let (id, status) = input.clone();
        async move { client::update_status(&id, status).await }
    });

    Effect::new(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok(()) => applications.refetch(),
                Err(err) => set_action_error.set(Some(err)),
            }
        }
    });

    let offer_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move {
            let letter = client::offer_letter(&id).await?;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&letter.url);
            }
            Ok::<_, AppError>(())
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = offer_action.value().get() {
            set_action_error.set(Some(err));
        }
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Applications"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    {move || if is_staff() {
                        "Track every candidate in the pipeline."
                    } else {
                        "Track the status of your applications."
                    }}
                </p>
            </div>
            {move || {
                action_error
                    .get()
                    .map(|err| view! { <ErrorBanner error=err /> })
            }}
            <div class=Theme::CARD>
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=Theme::TH>"Position"</th>
                            <th scope="col" class=Theme::TH>"Candidate"</th>
                            <th scope="col" class=Theme::TH>"Applied"</th>
                            <th scope="col" class=Theme::TH>"Status"</th>
                            <th scope="col" class=Theme::TH>"Offer"</th>
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
                            {move || match applications.get() {
                                Some(Ok(list)) if list.is_empty() => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No applications yet."
                                            </td>
                                        </tr>
                                    }.into_any()
                                }
                                Some(Ok(list)) => {
                                    let staff = is_staff();
                                    view! {
                                        <For
                                            each=move || list.clone()
                                            key=|application| application.id.clone()
                                            children=move |application: JobApplication| {
                                                view! {
                                                    <ApplicationRow
                                                        application=application
                                                        staff=staff
                                                        on_status=Callback::new(move |input: (String, ApplicationStatus)| {
                                                            status_action.dispatch(input);
                                                        })
                                                        on_offer=Callback::new(move |id: String| {
                                                            offer_action.dispatch(id);
                                                        })
                                                    />
                                                }
                                            }
                                        />
                                    }.into_any()
                                }
                                Some(Err(err)) => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-4">
                                                <ErrorBanner error=err />
                                            </td>
                                        </tr>
                                    }.into_any()
                                }
                                None => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center">
                                            <Spinner />
                                        </td>
                                    </tr>
                                }.into_any(),
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn ApplicationRow(
    application: JobApplication,
    staff: bool,
    on_status: Callback<(String, ApplicationStatus)>,
    on_offer: Callback<String>,
) -> impl IntoView {
    let id = application.id.clone();
    let offer_id = application.id.clone();
    let status = application.status;

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                {application.job_title.clone()}
            </td>
            <td class=Theme::TD>{application.candidate_username.clone()}</td>
            <td class=Theme::TD>
                {application.applied_at.format("%Y-%m-%d").to_string()}
            </td>
            <td class=Theme::TD>
                <Show
                    when=move || staff
                    fallback=move || view! { <span>{status.label()}</span> }
                >
                    {
                        let id = id.clone();
                        view! {
                            <select
                                class=Theme::INPUT
                                on:change=move |event| {
                                    if let Some(next) =
                                        ApplicationStatus::parse(&event_target_value(&event))
                                    {
                                        on_status.run((id.clone(), next));
                                    }
                                }
                            >
                                {ApplicationStatus::ALL
                                    .iter()
                                    .map(|candidate| {
                                        view! {
                                            <option
                                                value=candidate.as_str()
                                                selected=*candidate == status
                                            >
                                                {candidate.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        }
                    }
                </Show>
            </td>
            <td class=Theme::TD>
                <Show when=move || status.has_offer_letter() fallback=|| view! { <span>"-"</span> }>
                    {
                        let offer_id = offer_id.clone();
                        view! {
                            <button
                                type="button"
                                class=Theme::LINK
                                on:click=move |_| on_offer.run(offer_id.clone())
                            >
                                "Offer letter"
                            </button>
                        }
                    }
                </Show>
            </td>
        </tr>
    }
}
