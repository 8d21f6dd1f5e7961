//! Interview management for staff: list scheduled sessions, schedule new
//! ones against an application, cancel, and record feedback afterwards.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, ErrorBanner, Spinner};
use crate::features::auth::guards::RequireRoles;
use crate::features::interviews::client;
use crate::features::interviews::types::{Interview, InterviewStatus, ScheduleRequest};
use crate::navigation::STAFF;
use crate::routes::paths;
use chrono::{DateTime, NaiveDateTime, Utc};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn InterviewsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRoles required=STAFF>
                <InterviewsList />
            </RequireRoles>
        </AppShell>
    }
}

#[component]
fn InterviewsList() -> impl IntoView {
    let (action_error, set_action_error) = signal::<Option<AppError>>(None);
    let (show_form, set_show_form) = signal(false);

    let interviews =
        LocalResource::new(move || async move { client::list_interviews().await });

    let cancel_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::cancel(&id).await }
    });

    let feedback_action = Action::new_local(move |input: &(String, String)| {
        let (id, feedback) = input.clone();
        async move { client::submit_feedback(&id, &feedback).await }
    });

    Effect::new(move |_| {
        if let Some(result) = cancel_action.value().get() {
            match result {
                Ok(()) => interviews.refetch(),
                Err(err) => set_action_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = feedback_action.value().get() {
            match result {
                Ok(()) => interviews.refetch(),
                Err(err) => set_action_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Interviews"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Scheduled sessions with candidates."
                    </p>
                </div>
                <Button on_click=Callback::new(move |()| set_show_form.update(|open| *open = !*open))>
                    {move || if show_form.get() { "Close" } else { "Schedule interview" }}
                </Button>
            </div>

            <Show when=move || show_form.get()>
                <ScheduleForm on_scheduled=Callback::new(move |()| {
                    set_show_form.set(false);
                    interviews.refetch();
                }) />
            </Show>

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
                            <th scope="col" class=Theme::TH>"Interviewer"</th>
                            <th scope="col" class=Theme::TH>"When"</th>
                            <th scope="col" class=Theme::TH>"Status"</th>
                            <th scope="col" class=Theme::TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="6" class="px-6 py-12 text-center">
                                    <Spinner />
                                </td>
                            </tr>
                        }>
                            {move || match interviews.get() {
                                Some(Ok(list)) if list.is_empty() => {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No interviews scheduled."
                                            </td>
                                        </tr>
                                    }.into_any()
                                }
                                Some(Ok(list)) => {
                                    view! {
                                        <For
                                            each=move || list.clone()
                                            key=|interview| interview.id.clone()
                                            children=move |interview: Interview| {
                                                view! {
                                                    <InterviewRow
                                                        interview=interview
                                                        on_cancel=Callback::new(move |id: String| {
                                                            cancel_action.dispatch(id);
                                                        })
                                                        on_feedback=Callback::new(move |input: (String, String)| {
                                                            feedback_action.dispatch(input);
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
                                            <td colspan="6" class="px-6 py-4">
                                                <ErrorBanner error=err />
                                            </td>
                                        </tr>
                                    }.into_any()
                                }
                                None => view! {
                                    <tr>
                                        <td colspan="6" class="px-6 py-12 text-center">
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
fn InterviewRow(
    interview: Interview,
    on_cancel: Callback<String>,
    on_feedback: Callback<(String, String)>,
) -> impl IntoView {
    let status = interview.status;
    let cancel_id = interview.id.clone();
    let feedback_id = interview.id.clone();
    let room_href = paths::meeting_room(&interview.meeting_room);
    let (feedback_open, set_feedback_open) = signal(false);
    let (feedback_text, set_feedback_text) = signal(String::new());
    let has_feedback = interview.feedback.is_some();

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                {interview.job_title.clone()}
            </td>
            <td class=Theme::TD>{interview.candidate_username.clone()}</td>
            <td class=Theme::TD>{interview.interviewer_username.clone()}</td>
            <td class=Theme::TD>
                {format!(
                    "{} ({} min)",
                    interview.scheduled_at.format("%Y-%m-%d %H:%M"),
                    interview.duration_minutes,
                )}
            </td>
            <td class=Theme::TD>{status.label()}</td>
            <td class=Theme::TD>
                <div class="flex items-center gap-3">
                    <Show when=move || status == InterviewStatus::Scheduled>
                        {
                            let room_href = room_href.clone();
                            let cancel_id = cancel_id.clone();
                            view! {
                                <A href=room_href.clone() {..} class=Theme::LINK>
                                    "Join"
                                </A>
                                <button
                                    type="button"
                                    class="text-sm text-red-600 hover:text-red-800 dark:text-red-400"
                                    on:click=move |_| on_cancel.run(cancel_id.clone())
                                >
                                    "Cancel"
                                </button>
                            }
                        }
                    </Show>
                    <Show when=move || status != InterviewStatus::Cancelled && !has_feedback>
                        <button
                            type="button"
                            class=Theme::LINK
                            on:click=move |_| set_feedback_open.update(|open| *open = !*open)
                        >
                            "Feedback"
                        </button>
                    </Show>
                </div>
                <Show when=move || feedback_open.get()>
                    {
                        let feedback_id = feedback_id.clone();
                        view! {
                            <div class="mt-2 space-y-2">
                                <textarea
                                    class=Theme::INPUT
                                    rows="3"
                                    placeholder="Interview notes"
                                    prop:value=move || feedback_text.get()
                                    on:input=move |event| {
                                        set_feedback_text.set(event_target_value(&event))
                                    }
                                ></textarea>
                                <button
                                    type="button"
                                    class=Theme::LINK
                                    on:click=move |_| {
                                        let text = feedback_text.get_untracked();
                                        if !text.trim().is_empty() {
                                            on_feedback.run((feedback_id.clone(), text));
                                            set_feedback_open.set(false);
                                        }
                                    }
                                >
                                    "Submit"
                                </button>
                            </div>
                        }
                    }
                </Show>
            </td>
        </tr>
    }
}

#[component]
fn ScheduleForm(on_scheduled: Callback<()>) -> impl IntoView {
    let (application_id, set_application_id) = signal(String::new());
    let (interviewer, set_interviewer) = signal(String::new());
    let (when, set_when) = signal(String::new());
    let (duration, set_duration) = signal("60".to_string());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let schedule_action = Action::new_local(move |request: &ScheduleRequest| {
        let request = request.clone();
        async move { client::schedule(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = schedule_action.value().get() {
            match result {
                Ok(_) => on_scheduled.run(()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let application = application_id.get_untracked().trim().to_string();
        let interviewer_value = interviewer.get_untracked().trim().to_string();
        if application.is_empty() || interviewer_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Application id and interviewer are required.".to_string(),
            )));
            return;
        }
        // datetime-local inputs produce "YYYY-MM-DDTHH:MM" without a zone.
        let Some(scheduled_at) = parse_local_datetime(when.get_untracked().trim()) else {
            set_error.set(Some(AppError::Config(
                "A valid date and time is required.".to_string(),
            )));
            return;
        };
        let Ok(duration_minutes) = duration.get_untracked().trim().parse::<u32>() else {
            set_error.set(Some(AppError::Config(
                "Duration must be a whole number of minutes.".to_string(),
            )));
            return;
        };

        schedule_action.dispatch(ScheduleRequest {
            application_id: application,
            interviewer_username: interviewer_value,
            scheduled_at,
            duration_minutes,
        });
    };

    view! {
        <form class=format!("{} p-6 space-y-4", Theme::CARD) on:submit=on_submit>
            <h2 class="text-lg font-medium text-gray-900 dark:text-white">
                "Schedule interview"
            </h2>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL for="application-id">"Application id"</label>
                    <input
                        id="application-id"
                        type="text"
                        class=Theme::INPUT
                        required
                        prop:value=move || application_id.get()
                        on:input=move |event| set_application_id.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="interviewer">"Interviewer"</label>
                    <input
                        id="interviewer"
                        type="text"
                        class=Theme::INPUT
                        required
                        prop:value=move || interviewer.get()
                        on:input=move |event| set_interviewer.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="scheduled-at">"Date and time"</label>
                    <input
                        id="scheduled-at"
                        type="datetime-local"
                        class=Theme::INPUT
                        required
                        prop:value=move || when.get()
                        on:input=move |event| set_when.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="duration">"Duration (minutes)"</label>
                    <input
                        id="duration"
                        type="number"
                        min="15"
                        step="15"
                        class=Theme::INPUT
                        prop:value=move || duration.get()
                        on:input=move |event| set_duration.set(event_target_value(&event))
                    />
                </div>
            </div>
            <Button button_type="submit" disabled=schedule_action.pending()>
                "Schedule"
            </Button>
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        }
                    })
            }}
        </form>
    }
}

fn parse_local_datetime(value: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()?;
    Some(DateTime::from_naive_utc_and_offset(naive, Utc))
}
