//! Month calendar of interviews. Fetched responses carry the month they were
//! requested for; a response for a month the user has already paged away from
//! is dropped instead of rendered.

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, ErrorBanner, Spinner};
use crate::features::auth::guards::RequireAuth;
use crate::features::calendar::month::{month_grid, month_name, next_month, previous_month};
use crate::features::interviews::client;
use crate::features::interviews::types::Interview;
use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;

#[component]
pub fn CalendarPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <MonthView />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn MonthView() -> impl IntoView {
    let today = Utc::now();
    let (current, set_current) = signal((today.year(), today.month()));

    let interviews = LocalResource::new(move || {
        let (year, month) = current.get();
        async move {
            let list = client::list_for_month(year, month).await;
            ((year, month), list)
        }
    });

    let month_interviews = Signal::derive(move || match interviews.get() {
        // Drop responses for a month that is no longer shown.
        Some((key, result)) if key == current.get() => Some(result),
        _ => None,
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    {move || {
                        let (year, month) = current.get();
                        format!("{} {year}", month_name(month))
                    }}
                </h1>
                <div class="flex items-center gap-2">
                    <button
                        type="button"
                        class=Theme::LINK
                        on:click=move |_| {
                            set_current.update(|key| *key = previous_month(key.0, key.1))
                        }
                    >
                        "Previous"
                    </button>
                    <button
                        type="button"
                        class=Theme::LINK
                        on:click=move |_| {
                            set_current.update(|key| *key = next_month(key.0, key.1))
                        }
                    >
                        "Next"
                    </button>
                </div>
            </div>

            {move || match month_interviews.get() {
                Some(Ok(list)) => {
                    let (year, month) = current.get();
                    view! { <MonthGridView year=year month=month interviews=list /> }.into_any()
                }
                Some(Err(err)) => view! { <ErrorBanner error=err /> }.into_any(),
                None => view! {
                    <div class="py-12 text-center">
                        <Spinner />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[component]
fn MonthGridView(year: i32, month: u32, interviews: Vec<Interview>) -> impl IntoView {
    let grid = month_grid(year, month);

    let for_day = move |day: u32| -> Vec<Interview> {
        interviews
            .iter()
            .filter(|interview| {
                let at = interview.scheduled_at;
                at.year() == year && at.month() == month && at.day() == day
            })
            .cloned()
            .collect()
    };

    view! {
        <div class=Theme::CARD>
            <div class="grid grid-cols-7 border-b border-gray-200 dark:border-gray-700">
                {WEEKDAYS
                    .iter()
                    .map(|name| {
                        view! {
                            <div class="px-2 py-2 text-xs font-medium uppercase tracking-wider text-center text-gray-500 dark:text-gray-400">
                                {*name}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {grid
                .weeks
                .into_iter()
                .map(|week| {
                    view! {
                        <div class="grid grid-cols-7 divide-x divide-gray-200 dark:divide-gray-700 border-b border-gray-200 dark:border-gray-700 last:border-b-0">
                            {week
                                .into_iter()
                                .map(|day| match day {
                                    Some(day) => {
                                        let entries = for_day(day);
                                        view! {
                                            <div class="min-h-24 p-2 space-y-1">
                                                <div class="text-xs text-gray-500 dark:text-gray-400">
                                                    {day}
                                                </div>
                                                {entries
                                                    .into_iter()
                                                    .map(|interview| {
                                                        view! {
                                                            <A
                                                                href=paths::meeting_room(&interview.meeting_room)
                                                                {..}
                                                                class="block truncate rounded bg-indigo-50 dark:bg-indigo-900/40 px-1.5 py-0.5 text-xs text-indigo-700 dark:text-indigo-300"
                                                            >
                                                                {format!(
                                                                    "{} {}",
                                                                    interview.scheduled_at.format("%H:%M"),
                                                                    interview.candidate_username,
                                                                )}
                                                            </A>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                        .into_any()
                                    }
                                    None => view! {
                                        <div class="min-h-24 p-2 bg-gray-50 dark:bg-gray-900/30"></div>
                                    }
                                    .into_any(),
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
