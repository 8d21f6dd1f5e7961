//! Job-openings list. Everyone signed in can browse; the create button is
//! shown to staff only, matching the guard on the form route.

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, ErrorBanner, Spinner};
use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::jobs::client;
use crate::features::jobs::types::JobOpening;
use crate::navigation::{intersects, STAFF};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn JobsListPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <JobsList />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn JobsList() -> impl IntoView {
    let auth = use_auth();
    let is_staff = move || intersects(STAFF, &auth.roles.get());
    let jobs = LocalResource::new(move || async move { client::list_jobs().await });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Job Openings"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Browse open positions and apply."
                    </p>
                </div>
                <Show when=is_staff>
                    <A href="/jobs/new" {..} class=Theme::LINK>
                        "New opening"
                    </A>
                </Show>
            </div>

            <div class=Theme::CARD>
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=Theme::TH>"Title"</th>
                            <th scope="col" class=Theme::TH>"Technology"</th>
                            <th scope="col" class=Theme::TH>"Location"</th>
                            <th scope="col" class=Theme::TH>"Openings"</th>
                            <th scope="col" class=Theme::TH>"Status"</th>
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
                            {move || match jobs.get() {
                                Some(Ok(list)) if list.is_empty() => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No open positions right now."
                                            </td>
                                        </tr>
                                    }.into_any()
                                }
                                Some(Ok(list)) => {
                                    view! {
                                        <For
                                            each=move || list.clone()
                                            key=|job| job.id.clone()
                                            children=|job: JobOpening| {
                                                view! {
                                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                            <A
                                                                href=paths::job_detail(&job.id)
                                                                {..}
                                                                class=Theme::LINK
                                                            >
                                                                {job.title.clone()}
                                                            </A>
                                                        </td>
                                                        <td class=Theme::TD>{job.technology.clone()}</td>
                                                        <td class=Theme::TD>{job.location.clone()}</td>
                                                        <td class=Theme::TD>{job.openings}</td>
                                                        <td class=Theme::TD>{job.status.label()}</td>
                                                    </tr>
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
