use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-lg mx-auto text-center space-y-4">
                <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">
                    "Page not found"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "The page you are looking for does not exist or has moved."
                </p>
                <A href="/" {..} class="text-blue-600 hover:underline">
                    "Back to the dashboard"
                </A>
            </div>
        </AppShell>
    }
}
