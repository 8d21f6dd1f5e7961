use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use crate::features::auth::client;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    auth.login(&response.token, Some(&response.user));
                    navigate("/", Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Username and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginRequest {
            username: username_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Sign in"
                </h1>
                <TextField
                    id="username"
                    label="Username"
                    set=set_username
                    autocomplete="username"
                    required=true
                />
                <TextField
                    id="password"
                    label="Password"
                    set=set_password
                    input_type="password"
                    autocomplete="current-password"
                    required=true
                />
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign in"
                </Button>
                <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                    <A href="/forgot-password" {..} class="text-blue-600 hover:underline">
                        "Forgot password?"
                    </A>
                    " · "
                    <A href=paths::REGISTER {..} class="text-blue-600 hover:underline">
                        "Create an account"
                    </A>
                </p>
                {move || {
                    login_action
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
        </AppShell>
    }
}
