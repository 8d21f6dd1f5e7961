use crate::app_lib::{clock, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::otp;
use crate::features::auth::storage::browser_session;
use crate::features::auth::types::RegisterRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move {
            let response = client::register(&request).await?;
            Ok::<_, AppError>((request.email, response))
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok((email, response)) => {
                    // The OTP screen is gated on this marker; it expires with
                    // the code itself.
                    let expires_at = clock::now_ms() + response.otp_valid_for_secs * 1000;
                    otp::begin_verification(browser_session().store(), &email, expires_at);
                    navigate(paths::VERIFY_OTP, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || email_value.is_empty() || password_value.trim().is_empty()
        {
            set_error.set(Some(AppError::Config(
                "Username, email, and password are required.".to_string(),
            )));
            return;
        }
        if !email_value.contains('@') {
            set_error.set(Some(AppError::Config(
                "Email address looks invalid.".to_string(),
            )));
            return;
        }

        register_action.dispatch(RegisterRequest {
            username: username_value,
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create an account"
                </h1>
                <TextField
                    id="username"
                    label="Username"
                    set=set_username
                    autocomplete="username"
                    required=true
                />
                <TextField
                    id="email"
                    label="Email"
                    set=set_email
                    input_type="email"
                    placeholder="name@inbox.im"
                    autocomplete="email"
                    required=true
                />
                <TextField
                    id="password"
                    label="Password"
                    set=set_password
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                />
                <Button button_type="submit" disabled=register_action.pending()>
                    "Register"
                </Button>
                {move || {
                    register_action
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
