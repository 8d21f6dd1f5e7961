use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::types::ForgotPasswordRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (sent, set_sent) = signal(false);

    let request_action = Action::new_local(move |request: &ForgotPasswordRequest| {
        let request = request.clone();
        async move { client::forgot_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(()) => set_sent.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() || !email_value.contains('@') {
            set_error.set(Some(AppError::Config(
                "Enter the email you registered with.".to_string(),
            )));
            return;
        }

        request_action.dispatch(ForgotPasswordRequest { email: email_value });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Reset your password"
                </h1>
                <TextField
                    id="email"
                    label="Email"
                    set=set_email
                    input_type="email"
                    placeholder="name@inbox.im"
                    autocomplete="email"
                    required=true
                />
                <Button button_type="submit" disabled=request_action.pending()>
                    "Send reset link"
                </Button>
                {move || {
                    request_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    sent.get().then_some(view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Success
                                message="If that email exists, a reset link is on the way.".to_string()
                            />
                        </div>
                    })
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
