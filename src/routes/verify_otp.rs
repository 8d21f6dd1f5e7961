use crate::app_lib::{clock, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::guards::RequireOtpPending;
use crate::features::auth::otp;
use crate::features::auth::storage::browser_session;
use crate::features::auth::types::{ResendOtpRequest, VerifyOtpRequest};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug, PartialEq)]
enum ResendStatus {
    Idle,
    Success,
    Error(String),
}

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireOtpPending>
                <VerifyOtpForm />
            </RequireOtpPending>
        </AppShell>
    }
}

#[component]
fn VerifyOtpForm() -> impl IntoView {
    let navigate = use_navigate();
    let (code, set_code) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (resend_status, set_resend_status) = signal(ResendStatus::Idle);

    let verify_action = Action::new_local(move |request: &VerifyOtpRequest| {
        let request = request.clone();
        async move { client::verify_otp(&request).await }
    });

    let resend_action = Action::new_local(move |request: &ResendOtpRequest| {
        let request = request.clone();
        async move {
            let response = client::resend_otp(&request).await?;
            Ok::<_, AppError>((request.email, response))
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => {
                    otp::clear_verification(browser_session().store());
                    navigate(paths::LOGIN, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok((email, response)) => {
                    let expires_at = clock::now_ms() + response.otp_valid_for_secs * 1000;
                    otp::begin_verification(browser_session().store(), &email, expires_at);
                    set_resend_status.set(ResendStatus::Success);
                }
                Err(err) => set_resend_status.set(ResendStatus::Error(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        // The guard admitted us, but the marker may have expired since.
        let Some(email) = otp::pending_email(browser_session().store(), clock::now_ms()) else {
            set_error.set(Some(AppError::Config(
                "Your verification window expired. Please register again.".to_string(),
            )));
            return;
        };
        let code_value = code.get_untracked().trim().to_string();
        if code_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Enter the code from your email.".to_string(),
            )));
            return;
        }

        verify_action.dispatch(VerifyOtpRequest {
            email,
            code: code_value,
        });
    };

    let on_resend = move |_| {
        set_resend_status.set(ResendStatus::Idle);
        let Some(email) = otp::pending_email(browser_session().store(), clock::now_ms()) else {
            set_resend_status.set(ResendStatus::Error(
                "Your verification window expired. Please register again.".to_string(),
            ));
            return;
        };
        resend_action.dispatch(ResendOtpRequest { email });
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <h1 class="mb-2 text-2xl font-semibold text-gray-900 dark:text-white">
                "Verify your email"
            </h1>
            <p class="mb-6 text-sm text-gray-500 dark:text-gray-400">
                "We sent a one-time code to your email address."
            </p>
            <TextField
                id="otp_code"
                label="Verification code"
                set=set_code
                placeholder="123456"
                required=true
            />
            <div class="flex items-center gap-3">
                <Button button_type="submit" disabled=verify_action.pending()>
                    "Verify"
                </Button>
                <Button disabled=resend_action.pending() on_click=Callback::new(on_resend)>
                    "Resend code"
                </Button>
            </div>
            {move || {
                (verify_action.pending().get() || resend_action.pending().get())
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
            {move || match resend_status.get() {
                ResendStatus::Idle => None,
                ResendStatus::Success => Some(view! {
                    <div class="mt-4">
                        <Alert
                            kind=AlertKind::Success
                            message="A new code is on the way.".to_string()
                        />
                    </div>
                }),
                ResendStatus::Error(message) => Some(view! {
                    <div class="mt-4">
                        <Alert kind=AlertKind::Error message=message />
                    </div>
                }),
            }}
        </form>
    }
}
