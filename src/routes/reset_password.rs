//! Completes a password reset. The emailed link carries the reset token in
//! the URL fragment so it never reaches server logs; the fragment is
//! consumed once and scrubbed from history.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::types::ResetPasswordRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsValue;
use web_sys::{window, UrlSearchParams};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let (token, set_token) = signal::<Option<String>>(None);
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    Effect::new(move |_| {
        if token.get_untracked().is_some() {
            return;
        }
        set_token.set(extract_token_from_hash());
        clear_token_fragment();
    });

    let reset_action = Action::new_local(move |request: &ResetPasswordRequest| {
        let request = request.clone();
        async move { client::reset_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => navigate(paths::LOGIN, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let Some(token_value) = token.get_untracked() else {
            set_error.set(Some(AppError::Config(
                "Missing reset token. Check your email link.".to_string(),
            )));
            return;
        };
        let password_value = password.get_untracked();
        if password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Choose a new password.".to_string(),
            )));
            return;
        }
        if password_value != confirm.get_untracked() {
            set_error.set(Some(AppError::Config(
                "Passwords do not match.".to_string(),
            )));
            return;
        }

        reset_action.dispatch(ResetPasswordRequest {
            token: token_value,
            new_password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Choose a new password"
                </h1>
                {move || {
                    token.get().is_none().then_some(view! {
                        <div class="mb-4">
                            <Alert
                                kind=AlertKind::Error
                                message="Missing reset token. Check your email link.".to_string()
                            />
                        </div>
                    })
                }}
                <TextField
                    id="password"
                    label="New password"
                    set=set_password
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                />
                <TextField
                    id="confirm"
                    label="Confirm password"
                    set=set_confirm
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                />
                <Button button_type="submit" disabled=reset_action.pending()>
                    "Reset password"
                </Button>
                {move || {
                    reset_action
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

fn extract_token_from_hash() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    let trimmed = hash.trim_start_matches('#');
    if trimmed.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(trimmed).ok()?;
    params.get("token")
}

fn clear_token_fragment() {
    let Some(window) = window() else {
        return;
    };
    let history = match window.history() {
        Ok(history) => history,
        Err(_) => return,
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some("/reset-password"));
}
