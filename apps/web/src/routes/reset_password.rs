//! Password-reset route. The token arrives in the link fragment and is
//! kept in an editable field; on failure the form retains it. The
//! confirmation check happens during validation, so a mismatch never
//! reaches the network.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use auth_session::{ExchangeError, FieldErrors};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use web_sys::{window, UrlSearchParams};

#[derive(Clone)]
struct ResetInput {
    token: String,
    new_password: String,
    confirm_password: String,
}

#[derive(Clone, Debug, PartialEq)]
enum ResetStatus {
    Idle,
    Success(String),
    Failed(String),
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let initial_token = extract_token_from_hash().unwrap_or_default();
    let (token, set_token) = signal(initial_token.clone());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::new());
    let (status, set_status) = signal(ResetStatus::Idle);

    let reset_action = Action::new_local(move |input: &ResetInput| {
        let input = input.clone();
        async move {
            client::reset_password(&input.token, &input.new_password, &input.confirm_password)
                .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(response) => set_status.set(ResetStatus::Success(response.message)),
                Err(ExchangeError::Validation(fields)) => set_field_errors.set(fields),
                Err(err) => set_status.set(ResetStatus::Failed(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_field_errors.set(FieldErrors::new());
        set_status.set(ResetStatus::Idle);

        reset_action.dispatch(ResetInput {
            token: token.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        });
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || field_errors.get().message_for(field).map(str::to_string))
    };

    view! {
        <AppShell>
            <form class="mx-auto max-w-sm" on:submit=on_submit>
                <h1 class="mb-2 text-2xl font-semibold">"Reset password"</h1>
                <p class="mb-6 text-sm text-slate-500">
                    "Paste the token from your email if it was not filled in automatically."
                </p>
                <TextField
                    id="token"
                    label="Reset token"
                    initial=initial_token
                    setter=set_token
                    error=field_error("token")
                />
                <TextField
                    id="new_password"
                    label="New password"
                    input_type="password"
                    autocomplete="new-password"
                    setter=set_new_password
                    error=field_error("newPassword")
                />
                <TextField
                    id="confirm_password"
                    label="Confirm new password"
                    input_type="password"
                    autocomplete="new-password"
                    setter=set_confirm_password
                    error=field_error("confirmPassword")
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
                {move || match status.get() {
                    ResetStatus::Idle => None,
                    ResetStatus::Success(message) => Some(
                        view! {
                            <div class="mt-4 space-y-3">
                                <Alert kind=AlertKind::Success message=message />
                                <p class="text-sm text-slate-500">
                                    <A href="/" {..} class="underline">
                                        "Back to sign in"
                                    </A>
                                </p>
                            </div>
                        }
                            .into_any(),
                    ),
                    ResetStatus::Failed(message) => Some(
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                            .into_any(),
                    ),
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
