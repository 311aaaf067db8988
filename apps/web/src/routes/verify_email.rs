//! Email verification route. The token arrives in the link fragment, is
//! consumed once on mount, and is scrubbed from the address bar. Success
//! schedules a redirect to the sign-in entry after a fixed delay; failure
//! shows the server's message (or a fallback) and stays put.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsValue;
use web_sys::{window, UrlSearchParams};

/// Delay before the post-verification redirect to sign-in.
const REDIRECT_DELAY_MS: u32 = 3_000;

const FALLBACK_ERROR: &str = "Verification failed. Request a new link below.";

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    MissingToken,
    Pending,
    Success,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
enum ResendStatus {
    Idle,
    Pending,
    Success,
    Error(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let navigate = use_navigate();
    let (status, set_status) = signal(VerifyStatus::Idle);
    let (resend_email, set_resend_email) = signal(String::new());
    let (resend_status, set_resend_status) = signal(ResendStatus::Idle);

    let verify_action = Action::new_local(move |token_value: &String| {
        let token_value = token_value.clone();
        async move { client::verify_email(&token_value).await }
    });

    let resend_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { client::resend_verification(&email).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(_) => {
                    set_status.set(VerifyStatus::Success);
                    let navigate = navigate.clone();
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate("/", Default::default());
                    })
                    .forget();
                }
                Err(err) => {
                    let message = err.to_string();
                    let message = if message.is_empty() {
                        FALLBACK_ERROR.to_string()
                    } else {
                        message
                    };
                    set_status.set(VerifyStatus::Error(message));
                }
            }
        }
    });

    Effect::new(move |_| {
        if status.get() != VerifyStatus::Idle {
            return;
        }

        match extract_token_from_hash() {
            Some(token) => {
                set_status.set(VerifyStatus::Pending);
                verify_action.dispatch(token);
            }
            None => set_status.set(VerifyStatus::MissingToken),
        }

        clear_token_fragment();
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(_) => set_resend_status.set(ResendStatus::Success),
                Err(err) => set_resend_status.set(ResendStatus::Error(err.to_string())),
            }
        }
    });

    let on_resend_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        let email_value = resend_email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            set_resend_status.set(ResendStatus::Error(
                "Email is required to resend verification.".to_string(),
            ));
            return;
        }
        if !email_value.contains('@') {
            set_resend_status.set(ResendStatus::Error(
                "Email address looks invalid.".to_string(),
            ));
            return;
        }

        set_resend_status.set(ResendStatus::Pending);
        resend_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <div class="mx-auto max-w-lg">
                <h1 class="text-2xl font-semibold">"Verify your email"</h1>
                {move || match status.get() {
                    VerifyStatus::Idle | VerifyStatus::Pending => view! {
                        <div class="mt-4">
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Success => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Email verified. Taking you to sign in…".to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::MissingToken => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Error
                                message="Missing verification token. Check your email link.".to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=message />
                        </div>
                    }
                    .into_any(),
                }}
                <form
                    class="mt-8 rounded-md border border-slate-200 bg-white p-5"
                    on:submit=on_resend_submit
                >
                    <h2 class="text-sm font-semibold">"Need a new link?"</h2>
                    <p class="mt-1 mb-4 text-sm text-slate-500">
                        "Enter your email to resend the verification link."
                    </p>
                    <TextField
                        id="resend_email"
                        label="Email"
                        input_type="email"
                        autocomplete="email"
                        placeholder="name@example.com"
                        setter=set_resend_email
                    />
                    <Button button_type="submit" disabled=resend_action.pending()>
                        "Resend verification"
                    </Button>
                    {move || {
                        resend_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || match resend_status.get() {
                        ResendStatus::Idle | ResendStatus::Pending => None,
                        ResendStatus::Success => Some(view! {
                            <div class="mt-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="If that email exists, a new link is on the way.".to_string()
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
            </div>
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
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some("/verify-email"));
}
