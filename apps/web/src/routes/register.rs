//! Registration route. Inputs are validated before the exchange; field
//! errors render inline. A successful exchange establishes the session,
//! but an unverified account is prompted to verify its email before it
//! can use protected pages.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::{client, session::use_session};
use auth_session::{ExchangeError, FieldErrors};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct RegisterInput {
    email: String,
    display_name: String,
    password: String,
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (display_name, set_display_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::new());
    let (verify_prompt, set_verify_prompt) = signal(false);

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let input = input.clone();
        async move { client::register(&input.email, &input.display_name, &input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(response) => {
                    let verified = response.user.email_verified;
                    session.login(response.user, response.access_token);
                    if verified {
                        navigate("/dashboard", Default::default());
                    } else {
                        set_verify_prompt.set(true);
                    }
                }
                Err(ExchangeError::Validation(fields)) => {
                    session.set_loading(false);
                    set_field_errors.set(fields);
                }
                Err(err) => session.set_error(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_field_errors.set(FieldErrors::new());
        set_verify_prompt.set(false);
        session.set_loading(true);

        register_action.dispatch(RegisterInput {
            email: email.get_untracked(),
            display_name: display_name.get_untracked(),
            password: password.get_untracked(),
        });
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || field_errors.get().message_for(field).map(str::to_string))
    };

    view! {
        <AppShell>
            <form class="mx-auto max-w-sm" on:submit=on_submit>
                <h1 class="mb-2 text-2xl font-semibold">"Create account"</h1>
                <p class="mb-6 text-sm text-slate-500">
                    "Use at least 8 characters with upper and lower case letters, a digit and a symbol."
                </p>
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@example.com"
                    setter=set_email
                    error=field_error("email")
                />
                <TextField
                    id="display_name"
                    label="Display name"
                    autocomplete="name"
                    setter=set_display_name
                    error=field_error("displayName")
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    setter=set_password
                    error=field_error("password")
                />
                <Button button_type="submit" disabled=register_action.pending()>
                    "Create account"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    verify_prompt
                        .get()
                        .then_some(view! {
                            <div class="mt-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Account created. Check your email to verify your address."
                                        .to_string()
                                />
                            </div>
                        })
                }}
                {move || {
                    session
                        .error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
