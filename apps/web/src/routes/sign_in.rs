//! Sign-in route: the root entry point and the gate's redirect target.
//! A rejected sign-in surfaces one generic message; only missing fields
//! are reported per field, and those never reach the network.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::{client, session::use_session};
use auth_session::{ExchangeError, FieldErrors};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct SignInInput {
    email: String,
    password: String,
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::new());

    let sign_in_action = Action::new_local(move |input: &SignInInput| {
        let input = input.clone();
        async move { client::login(&input.email, &input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(response) => {
                    session.login(response.user, response.access_token);
                    navigate("/dashboard", Default::default());
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
        session.set_loading(true);

        sign_in_action.dispatch(SignInInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <form class="mx-auto max-w-sm" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold">"Sign in"</h1>
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@example.com"
                    setter=set_email
                    error=Signal::derive(move || {
                        field_errors.get().message_for("email").map(str::to_string)
                    })
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    setter=set_password
                    error=Signal::derive(move || {
                        field_errors.get().message_for("password").map(str::to_string)
                    })
                />
                <Button button_type="submit" disabled=sign_in_action.pending()>
                    "Sign in"
                </Button>
                {move || {
                    sign_in_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
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
                <p class="mt-6 text-sm text-slate-500">
                    <A href="/reset-password" {..} class="underline">
                        "Forgot your password?"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
