//! Permissions dashboard, served through the session gate. On mount the
//! page exchanges the httpOnly refresh cookie for a fresh access token;
//! a rejected exchange means the server session is gone, so the page
//! logs out and returns to sign-in. The user picker fetches with the
//! bearer token once the session is established.

use crate::app_lib::config;
use crate::components::{Alert, AlertKind, AppShell, Spinner, TextField};
use crate::features::auth::{client, session::use_session};
use crate::features::users::{client as users_client, types::UserSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // Implicit refresh: the gate already verified the cookie to let this
    // page render, so exchange it for a fresh access token now.
    {
        let navigate = navigate.clone();
        session.set_loading(true);
        spawn_local(async move {
            match client::refresh().await {
                Ok(response) => session.login(response.user, response.access_token),
                Err(err) if err.is_auth() => {
                    session.logout();
                    navigate("/", Default::default());
                }
                Err(err) => session.set_error(Some(err.to_string())),
            }
        });
    }

    // The picker waits for an established session instead of trusting a
    // provisionally restored token.
    let users = LocalResource::new(move || {
        let token = session
            .is_authenticated
            .get()
            .then(|| session.access_token.get())
            .flatten();
        async move {
            match token {
                Some(token) => users_client::list_users(&token).await,
                None => Ok(Vec::new()),
            }
        }
    });

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if let Some(Err(err)) = users.get() {
                if err.is_auth() {
                    session.logout();
                    navigate("/", Default::default());
                }
            }
        });
    }

    let (filter, set_filter) = signal(String::new());
    let (selected, set_selected) = signal::<Option<UserSummary>>(None);

    let gate_hint = config::gate_session_hint();
    let gate_facts = match gate_hint {
        Some(hint) if hint.refresh_token_present => {
            format!("present ({} characters)", hint.refresh_token_length)
        }
        Some(_) => "absent".to_string(),
        None => "not reported".to_string(),
    };

    view! {
        <AppShell>
            <div class="space-y-8">
                <div>
                    <h1 class="text-2xl font-semibold">"Permissions"</h1>
                    <p class="mt-1 text-sm text-slate-500">
                        "Pick a user to review their access."
                    </p>
                </div>

                {move || {
                    session
                        .is_loading
                        .get()
                        .then_some(view! { <Spinner /> })
                }}
                {move || {
                    session
                        .error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}

                <div class="rounded-md border border-slate-200 bg-white p-5 text-sm">
                    <h2 class="font-semibold">"Session"</h2>
                    <dl class="mt-3 space-y-1 text-slate-600">
                        <div class="flex gap-2">
                            <dt class="w-40 text-slate-400">"Signed in as"</dt>
                            <dd>
                                {move || {
                                    session
                                        .user
                                        .get()
                                        .map_or("resolving…".to_string(), |user| user.email)
                                }}
                            </dd>
                        </div>
                        <div class="flex gap-2">
                            <dt class="w-40 text-slate-400">"Server session cookie"</dt>
                            <dd>{gate_facts}</dd>
                        </div>
                    </dl>
                </div>

                <div class="rounded-md border border-slate-200 bg-white p-5">
                    <h2 class="text-sm font-semibold">"Users"</h2>
                    <div class="mt-4 max-w-xs">
                        <TextField
                            id="user_filter"
                            label="Filter"
                            placeholder="email or name"
                            setter=set_filter
                        />
                    </div>
                    {move || match users.get() {
                        None => view! { <Spinner /> }.into_any(),
                        Some(Ok(list)) => {
                            let filter_value = filter.get();
                            let filtered: Vec<UserSummary> = list
                                .into_iter()
                                .filter(|user| user.matches(&filter_value))
                                .collect();
                            if filtered.is_empty() {
                                view! {
                                    <p class="text-sm text-slate-500">"No matching users."</p>
                                }
                                .into_any()
                            } else {
                                filtered
                                    .into_iter()
                                    .map(|user| {
                                        let summary = user.clone();
                                        view! {
                                            <button
                                                class="block w-full rounded px-3 py-2 text-left text-sm hover:bg-slate-100"
                                                on:click=move |_| set_selected.set(Some(summary.clone()))
                                            >
                                                <span class="font-medium">{user.display_name.clone()}</span>
                                                <span class="ml-2 text-slate-500">{user.email.clone()}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }
                        Some(Err(err)) => view! {
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        }
                        .into_any(),
                    }}
                </div>

                {move || {
                    selected
                        .get()
                        .map(|user| {
                            view! {
                                <div class="rounded-md border border-slate-200 bg-white p-5 text-sm">
                                    <h2 class="font-semibold">{user.display_name}</h2>
                                    <p class="mt-1 text-slate-500">{user.email}</p>
                                    <p class="mt-3 text-xs text-slate-400">
                                        {format!("id {}", user.id)}
                                    </p>
                                </div>
                            }
                        })
                }}
            </div>
        </AppShell>
    }
}
