//! Page chrome: header navigation, content container and build footer.
//! The header reflects the session state and owns the sign-out control.

use crate::app_lib::build_info;
use crate::features::auth::session::use_session;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        session.logout();
        navigate("/", Default::default());
    };

    view! {
        <div class="min-h-screen bg-slate-50 text-slate-900">
            <header class="border-b border-slate-200 bg-white">
                <div class="mx-auto flex max-w-4xl items-center justify-between px-6 py-4">
                    <A href="/" {..} class="text-lg font-semibold tracking-tight">
                        "konto"
                    </A>
                    <nav class="flex items-center gap-4 text-sm">
                        {move || {
                            if session.is_authenticated.get() {
                                view! {
                                    <A href="/dashboard" {..} class="text-slate-600 hover:text-slate-900">
                                        "Dashboard"
                                    </A>
                                    <button
                                        class="text-slate-600 hover:text-slate-900"
                                        on:click=on_sign_out.clone()
                                    >
                                        "Sign out"
                                    </button>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <A href="/" {..} class="text-slate-600 hover:text-slate-900">
                                        "Sign in"
                                    </A>
                                    <A href="/register" {..} class="text-slate-600 hover:text-slate-900">
                                        "Create account"
                                    </A>
                                }
                                    .into_any()
                            }
                        }}
                    </nav>
                </div>
            </header>
            <main class="mx-auto max-w-4xl px-6 py-10">{children()}</main>
            <footer class="mx-auto max-w-4xl px-6 py-6 text-xs text-slate-400">
                {format!("build {}", short_hash(build_info::git_commit_hash()))}
            </footer>
        </div>
    }
}

fn short_hash(hash: &str) -> &str {
    if hash.len() > 7 { &hash[0..7] } else { hash }
}
