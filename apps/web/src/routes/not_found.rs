//! Fallback page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="py-16 text-center">
                <h1 class="text-5xl font-bold text-slate-300">"404"</h1>
                <p class="mt-4 text-slate-600">"That page does not exist."</p>
                <p class="mt-6">
                    <A href="/" {..} class="text-sm underline">
                        "Back to sign in"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}
