use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-6 w-6 animate-spin rounded-full border-2 border-slate-300 border-t-slate-800"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
