//! Alert banners for success and error messages. Messages must be safe to
//! render and must never include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => "rounded-md border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-800",
        AlertKind::Success => {
            "rounded-md border border-green-300 bg-green-50 px-4 py-3 text-sm text-green-800"
        }
        AlertKind::Info => "rounded-md border border-sky-300 bg-sky-50 px-4 py-3 text-sm text-sky-800",
    };

    view! { <div class=class role="alert">{message}</div> }
}
