//! Labeled text input with an optional inline validation message. Forms
//! render one of these per field so field-level errors from the exchange
//! layer land next to the offending input.

use leptos::prelude::*;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    setter: WriteSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] initial: Option<String>,
    #[prop(optional, into, default = Signal::from(None))] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div class="mb-4">
            <label class="mb-1.5 block text-sm font-medium text-slate-700" for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class="w-full rounded-md border border-slate-300 bg-white px-3 py-2 text-sm text-slate-900 focus:border-slate-500 focus:outline-none focus:ring-1 focus:ring-slate-500"
                class:border-red-400=move || error.get().is_some()
                autocomplete=autocomplete.unwrap_or("off")
                placeholder=placeholder.unwrap_or("")
                value=initial.unwrap_or_default()
                on:input=move |event| setter.set(event_target_value(&event))
            />
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="mt-1 text-sm text-red-700">{message}</p> })
            }}
        </div>
    }
}
