use leptos::prelude::*;

use crate::config::AppConfig;
use crate::logging;
use crate::models::{MemeField, MemeState};

/// Caption inputs plus the "new image" button.
#[component]
pub fn MemeForm() -> impl IntoView {
    let state = use_context::<MemeState>().expect("MemeState context missing");

    let on_get_new_meme = move |_| {
        if state.handle_get_new_meme(js_sys::Math::random()).is_none() {
            logging::warn("No meme templates loaded yet");
        }
    };

    view! {
        <div class="form">
            {MemeField::ALL
                .into_iter()
                .map(|field| view! { <CaptionInput field=field /> })
                .collect_view()}
            <button
                on:click=on_get_new_meme
                prop:disabled=move || !state.has_candidates()
            >
                "Get a new meme image 🖼"
            </button>
        </div>
    }
}

/// Labelled text input bound to one caption field.
#[component]
fn CaptionInput(field: MemeField) -> impl IntoView {
    let state = use_context::<MemeState>().expect("MemeState context missing");
    let config = use_context::<AppConfig>().expect("AppConfig context missing");
    let placeholder = config.placeholder(field).to_string();

    let on_input = move |ev: leptos::ev::Event| {
        state.handle_change(field, event_target_value(&ev));
    };

    view! {
        <label>
            {field.label()}
            <input
                type="text"
                name=field.input_name()
                placeholder=placeholder
                prop:value=move || state.meme.with(|meme| meme.caption(field).to_string())
                on:input=on_input
            />
        </label>
    }
}
