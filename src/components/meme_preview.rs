use leptos::prelude::*;

use crate::models::{MemeField, MemeState};

/// Meme image with both captions overlaid.
#[component]
pub fn MemePreview() -> impl IntoView {
    let state = use_context::<MemeState>().expect("MemeState context missing");

    let caption = move |field: MemeField| {
        view! {
            <span class=field.css_class()>
                {move || state.meme.with(|meme| meme.caption(field).to_string())}
            </span>
        }
    };

    view! {
        <div class="meme">
            <img src=move || state.meme.with(|meme| meme.image_url.clone()) alt="" />
            {caption(MemeField::TopText)}
            {caption(MemeField::BottomText)}
        </div>
    }
}
