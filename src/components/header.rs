use leptos::prelude::*;

/// Page banner: logo and title.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <img class="header-logo" src="/public/logo.svg" alt="" />
            <h1>"Meme Generator"</h1>
        </header>
    }
}
