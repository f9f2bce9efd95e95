use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::load_candidates;
use crate::components::{CandidateDump, Header, MemeForm, MemePreview};
use crate::config::AppConfig;
use crate::models::MemeState;

/// Root application component that provides global context and lays out the page.
#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    // Initialize meme state
    let state = MemeState::new(config.default_meme.clone());

    // Fetch the template list on mount - run only once per component instance
    let fetch_setup = std::cell::Cell::new(false);
    let endpoint = config.memes_endpoint.clone();
    Effect::new(move |_| {
        if !fetch_setup.get() {
            fetch_setup.set(true);
            let endpoint = endpoint.clone();
            spawn_local(async move {
                load_candidates(state, &endpoint).await;
            });
        }
    });

    // Provide context to all child components
    provide_context(config);
    provide_context(state);

    view! {
        <Header />
        <main>
            <MemeForm />
            <MemePreview />
        </main>
        <CandidateDump />
    }
}
