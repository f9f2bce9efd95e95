use leptos::prelude::*;

use crate::logging;
use crate::models::{MemeCandidate, MemeState};

/// Collapsible pretty-printed JSON of the fetched template list.
#[component]
pub fn CandidateDump() -> impl IntoView {
    let state = use_context::<MemeState>().expect("MemeState context missing");

    let count = move || state.candidates.with(Vec::len);
    let dump = Memo::new(move |_| state.candidates.with(|c| format_dump(c)));

    view! {
        <details class="candidate-dump">
            <summary>{move || format!("Meme templates ({})", count())}</summary>
            <pre>{move || dump.get()}</pre>
        </details>
    }
}

/// Serialize candidates with two-space indentation
fn format_dump(candidates: &[MemeCandidate]) -> String {
    serde_json::to_string_pretty(candidates).unwrap_or_else(|e| {
        logging::error(&format!("Failed to serialize meme templates: {e}"));
        String::new()
    })
}
