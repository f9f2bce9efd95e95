use crate::error::Result;
use crate::logging;
use crate::models::{MemeCandidate, MemeState, MemesEnvelope};

/// Fetch the meme template list.
/// Plain unauthenticated GET; no retry, no timeout.
pub async fn fetch_candidates(endpoint: &str) -> Result<Vec<MemeCandidate>> {
    let response = reqwest::get(endpoint).await?.error_for_status()?;
    let body = response.text().await?;

    MemesEnvelope::parse(&body)?.into_candidates()
}

/// Load candidates into state; failures are logged and leave the list empty
#[allow(clippy::future_not_send)]
pub async fn load_candidates(state: MemeState, endpoint: &str) {
    match fetch_candidates(endpoint).await {
        Ok(candidates) => {
            logging::info(&format!("Loaded {} meme templates", candidates.len()));
            state.set_candidates(candidates);
        }
        Err(e) => {
            logging::error(&format!("Failed to load meme templates: {e}"));
        }
    }
}
