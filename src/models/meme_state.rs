use leptos::prelude::*;

use crate::models::{pick_candidate, Meme, MemeCandidate, MemeField};

/// The meme being edited plus the template list it can be re-imaged from.
/// Signals are `Copy`; `App` provides one instance through context.
#[derive(Clone, Copy)]
pub struct MemeState {
    /// The meme being edited
    pub meme: RwSignal<Meme>,
    /// Templates fetched from the listing endpoint (empty until loaded)
    pub candidates: RwSignal<Vec<MemeCandidate>>,
}

impl MemeState {
    /// Create a new state seeded with `initial` and no candidates
    pub fn new(initial: Meme) -> Self {
        Self {
            meme: RwSignal::new(initial),
            candidates: RwSignal::new(Vec::new()),
        }
    }

    /// Update one caption from form input
    pub fn handle_change(&self, field: MemeField, value: impl Into<String>) {
        let value = value.into();
        self.meme.update(|meme| meme.set_caption(field, value));
    }

    /// Swap the image for the candidate selected by `roll` (a sample in `[0, 1)`).
    /// Returns the new image URL, or `None` if no candidates are loaded.
    pub fn handle_get_new_meme(&self, roll: f64) -> Option<String> {
        let url = self
            .candidates
            .with_untracked(|candidates| pick_candidate(candidates, roll).map(|c| c.url.clone()))?;

        self.meme.update(|meme| meme.set_image_url(url.clone()));
        Some(url)
    }

    /// Store the fetched candidates (replacing existing)
    pub fn set_candidates(&self, candidates: Vec<MemeCandidate>) {
        self.candidates.set(candidates);
    }

    /// Check if "get new meme" has anything to pick from
    pub fn has_candidates(&self) -> bool {
        self.candidates.with(|c| !c.is_empty())
    }
}

impl Default for MemeState {
    fn default() -> Self {
        Self::new(Meme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab_state() -> MemeState {
        let state = MemeState::default();
        state.set_candidates(vec![
            MemeCandidate::from_url("a"),
            MemeCandidate::from_url("b"),
        ]);
        state
    }

    #[test]
    fn test_initial_state_before_fetch() {
        let state = MemeState::default();

        assert_eq!(state.meme.get_untracked(), Meme::default());
        assert!(!state.has_candidates());
    }

    #[test]
    fn test_handle_change_updates_single_field() {
        let state = MemeState::default();
        state.handle_change(MemeField::TopText, "Brace yourselves");

        let meme = state.meme.get_untracked();
        assert_eq!(meme.top_text, "Brace yourselves");
        assert_eq!(meme.bottom_text, "Walk into Mordor");
        assert_eq!(meme.image_url, "http://i.imgflip.com/1bij.jpg");

        state.handle_change(MemeField::BottomText, "winter is coming");
        let meme = state.meme.get_untracked();
        assert_eq!(meme.top_text, "Brace yourselves");
        assert_eq!(meme.bottom_text, "winter is coming");
    }

    #[test]
    fn test_get_new_meme_with_forced_index() {
        let state = ab_state();
        state.handle_change(MemeField::TopText, "custom");

        assert_eq!(state.handle_get_new_meme(0.5).as_deref(), Some("b"));

        let meme = state.meme.get_untracked();
        assert_eq!(meme.image_url, "b");
        assert_eq!(meme.top_text, "custom");
        assert_eq!(meme.bottom_text, "Walk into Mordor");
    }

    #[test]
    fn test_get_new_meme_without_candidates_is_noop() {
        let state = MemeState::default();

        assert_eq!(state.handle_get_new_meme(0.3), None);
        assert_eq!(state.meme.get_untracked(), Meme::default());
    }

    #[test]
    fn test_repeated_picks_stay_within_candidates() {
        let state = ab_state();

        for step in 0..100 {
            let roll = f64::from(step) / 100.0;
            let url = state.handle_get_new_meme(roll).unwrap();
            assert!(url == "a" || url == "b");
            assert_eq!(state.meme.get_untracked().image_url, url);
        }
    }
}
