pub mod candidate;
pub mod meme;
pub mod meme_state;

pub use candidate::{pick_candidate, pick_index, MemeCandidate, MemesData, MemesEnvelope};
pub use meme::{Meme, MemeField};
pub use meme_state::MemeState;
