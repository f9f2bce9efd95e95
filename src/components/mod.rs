pub mod candidate_dump;
pub mod header;
pub mod meme_form;
pub mod meme_preview;

pub use candidate_dump::CandidateDump;
pub use header::Header;
pub use meme_form::MemeForm;
pub use meme_preview::MemePreview;
