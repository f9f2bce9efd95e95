use crate::models::{Meme, MemeField};

/// Meme template listing endpoint
pub const MEMES_ENDPOINT: &str = "https://api.imgflip.com/get_memes";

pub const DEFAULT_TOP_TEXT: &str = "One does not simply";
pub const DEFAULT_BOTTOM_TEXT: &str = "Walk into Mordor";
pub const DEFAULT_IMAGE_URL: &str = "http://i.imgflip.com/1bij.jpg";

/// Application settings, provided to components via context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the candidate list is fetched from on mount
    pub memes_endpoint: String,
    /// Meme shown before the user edits anything
    pub default_meme: Meme,
}

impl AppConfig {
    /// Input placeholder for a caption field; mirrors the default caption
    pub fn placeholder(&self, field: MemeField) -> &str {
        self.default_meme.caption(field)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            memes_endpoint: MEMES_ENDPOINT.to_string(),
            default_meme: Meme::default(),
        }
    }
}
