use thiserror::Error;

/// Result type alias for meme template loading
pub type Result<T> = std::result::Result<T, MemeError>;

/// Errors that can occur while loading meme templates
#[derive(Error, Debug)]
pub enum MemeError {
    /// Request failed or returned a non-success status
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Body is not the expected `{ data: { memes: [...] } }` envelope
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Endpoint answered with `success: false`
    #[error("Meme listing reported failure")]
    Rejected,
}
