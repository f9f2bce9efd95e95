use serde::{Deserialize, Serialize};

use crate::error::{MemeError, Result};

/// One meme template from the remote listing.
/// Only `url` is required; the other imgflip fields are kept for the dump view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemeCandidate {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captions: Option<u64>,
}

impl MemeCandidate {
    /// Candidate carrying just an image URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            id: None,
            name: None,
            width: None,
            height: None,
            box_count: None,
            captions: None,
        }
    }
}

/// Response body of the meme listing endpoint:
/// `{ "success": true, "data": { "memes": [...] } }`
#[derive(Debug, Deserialize)]
pub struct MemesEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: MemesData,
}

#[derive(Debug, Deserialize)]
pub struct MemesData {
    pub memes: Vec<MemeCandidate>,
}

impl MemesEnvelope {
    /// Parse a raw response body
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Unwrap the candidate list, refusing envelopes flagged as unsuccessful
    pub fn into_candidates(self) -> Result<Vec<MemeCandidate>> {
        if self.success == Some(false) {
            return Err(MemeError::Rejected);
        }
        Ok(self.data.memes)
    }
}

/// Map a uniform sample in `[0, 1)` onto an index of a list of `len` items.
///
/// Returns `None` for an empty list. Out-of-range or non-finite samples are
/// clamped so the result is always a valid index.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn pick_index(len: usize, roll: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let roll = if roll.is_finite() {
        roll.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let index = (roll * len as f64).floor() as usize;

    Some(index.min(len - 1))
}

/// Pick the candidate selected by `roll`
pub fn pick_candidate(candidates: &[MemeCandidate], roll: f64) -> Option<&MemeCandidate> {
    pick_index(candidates.len(), roll).and_then(|i| candidates.get(i))
}
