pub mod config;
pub mod error;
pub mod output;
pub mod summarize;
pub mod transcript;
pub mod youtube;

pub use error::{Error, Result};

use serde::Serialize;

/// A single timed caption entry as returned by the provider
#[derive(Debug, Clone)]
pub struct Fragment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Normalized transcript for one video
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    #[serde(rename = "identifier")]
    pub video_id: String,
    #[serde(rename = "fullText")]
    pub full_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Extract the video ID from a watch URL, a youtu.be short link, or a bare ID.
///
/// No character-set or length validation: anything without a recognized URL
/// marker passes through unchanged, and a bad ID surfaces downstream as a
/// provider failure. Only an empty input is rejected here.
pub fn resolve_video_id(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(Error::InvalidUrlFormat);
    }

    // youtube.com/watch?v=ID — everything after the first '=', up to the next '&'
    if input.contains("watch?v=") {
        let after = input.split_once('=').map(|(_, rest)| rest).unwrap_or(input);
        return Ok(after.split('&').next().unwrap_or(after).to_string());
    }

    // youtu.be/ID — trailing path segment, query suffix stripped
    if input.contains("youtu.be/") {
        let last = input.rsplit('/').next().unwrap_or(input);
        return Ok(last.split('?').next().unwrap_or(last).to_string());
    }

    Ok(input.to_string())
}
