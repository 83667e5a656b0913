use thiserror::Error;

/// All failures the transcript pipeline can report.
///
/// `CaptionsDisabled` and `NoCaptionTrack` are video-specific and not worth
/// retrying; `Provider` carries the underlying message verbatim for display.
#[derive(Debug, Error)]
pub enum Error {
    #[error("empty input — expected a YouTube URL or video ID")]
    InvalidUrlFormat,

    #[error("captions are disabled for video {0}")]
    CaptionsDisabled(String),

    #[error("no caption track available for video {0}")]
    NoCaptionTrack(String),

    #[error("caption provider error: {0}")]
    Provider(String),
}

impl Error {
    /// Stable failure kind for structured output.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidUrlFormat => "InvalidURLFormat",
            Error::CaptionsDisabled(_) => "CaptionsDisabled",
            Error::NoCaptionTrack(_) => "NoCaptionTrack",
            Error::Provider(_) => "ProviderError",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Provider(e.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Error::Provider(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
