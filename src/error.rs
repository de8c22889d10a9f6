//! Error types for Tubescout.

use thiserror::Error;

/// Library-level error type for Tubescout operations.
#[derive(Error, Debug)]
pub enum TubescoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No transcript found: {0}")]
    NotFound(String),

    #[error("Failed to fetch transcript: {0}")]
    FetchFailed(String),

    #[error("No transcript content found for video: {0}")]
    EmptyTranscript(String),

    #[error("YouTube API error: {0}")]
    YoutubeApi(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TubescoutError {
    /// Short machine-readable kind, included in HTTP/tool payloads so callers
    /// can distinguish failure classes without string matching.
    pub fn kind(&self) -> &'static str {
        match self {
            TubescoutError::Config(_) => "config",
            TubescoutError::NotFound(_) => "not_found",
            TubescoutError::FetchFailed(_) => "fetch_failed",
            TubescoutError::EmptyTranscript(_) => "empty",
            TubescoutError::YoutubeApi(_) => "youtube_api",
            TubescoutError::ToolNotFound(_) => "tool_not_found",
            TubescoutError::InvalidInput(_) => "invalid_input",
            TubescoutError::Io(_) => "io",
            TubescoutError::Json(_) => "json",
            TubescoutError::TomlParse(_) => "toml",
            TubescoutError::Http(_) => "http",
        }
    }
}

/// Result type alias for Tubescout operations.
pub type Result<T> = std::result::Result<T, TubescoutError>;
