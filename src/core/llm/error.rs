//! LLM provider error types.

/// Errors raised while talking to an LLM provider.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// API key not configured.
    #[error("API key not configured")]
    ApiKeyMissing,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The provider reported an error mid-stream.
    #[error("stream error: {0}")]
    Stream(String),

    /// The stream finished without producing any text.
    #[error("empty completion")]
    Empty,
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, LlmError>;
