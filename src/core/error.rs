//! Error types for the core module.

use super::llm::LlmError;

/// Core error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The LLM backing a tip provider failed.
    #[error("tip provider failed: {0}")]
    Provider(#[from] LlmError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
