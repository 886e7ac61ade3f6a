//! Error types for CommentPulse

/// Result type alias using CommentPulse's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for CommentPulse operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Classifier construction or execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Remote inference service errors
    #[error("remote model error: {0}")]
    Remote(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON payloads
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Timeout errors
    #[error("operation timed out")]
    Timeout,
}

impl Error {
    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new remote model error
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
