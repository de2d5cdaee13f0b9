//! Error types for the widget core

/// Result type alias for widget operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the widget core
///
/// Derivations (URLs, heights, availability) are infallible; only the
/// persisted flag store can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Store rejected the operation
    #[error("Store error: {0}")]
    Store(String),
}

impl Error {
    /// Create a store error from a message
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
