//! Error types for feed entries

/// Result type for feed entry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or querying an entry context
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entry node cannot be used (detached, or not an element)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document matched none of the known feed vocabularies
    #[error("Feed type detection failed: {0}")]
    FormatDetection(String),

    /// A feed type tag that does not name a known format
    #[error("Unknown feed type: {0}")]
    UnknownFeedType(String),

    /// Failure reported by the XML engine, passed through unchanged
    #[error(transparent)]
    Engine(#[from] feed_engine_traits::Error),
}

impl Error {
    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
