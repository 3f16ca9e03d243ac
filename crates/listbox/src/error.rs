//! Error types for listbox.
//!
//! Most rejected operations are not errors: an empty selection, an
//! out-of-range position or a vetoing hook simply turn the call into a no-op.
//! Errors are reserved for the codec and for option loading.

/// Result type alias for list model operations.
pub type Result<T> = std::result::Result<T, ListBoxError>;

/// Errors that can occur in a list model.
#[derive(Debug, thiserror::Error)]
pub enum ListBoxError {
    /// Encoding or decoding the item list failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The options document could not be parsed.
    #[error("Invalid listbox options: {0}")]
    Options(#[from] toml::de::Error),
}

/// Errors produced by a [`Codec`](crate::model::Codec).
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// JSON (de)serialization failed.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// A custom codec reported a failure.
    #[error("Codec error: {0}")]
    Custom(String),
}

impl CodecError {
    /// Create a custom codec error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}
