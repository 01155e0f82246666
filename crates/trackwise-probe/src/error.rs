//! Error types for trackwise-probe.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning prober output into stream descriptors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field the prober always emits was absent.
    #[error("stream {index}: missing required field `{field}`")]
    MissingField { index: u32, field: &'static str },

    /// A field was present but could not be interpreted.
    #[error("stream {index}: invalid `{field}` value: {value}")]
    InvalidField {
        index: u32,
        field: &'static str,
        value: String,
    },

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing field error.
    pub fn missing_field(index: u32, field: &'static str) -> Self {
        Self::MissingField { index, field }
    }

    /// Create an invalid field error.
    pub fn invalid_field(index: u32, field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            index,
            field,
            value: value.into(),
        }
    }
}
