//! Error types for trackwise-policy.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that reject a policy evaluation.
///
/// The policy never guesses at missing data: a descriptor that violates the
/// prober's contract aborts the whole evaluation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A stream descriptor is missing data the policy needs.
    #[error("malformed stream {index}: {reason}")]
    MalformedStream { index: u32, reason: String },

    /// The probe document could not be turned into descriptors.
    #[error(transparent)]
    Probe(#[from] trackwise_probe::Error),
}

impl Error {
    /// Create a malformed stream error.
    pub fn malformed(index: u32, reason: impl Into<String>) -> Self {
        Self::MalformedStream {
            index,
            reason: reason.into(),
        }
    }
}
