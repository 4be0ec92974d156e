//! Error types for the form runtime

use thiserror::Error;

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors raised while parsing runtime settings.
///
/// Validation failures are not errors: they come back as
/// [`Submission::Rejected`](crate::Submission::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Payload key is neither `id` nor `label`
    #[error("unknown payload key: {name} (expected 'id' or 'label')")]
    UnknownPayloadKey { name: String },
}
