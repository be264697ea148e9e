//! Error taxonomy for the classification pipeline.

use policylens_core::PolicyError;
use thiserror::Error;

/// Failure modes of a classification attempt.
///
/// None of these are recovered internally: no retries, no silent defaulting
/// of required fields. Every failure surfaces as a distinct kind so the
/// caller can decide whether to re-prompt, abort, or retry.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Raw input did not parse as structured data. Raised before any
    /// network interaction.
    #[error(transparent)]
    MalformedInput(#[from] PolicyError),

    /// Transport or HTTP-level failure reaching the reasoning service.
    /// Retryable by the caller.
    #[error("reasoning service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The service answered without invoking the classification function.
    /// Retrying the same request is unlikely to help.
    #[error("reasoning service refused to classify (no function invocation in reply)")]
    ServiceRefusal,

    /// A function invocation was present but its arguments were not valid
    /// JSON or omitted a required field.
    #[error("response violated the declared schema: {0}")]
    SchemaViolation(String),

    /// `classification` was present but not exactly `"Weak"` or `"Strong"`.
    /// The declared enum is a request hint, not an enforced guarantee, so
    /// the value is re-validated after decoding.
    #[error("invalid classification value {0:?} (expected \"Weak\" or \"Strong\")")]
    InvalidClassificationValue(String),
}

impl ClassifyError {
    pub(crate) fn unavailable(err: reqwest::Error) -> Self {
        Self::ServiceUnavailable(err.to_string())
    }
}
