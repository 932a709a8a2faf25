//! Common result and error types for the Loom toolchain.

/// The result type for operations that can only fail because of a bug.
///
/// User mistakes (unknown IP cores, direction mismatches, ...) are reported
/// through each crate's own error type. `Err` here means Loom itself is wrong.
pub type LoomResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug in Loom, not a user input problem.
#[derive(Debug, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
