//! Error types for permaweave core.

use thiserror::Error;

/// Errors that can occur in pure tree and codec operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A structurally invalid tree input. Unreachable through
    /// [`crate::transaction_chunks`]; surfaced loudly rather than producing
    /// a wrong root.
    #[error("malformed merkle tree: {0}")]
    MalformedTree(String),

    /// A byte field that should be base64url did not decode.
    #[error("invalid base64url: {0}")]
    InvalidBase64Url(String),
}
