//! Error types for gateway operations.

use thiserror::Error;

/// Errors that can occur talking to a gateway node.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Non-success response status, surfaced verbatim. No local retry.
    #[error("bad response code {status}")]
    BadResponse {
        /// The status code the gateway returned.
        status: u16,
    },

    /// A price or balance response that should be a decimal integer was not.
    #[error("invalid numeric response: {0:?}")]
    InvalidNumericResponse(String),

    /// The gateway could not be reached at all; implementations map their
    /// I/O failures here.
    #[error("gateway unreachable: {0}")]
    Unreachable(String),
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
