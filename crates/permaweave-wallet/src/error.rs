//! Error types for wallet operations.

use thiserror::Error;

/// Errors that can occur while handling key material.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Unparsable or inconsistent key material. Fatal; retrying cannot help.
    #[error("malformed key: {0}")]
    MalformedKey(String),

    /// Key generation failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Producing a signature failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A signature did not verify against this wallet's public key.
    #[error("invalid signature")]
    InvalidSignature,
}
