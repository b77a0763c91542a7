//! Error types for transaction assembly and submission.

use thiserror::Error;

use permaweave_core::CoreError;
use permaweave_gateway::GatewayError;
use permaweave_wallet::WalletError;

/// Errors that can occur preparing, signing, or committing a transaction.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// `commit` was called before `sign`. Programmer error; no network call
    /// is made.
    #[error("missing signature on transaction")]
    MissingSignature,

    /// Chunking or tree construction failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Key material or signing failure.
    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Gateway failure, surfaced verbatim.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// A response body did not decode as expected.
    #[error("decoding error: {0}")]
    Decode(String),
}

/// Result type for transaction operations.
pub type Result<T> = std::result::Result<T, TransactionError>;
