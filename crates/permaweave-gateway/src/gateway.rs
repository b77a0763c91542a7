//! The gateway trait: the request/response surface of a remote node.

use async_trait::async_trait;

use permaweave_core::{Address, Winston};

use crate::error::Result;

/// The remote-node collaborator used during transaction preparation and
/// submission.
///
/// Implementations must be thread-safe (`Send + Sync`). Anchor and price
/// reads are independent and may be issued concurrently. Implementations
/// surface non-success statuses as [`crate::GatewayError::BadResponse`]
/// verbatim and perform no retries; retry policy belongs to callers above
/// this layer.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetch a recent network anchor for use as `last_tx`.
    async fn tx_anchor(&self) -> Result<String>;

    /// Fetch the price in winston for storing `bytes`, optionally toward a
    /// transfer target.
    async fn price(&self, bytes: u64, target: Option<&Address>) -> Result<Winston>;

    /// Submit a signed transaction as wire JSON.
    ///
    /// Returns the gateway's status code on success (200).
    async fn submit(&self, body: &[u8]) -> Result<u16>;

    /// Fetch a transaction's wire JSON by id.
    async fn transaction(&self, id: &str) -> Result<Vec<u8>>;

    /// Fetch a transaction's payload by id, base64url-encoded.
    async fn transaction_data(&self, id: &str) -> Result<String>;

    /// Fetch a transaction's confirmation status: the raw status code and
    /// response body. Unlike every other route, non-success codes are part
    /// of the answer here, not errors.
    async fn transaction_status(&self, id: &str) -> Result<(u16, Vec<u8>)>;

    /// Fetch a wallet balance in winston.
    async fn balance(&self, address: &Address) -> Result<Winston>;

    /// Fetch the id of the wallet's most recent transaction.
    async fn last_tx(&self, address: &Address) -> Result<String>;
}
