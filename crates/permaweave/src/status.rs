//! Transaction confirmation status.

use serde::{Deserialize, Serialize};

/// Block data accompanying an accepted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusData {
    pub block_height: u64,
    pub block_indep_hash: String,
    pub number_of_confirmations: u64,
}

/// Confirmation status of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Included in a block.
    Accepted(StatusData),
    /// Known to the network, not yet included (202).
    Pending,
    /// Unknown to the network (404).
    NotFound,
    /// Dropped (410).
    Failed,
    /// Any other answer.
    Invalid,
}

impl TransactionStatus {
    /// Map a non-success status code to a status.
    pub fn from_code(status: u16) -> Self {
        match status {
            202 => TransactionStatus::Pending,
            404 => TransactionStatus::NotFound,
            410 => TransactionStatus::Failed,
            _ => TransactionStatus::Invalid,
        }
    }
}
