//! Route model: the paths and methods a gateway node serves.
//!
//! Pure request description, no I/O. Out-of-tree `Gateway` implementations
//! build their requests from this table.

use permaweave_core::Address;

/// HTTP method for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A gateway endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A recent network anchor for use as `last_tx`.
    TxAnchor,
    /// Full transaction lookup by id.
    Transaction { id: String },
    /// Transaction payload lookup by id (base64url).
    TransactionData { id: String },
    /// Confirmation status lookup by id.
    TransactionStatus { id: String },
    /// The id of the wallet's most recent transaction.
    LastTransactionId { address: Address },
    /// Wallet balance in winston.
    WalletBalance { address: Address },
    /// Price in winston for storing `bytes`, optionally toward a target.
    Price { bytes: u64, target: Option<Address> },
    /// Submit a signed transaction (JSON body).
    Commit,
}

impl Route {
    /// The path component of the route, relative to the gateway base URL.
    pub fn path(&self) -> String {
        match self {
            Route::TxAnchor => "/tx_anchor".to_string(),
            Route::Transaction { id } => format!("/tx/{id}"),
            Route::TransactionData { id } => format!("/tx/{id}/data"),
            Route::TransactionStatus { id } => format!("/tx/{id}/status"),
            Route::LastTransactionId { address } => format!("/wallet/{address}/last_tx"),
            Route::WalletBalance { address } => format!("/wallet/{address}/balance"),
            Route::Price { bytes, target } => match target {
                Some(target) => format!("/price/{bytes}/{target}"),
                None => format!("/price/{bytes}"),
            },
            Route::Commit => "/tx".to_string(),
        }
    }

    /// The HTTP method of the route.
    pub fn method(&self) -> Method {
        match self {
            Route::Commit => Method::Post,
            _ => Method::Get,
        }
    }
}
