//! # Permaweave
//!
//! Prepare records for submission to a permanent, content-addressed ledger.
//!
//! A data-bearing [`Transaction`] is chunked into a Merkle commitment
//! (`data_root` plus one inclusion proof per chunk), canonicalized with the
//! deep-hash algorithm, and signed with RSA-PSS; the hash of the signature
//! becomes its immutable id. Value transfers follow the same signing path
//! without a payload.
//!
//! ```no_run
//! use permaweave::{Transaction, Wallet};
//! use permaweave_gateway::MemoryGateway;
//!
//! # async fn example() -> Result<(), permaweave::TransactionError> {
//! let wallet = Wallet::generate(2048)?;
//! let gateway = MemoryGateway::new();
//!
//! let mut tx = Transaction::with_data("<h1>Hello World!</h1>".as_bytes().to_vec());
//! tx.add_tag("Content-Type", "text/html");
//!
//! let signed = tx.sign(&wallet, &gateway).await?;
//! signed.commit(&gateway).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The network and key material live behind the
//! [`Gateway`](permaweave_gateway::Gateway) and
//! [`KeyStore`](permaweave_wallet::KeyStore) traits; this crate performs no
//! I/O of its own.

pub mod error;
pub mod status;
pub mod tag;
pub mod transaction;

pub use error::TransactionError;
pub use status::{StatusData, TransactionStatus};
pub use tag::Tag;
pub use transaction::{Format, Transaction};

pub use permaweave_core::{
    deep_hash, transaction_chunks, Address, DeepHashChunk, Sha256Hash, TransactionChunks,
    TransactionId, Winston,
};
pub use permaweave_gateway::{Gateway, GatewayConfig, GatewayError};
pub use permaweave_wallet::{KeyStore, Wallet, WalletError};
