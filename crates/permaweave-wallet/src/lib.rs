//! # Permaweave Wallet
//!
//! Key material handling for permaweave: JWK (RSA) parsing, RSA-PSS
//! (SHA-256) signing, and wallet address derivation.
//!
//! The signing seam is the [`KeyStore`] trait, so key material may live in an
//! external secret store; [`Wallet`] is the local JWK-backed implementation.

pub mod error;
pub mod jwk;
pub mod wallet;

pub use error::WalletError;
pub use jwk::Jwk;
pub use wallet::{KeyStore, Wallet};
