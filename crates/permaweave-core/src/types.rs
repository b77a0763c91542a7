//! Shared domain types: transaction ids, wallet addresses, winston amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::CoreError;
use crate::hash::Sha256Hash;

/// A transaction identifier: base64url(SHA-256(signature)).
pub type TransactionId = String;

/// Winston per AR. The winston is the ledger's base monetary unit.
pub const WINSTON_PER_AR: u128 = 1_000_000_000_000;

/// A wallet address: base64url(SHA-256(raw public modulus)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap an already-derived address string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Derive the address for a base64url public modulus.
    pub fn from_modulus(modulus: &str) -> Result<Self, CoreError> {
        let raw = codec::b64url_decode(modulus)?;
        let digest = Sha256Hash::hash(&raw);
        Ok(Self(digest.to_base64url()))
    }

    /// The address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An integer amount of winston.
///
/// Gateway prices and balances arrive as decimal strings; they parse into
/// this type and never touch floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Winston(pub u128);

impl Winston {
    /// Zero winston.
    pub const ZERO: Self = Self(0);

    /// Whole-AR constructor, mostly for tests and examples.
    pub const fn from_ar(ar: u128) -> Self {
        Self(ar * WINSTON_PER_AR)
    }
}

impl fmt::Display for Winston {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Winston {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u128>().map(Winston)
    }
}
