//! SHA-256 and SHA-384 hashing with strong types.
//!
//! The ledger's chunk tree is built from SHA-256 digests; signing preimages
//! use SHA-384 (see [`crate::deep_hash`]).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384};
use std::fmt;

use crate::codec;

/// Size in bytes of a SHA-256 digest and of every node id in the chunk tree.
pub const HASH_SIZE: usize = 32;

/// A 32-byte SHA-256 hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sha256Hash(pub [u8; HASH_SIZE]);

impl Sha256Hash {
    /// Compute the SHA-256 hash of the given data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Hash the concatenation of the SHA-256 hashes of each part.
    ///
    /// `hash_all([a, b]) = H(H(a) ‖ H(b))` - the composition used for every
    /// node id in the chunk tree.
    pub fn hash_all(parts: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(Self::hash(part).0);
        }
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Convert to unpadded base64url, the ledger's wire encoding.
    pub fn to_base64url(&self) -> String {
        codec::b64url_encode(self.0)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The zero hash (sentinel value, e.g. the data root of an empty payload).
    pub const ZERO: Self = Self([0u8; HASH_SIZE]);
}

impl fmt::Debug for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Sha256Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_SIZE]> for Sha256Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

/// Compute a SHA-384 digest.
pub fn sha384(data: &[u8]) -> [u8; 48] {
    let mut hasher = Sha384::new();
    hasher.update(data);
    hasher.finalize().into()
}
