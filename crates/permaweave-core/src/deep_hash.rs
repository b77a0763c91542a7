//! Deep hash: the recursive canonicalization used for signing preimages.
//!
//! A [`DeepHashChunk`] tree of nested byte blobs folds, order-sensitively,
//! into a single 48-byte SHA-384 digest:
//!
//! - `Blob(b)`  → `SHA384( SHA384("blob" ‖ ascii(len(b))) ‖ SHA384(b) )`
//! - `List(xs)` → fold of `acc := SHA384(acc ‖ hash(item))` seeded with
//!   `SHA384("list" ‖ ascii(len(xs)))`
//!
//! The tag strings, the decimal-ASCII length encoding, and the SHA-384
//! choice are fixed by the remote verifier, which recomputes this digest
//! independently.
//!
//! The tree is transient: it exists for exactly one hash computation and is
//! independent of the chunk Merkle tree.

use crate::hash::sha384;

/// Size in bytes of a deep-hash digest.
pub const DEEP_HASH_SIZE: usize = 48;

/// A node in the transient canonicalization tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepHashChunk {
    /// A byte blob.
    Blob(Vec<u8>),
    /// An ordered list of nested chunks.
    List(Vec<DeepHashChunk>),
}

impl From<Vec<u8>> for DeepHashChunk {
    fn from(data: Vec<u8>) -> Self {
        DeepHashChunk::Blob(data)
    }
}

impl From<&[u8]> for DeepHashChunk {
    fn from(data: &[u8]) -> Self {
        DeepHashChunk::Blob(data.to_vec())
    }
}

impl From<Vec<DeepHashChunk>> for DeepHashChunk {
    fn from(items: Vec<DeepHashChunk>) -> Self {
        DeepHashChunk::List(items)
    }
}

/// Compute the 48-byte deep-hash digest of a chunk tree.
pub fn deep_hash(chunk: &DeepHashChunk) -> [u8; DEEP_HASH_SIZE] {
    match chunk {
        DeepHashChunk::Blob(data) => {
            let mut preimage = Vec::with_capacity(2 * DEEP_HASH_SIZE);
            preimage.extend_from_slice(&sha384(&tag(b"blob", data.len())));
            preimage.extend_from_slice(&sha384(data));
            sha384(&preimage)
        }
        DeepHashChunk::List(items) => {
            let mut acc = sha384(&tag(b"list", items.len()));
            for item in items {
                let mut pair = Vec::with_capacity(2 * DEEP_HASH_SIZE);
                pair.extend_from_slice(&acc);
                pair.extend_from_slice(&deep_hash(item));
                acc = sha384(&pair);
            }
            acc
        }
    }
}

fn tag(kind: &[u8], len: usize) -> Vec<u8> {
    let mut tag = kind.to_vec();
    tag.extend_from_slice(len.to_string().as_bytes());
    tag
}
