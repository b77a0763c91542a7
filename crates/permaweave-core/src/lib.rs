//! # Permaweave Core
//!
//! Pure primitives for preparing records for a permanent, content-addressed
//! ledger: payload chunking, Merkle commitments with per-chunk inclusion
//! proofs, and the recursive "deep hash" canonicalization that produces
//! signing preimages.
//!
//! This crate contains no I/O, no key material, no networking. It is pure
//! computation over byte slices and cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`Chunk`] - A bounded-size slice of a payload with its content hash
//! - [`MerkleNode`] - Immutable leaf/branch value tree committing to a payload
//! - [`TransactionChunks`] - The aggregate of data root, chunks, and proofs
//! - [`DeepHashChunk`] - Nested blob/list structure fed to [`deep_hash`]
//!
//! ## Commitments
//!
//! [`transaction_chunks`] turns raw bytes into a `data_root` plus one
//! inclusion proof per chunk. [`deep_hash`] canonicalizes a transaction's
//! field list into the 48-byte digest that gets signed.

pub mod chunk;
pub mod codec;
pub mod deep_hash;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod types;

pub use chunk::{chunk_data, Chunk, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
pub use codec::{b64url_decode, b64url_encode, note_bytes, NOTE_SIZE};
pub use deep_hash::{deep_hash, DeepHashChunk, DEEP_HASH_SIZE};
pub use error::CoreError;
pub use hash::{sha384, Sha256Hash, HASH_SIZE};
pub use merkle::{
    build_layers, generate_leaves, resolve_proofs, transaction_chunks, BranchNode, LeafNode,
    MerkleNode, Proof, TransactionChunks,
};
pub use types::{Address, TransactionId, Winston, WINSTON_PER_AR};
