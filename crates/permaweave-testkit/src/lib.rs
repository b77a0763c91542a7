//! # Permaweave Testkit
//!
//! Testing utilities for permaweave.
//!
//! - **Golden vectors**: pinned deep-hash digests and data roots, computed
//!   independently from the reference algorithm definitions, so every
//!   implementation change is checked against fixed expectations.
//! - **Generators**: proptest strategies clustered around chunking
//!   boundaries.
//! - **Fixtures**: a wallet plus in-memory gateway bundle for end-to-end
//!   tests.

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use vectors::{
    data_root_vectors, deep_hash_vectors, verify_all_vectors, DataRootVector, DeepHashVector,
};
