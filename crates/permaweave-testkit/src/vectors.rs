//! Golden test vectors for deterministic verification.
//!
//! A remote verifier recomputes both the deep hash and the data root
//! independently, so these digests must never drift. The expected values
//! were computed from the reference algorithm definitions, not from this
//! implementation.

use permaweave_core::{deep_hash, transaction_chunks, DeepHashChunk};

/// The canonical small payload used across the test suites.
pub const HELLO_WORLD: &[u8] = b"<h1>Hello World!</h1>";

/// Its base64url encoding.
pub const HELLO_WORLD_B64URL: &str = "PGgxPkhlbGxvIFdvcmxkITwvaDE-";

/// Its data root (the wrapped single-leaf commitment), base64url.
pub const HELLO_WORLD_DATA_ROOT: &str = "-1wLgp936N8myTJT1SyD_sOaKNJADUHo82C6PsI1_ZA";

/// A pinned deep-hash digest.
#[derive(Debug, Clone)]
pub struct DeepHashVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The input chunk tree.
    pub chunk: DeepHashChunk,
    /// Expected 48-byte digest, hex.
    pub expected_hex: &'static str,
}

/// All pinned deep-hash vectors.
pub fn deep_hash_vectors() -> Vec<DeepHashVector> {
    vec![
        DeepHashVector {
            name: "empty blob",
            chunk: DeepHashChunk::Blob(Vec::new()),
            expected_hex: "fbf00cc444f5fea9dc3bedf62a13fba8ae87e7445fc910567a23bec4eb82fadb1143c433069314d8362983dc3c2e4a38",
        },
        DeepHashVector {
            name: "empty list",
            chunk: DeepHashChunk::List(Vec::new()),
            expected_hex: "a69e7d37fdc7f040a9ec16aae84de24fab4a653dac4de0bd247e36bab9fe45d9289c5a04a893c95285812f5cefc9707a",
        },
        DeepHashVector {
            name: "hello world blob",
            chunk: DeepHashChunk::Blob(b"hello world".to_vec()),
            expected_hex: "42b60b0591c3817049a0658511314e57167cf2992b2c4d2013211707ab65dccf4e1a44fb385107290cf6bdb5e45455df",
        },
        DeepHashVector {
            name: "nested list",
            chunk: DeepHashChunk::List(vec![
                DeepHashChunk::List(vec![DeepHashChunk::Blob(b"a".to_vec())]),
                DeepHashChunk::Blob(b"b".to_vec()),
            ]),
            expected_hex: "ebe62c3d798155f7786b20d16258e089c1c34e0c8fcb714f18fedc5cb839cb1870213787ebf7cc7cbcc44f6de565c61c",
        },
    ]
}

/// A pinned data-root commitment.
#[derive(Debug, Clone)]
pub struct DataRootVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The payload, regenerated deterministically.
    pub payload: Vec<u8>,
    /// Expected chunk count after pruning.
    pub expected_chunks: usize,
    /// Expected data root, base64url.
    pub expected_data_root: &'static str,
}

/// Deterministic byte pattern: `payload[i] = (i * mul) % 256`.
pub fn pattern_payload(len: usize, mul: usize) -> Vec<u8> {
    (0..len).map(|i| (i * mul % 256) as u8).collect()
}

/// All pinned data-root vectors.
pub fn data_root_vectors() -> Vec<DataRootVector> {
    vec![
        DataRootVector {
            name: "single chunk",
            payload: HELLO_WORLD.to_vec(),
            expected_chunks: 1,
            expected_data_root: HELLO_WORLD_DATA_ROOT,
        },
        DataRootVector {
            name: "two chunks",
            payload: pattern_payload(300_000, 1),
            expected_chunks: 2,
            expected_data_root: "p4XGpkCo3555G2bsh2fCqMBDIo4rI6r2ihTzbYYYK0w",
        },
        DataRootVector {
            name: "exact chunk multiple, terminal pruned",
            payload: pattern_payload(256 * 1024, 7),
            expected_chunks: 1,
            expected_data_root: "DVHpR8xqb-OHGFdv264bMMcw0vkWYurxeIMwhGQjThQ",
        },
    ]
}

/// Check every pinned vector against the implementation.
///
/// Returns `(name, matches)` per vector; useful for cross-implementation
/// comparison tooling as well as the tests below.
pub fn verify_all_vectors() -> Vec<(&'static str, bool)> {
    let mut results = Vec::new();
    for vector in deep_hash_vectors() {
        let actual = hex::encode(deep_hash(&vector.chunk));
        results.push((vector.name, actual == vector.expected_hex));
    }
    for vector in data_root_vectors() {
        let matches = transaction_chunks(&vector.payload)
            .map(|r| {
                r.data_root.to_base64url() == vector.expected_data_root
                    && r.chunks.len() == vector.expected_chunks
            })
            .unwrap_or(false);
        results.push((vector.name, matches));
    }
    results
}
