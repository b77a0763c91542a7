//! Payload chunking.
//!
//! A payload is split into chunks of at most [`MAX_CHUNK_SIZE`] bytes. Every
//! non-terminal chunk is at least [`MIN_CHUNK_SIZE`] bytes: when taking a full
//! chunk would strand a final remainder shorter than the minimum, the current
//! remainder is split in half instead.

use crate::hash::Sha256Hash;

/// Maximum chunk size: 256 KiB.
pub const MAX_CHUNK_SIZE: usize = 256 * 1024;

/// Minimum size of every non-terminal chunk: 32 KiB.
pub const MIN_CHUNK_SIZE: usize = 32 * 1024;

/// A half-open byte range of the payload and the hash of that slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// SHA-256 of the payload slice.
    pub data_hash: Sha256Hash,
    /// Inclusive lower bound of the slice.
    pub min_byte_range: usize,
    /// Exclusive upper bound of the slice.
    pub max_byte_range: usize,
}

impl Chunk {
    /// Length of the slice in bytes.
    pub fn len(&self) -> usize {
        self.max_byte_range - self.min_byte_range
    }

    /// Whether this is a zero-length (terminal) chunk.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split a payload into ordered chunks covering `[0, len)` with no gaps or
/// overlaps.
///
/// An empty payload yields a single zero-length terminal chunk; callers
/// assembling transactions special-case that into an empty aggregate (see
/// [`crate::transaction_chunks`]).
pub fn chunk_data(data: &[u8]) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(data.len() / MAX_CHUNK_SIZE + 1);
    let mut cursor = 0;
    let mut rest = data;

    while rest.len() >= MAX_CHUNK_SIZE {
        let mut chunk_size = MAX_CHUNK_SIZE;

        // A full chunk here would leave a tail in (0, MIN); split the current
        // remainder evenly instead so both final chunks stay above MIN.
        let next_chunk_size = rest.len() - MAX_CHUNK_SIZE;
        if next_chunk_size > 0 && next_chunk_size < MIN_CHUNK_SIZE {
            chunk_size = rest.len().div_ceil(2);
        }

        let (slice, tail) = rest.split_at(chunk_size);
        chunks.push(Chunk {
            data_hash: Sha256Hash::hash(slice),
            min_byte_range: cursor,
            max_byte_range: cursor + slice.len(),
        });
        cursor += slice.len();
        rest = tail;
    }

    chunks.push(Chunk {
        data_hash: Sha256Hash::hash(rest),
        min_byte_range: cursor,
        max_byte_range: cursor + rest.len(),
    });
    chunks
}
