//! Proptest generators for property-based testing.

use proptest::prelude::*;

use permaweave_core::{MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};

/// Payload lengths clustered around the chunking boundaries, where the
/// interesting splits happen.
pub fn boundary_len() -> impl Strategy<Value = usize> {
    prop_oneof![
        // Small payloads, single chunk.
        0usize..MIN_CHUNK_SIZE,
        // Just below and above the maximum.
        (MAX_CHUNK_SIZE - 8)..(MAX_CHUNK_SIZE + 8),
        // The short-tail window that triggers the half split.
        (MAX_CHUNK_SIZE + 1)..(MAX_CHUNK_SIZE + MIN_CHUNK_SIZE),
        // Around exact multiples of the maximum.
        (2 * MAX_CHUNK_SIZE - 8)..(2 * MAX_CHUNK_SIZE + 8),
        // Anything else in a moderate range.
        0usize..(3 * MAX_CHUNK_SIZE),
    ]
}

/// A payload of the given length with pseudo-random content derived from a
/// seed, cheap enough for property tests over megabyte sizes.
pub fn seeded_payload() -> impl Strategy<Value = Vec<u8>> {
    (boundary_len(), any::<u8>()).prop_map(|(len, seed)| {
        (0..len)
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
            .collect()
    })
}

/// A printable tag name or value.
pub fn tag_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _/.-]{1,64}".prop_map(String::from)
}

/// A winston amount.
pub fn winston() -> impl Strategy<Value = permaweave_core::Winston> {
    (0u128..u128::from(u64::MAX)).prop_map(permaweave_core::Winston)
}
