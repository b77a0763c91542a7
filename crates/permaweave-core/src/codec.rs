//! Byte-level encodings shared across the workspace.
//!
//! Two encodings appear throughout the wire format and the tree hashing:
//! unpadded base64url for every byte field, and 32-byte big-endian "note"
//! integers for byte offsets inside Merkle node ids and proofs.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::error::CoreError;

/// Width of an encoded offset inside node ids and proofs.
pub const NOTE_SIZE: usize = 32;

/// Encode bytes as base64url without padding (`+`/`/` replaced, `=` stripped).
pub fn b64url_encode(data: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode an unpadded base64url string.
pub fn b64url_decode(s: &str) -> Result<Vec<u8>, CoreError> {
    URL_SAFE_NO_PAD
        .decode(s)
        .map_err(|e| CoreError::InvalidBase64Url(e.to_string()))
}

/// Encode an offset as a 32-byte big-endian integer.
pub fn note_bytes(value: u64) -> [u8; NOTE_SIZE] {
    let mut note = [0u8; NOTE_SIZE];
    note[NOTE_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
    note
}
