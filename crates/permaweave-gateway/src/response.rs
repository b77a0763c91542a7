//! Response decoding helpers for gateway implementations.
//!
//! The pure half of a gateway client: status checking and numeric body
//! parsing, shared by every implementation of the [`crate::Gateway`] trait.

use permaweave_core::Winston;

use crate::error::{GatewayError, Result};

/// Require a successful status code, surfacing anything else verbatim.
pub fn ensure_success(status: u16) -> Result<()> {
    if status == 200 {
        Ok(())
    } else {
        Err(GatewayError::BadResponse { status })
    }
}

/// Parse a price or balance body: a decimal winston integer.
pub fn parse_winston(body: &[u8]) -> Result<Winston> {
    let text = std::str::from_utf8(body)
        .map_err(|_| GatewayError::InvalidNumericResponse(String::from_utf8_lossy(body).into()))?;
    text.parse()
        .map_err(|_| GatewayError::InvalidNumericResponse(text.to_string()))
}
