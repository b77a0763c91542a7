//! JSON Web Key (RFC 7517) model for RSA wallet keyfiles.
//!
//! Ledger wallets are distributed as JWK JSON files carrying the RSA
//! components base64url-encoded. Only `kty = "RSA"` is accepted; every
//! parse or decode failure maps to [`WalletError::MalformedKey`].

use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, RsaPrivateKey};
use serde::{Deserialize, Serialize};

use permaweave_core::codec;

use crate::error::WalletError;

/// An RSA JSON Web Key.
///
/// `dp`/`dq`/`qi` are accepted for compatibility with common keyfiles but
/// recomputed by the key implementation rather than trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type; must be `"RSA"`.
    pub kty: String,
    /// Public modulus, base64url.
    pub n: String,
    /// Public exponent, base64url.
    pub e: String,
    /// Private exponent, base64url.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
    /// First prime factor, base64url.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    /// Second prime factor, base64url.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qi: Option<String>,
}

impl Jwk {
    /// Parse a JWK from its JSON encoding.
    pub fn from_json(data: &[u8]) -> Result<Self, WalletError> {
        serde_json::from_slice(data).map_err(|e| WalletError::MalformedKey(e.to_string()))
    }

    /// Export a private key as a JWK.
    pub fn from_private_key(key: &RsaPrivateKey) -> Self {
        let primes = key.primes();
        Self {
            kty: "RSA".to_string(),
            n: encode_uint(key.n()),
            e: encode_uint(key.e()),
            d: Some(encode_uint(key.d())),
            p: primes.first().map(encode_uint),
            q: primes.get(1).map(encode_uint),
            dp: None,
            dq: None,
            qi: None,
        }
    }

    /// Build the RSA private key from this JWK's components.
    pub fn private_key(&self) -> Result<RsaPrivateKey, WalletError> {
        if self.kty != "RSA" {
            return Err(WalletError::MalformedKey(format!(
                "unsupported key type: {}",
                self.kty
            )));
        }

        let n = decode_uint(&self.n, "n")?;
        let e = decode_uint(&self.e, "e")?;
        let d = decode_uint(required(&self.d, "d")?, "d")?;
        let p = decode_uint(required(&self.p, "p")?, "p")?;
        let q = decode_uint(required(&self.q, "q")?, "q")?;

        let mut key = RsaPrivateKey::from_components(n, e, d, vec![p, q])
            .map_err(|e| WalletError::MalformedKey(e.to_string()))?;
        key.precompute()
            .map_err(|e| WalletError::MalformedKey(e.to_string()))?;
        key.validate()
            .map_err(|e| WalletError::MalformedKey(e.to_string()))?;
        Ok(key)
    }
}

fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str, WalletError> {
    field
        .as_deref()
        .ok_or_else(|| WalletError::MalformedKey(format!("missing component: {name}")))
}

fn decode_uint(value: &str, name: &str) -> Result<BigUint, WalletError> {
    let bytes = codec::b64url_decode(value)
        .map_err(|e| WalletError::MalformedKey(format!("component {name}: {e}")))?;
    Ok(BigUint::from_bytes_be(&bytes))
}

fn encode_uint(value: &BigUint) -> String {
    codec::b64url_encode(value.to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(
            Jwk::from_json(b"not json"),
            Err(WalletError::MalformedKey(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_key_type() {
        let jwk = Jwk::from_json(br#"{"kty":"EC","n":"AQAB","e":"AQAB"}"#).unwrap();
        assert!(matches!(
            jwk.private_key(),
            Err(WalletError::MalformedKey(_))
        ));
    }

    #[test]
    fn test_rejects_missing_private_component() {
        let jwk = Jwk::from_json(br#"{"kty":"RSA","n":"AQAB","e":"AQAB"}"#).unwrap();
        assert!(matches!(
            jwk.private_key(),
            Err(WalletError::MalformedKey(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_base64url_component() {
        let jwk = Jwk::from_json(
            br#"{"kty":"RSA","n":"!!!","e":"AQAB","d":"AQAB","p":"AQAB","q":"AQAB"}"#,
        )
        .unwrap();
        assert!(matches!(
            jwk.private_key(),
            Err(WalletError::MalformedKey(_))
        ));
    }

    #[test]
    fn test_rejects_inconsistent_components() {
        // Structurally complete but not a valid RSA key.
        let jwk = Jwk::from_json(
            br#"{"kty":"RSA","n":"BQ","e":"Aw","d":"Aw","p":"Ag","q":"Ag"}"#,
        )
        .unwrap();
        assert!(matches!(
            jwk.private_key(),
            Err(WalletError::MalformedKey(_))
        ));
    }
}
