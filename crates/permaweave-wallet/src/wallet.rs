//! Wallets and the signing seam.
//!
//! A wallet is, to the rest of the system, nothing more than a base64url
//! public modulus and a way to sign bytes: the [`KeyStore`] trait. The
//! bundled [`Wallet`] implementation holds a local JWK-derived RSA key and
//! signs with RSA-PSS over SHA-256 (MGF1, salt length = digest length), the
//! scheme the ledger's verifiers expect.

use rsa::pss::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{RandomizedSigner, SignatureEncoding, Verifier};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use sha2::Sha256;
use std::fmt;

use permaweave_core::{codec, Address};

use crate::error::WalletError;
use crate::jwk::Jwk;

/// The signing seam: a public modulus plus a signature over arbitrary bytes.
///
/// Implementations must be thread-safe (`Send + Sync`). Key material may be
/// held locally ([`Wallet`]) or in an external secret store.
pub trait KeyStore: Send + Sync {
    /// The base64url public modulus, exactly as the keyfile stores it.
    fn owner_modulus(&self) -> &str;

    /// Sign a message with RSA-PSS (SHA-256, salt length = digest length).
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, WalletError>;
}

/// A wallet backed by a locally held RSA private key.
pub struct Wallet {
    key: RsaPrivateKey,
    owner: String,
    address: Address,
}

impl Wallet {
    /// Load a wallet from a parsed JWK.
    pub fn from_jwk(jwk: &Jwk) -> Result<Self, WalletError> {
        let key = jwk.private_key()?;
        Self::from_parts(key, jwk.n.clone())
    }

    /// Load a wallet from JWK keyfile bytes.
    pub fn from_jwk_json(data: &[u8]) -> Result<Self, WalletError> {
        Self::from_jwk(&Jwk::from_json(data)?)
    }

    /// Generate a fresh wallet with a key of the given size.
    ///
    /// Intended for tests and local tooling; real wallets arrive as JWK
    /// keyfiles.
    pub fn generate(bits: usize) -> Result<Self, WalletError> {
        let mut rng = rand::thread_rng();
        let key = RsaPrivateKey::new(&mut rng, bits)
            .map_err(|e| WalletError::KeyGeneration(e.to_string()))?;
        let owner = codec::b64url_encode(key.n().to_bytes_be());
        Self::from_parts(key, owner)
    }

    fn from_parts(key: RsaPrivateKey, owner: String) -> Result<Self, WalletError> {
        let address =
            Address::from_modulus(&owner).map_err(|e| WalletError::MalformedKey(e.to_string()))?;
        Ok(Self { key, owner, address })
    }

    /// The wallet address: base64url(SHA-256(raw modulus)).
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Export the private key as a JWK.
    pub fn to_jwk(&self) -> Jwk {
        Jwk::from_private_key(&self.key)
    }

    /// Verify an RSA-PSS signature against this wallet's public key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), WalletError> {
        let verifying_key = VerifyingKey::<Sha256>::new(self.key.to_public_key());
        let signature =
            Signature::try_from(signature).map_err(|_| WalletError::InvalidSignature)?;
        verifying_key
            .verify(message, &signature)
            .map_err(|_| WalletError::InvalidSignature)
    }
}

impl KeyStore for Wallet {
    fn owner_modulus(&self) -> &str {
        &self.owner
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, WalletError> {
        let signing_key = SigningKey::<Sha256>::new(self.key.clone());
        let mut rng = rand::thread_rng();
        let signature = signing_key
            .try_sign_with_rng(&mut rng, message)
            .map_err(|e| WalletError::Signing(e.to_string()))?;
        Ok(signature.to_vec())
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wallet({})", self.address)
    }
}
