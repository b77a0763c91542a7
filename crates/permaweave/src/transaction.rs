//! Transaction assembly, signing, and submission.
//!
//! A transaction is immutable once signed: `sign` returns a new value and
//! leaves the unsigned original untouched, so an edited copy can never
//! masquerade as canonicalized. The signing preimage is the deep hash of the
//! fixed field list `[format, owner, target, quantity, reward, last_tx,
//! tags, data_size, data_root]`.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use permaweave_core::{
    b64url_decode, b64url_encode, deep_hash, transaction_chunks, Address, DeepHashChunk,
    Sha256Hash, TransactionChunks, TransactionId,
};
use permaweave_gateway::Gateway;
use permaweave_wallet::KeyStore;

use crate::error::{Result, TransactionError};
use crate::status::TransactionStatus;
use crate::tag::Tag;

/// Transaction format version. Chunked payloads are a v2 feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Format {
    V1,
    V2,
}

impl From<Format> for u8 {
    fn from(format: Format) -> u8 {
        match format {
            Format::V1 => 1,
            Format::V2 => 2,
        }
    }
}

impl TryFrom<u8> for Format {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Format::V1),
            2 => Ok(Format::V2),
            other => Err(format!("unsupported transaction format: {other}")),
        }
    }
}

fn default_quantity() -> String {
    "0".to_string()
}

/// A ledger transaction: a data record, a value transfer, or both.
///
/// All byte-valued fields (`id`, `last_tx`, `owner`, `target`, `data`,
/// `data_root`, `signature`, tag names/values) are stored base64url without
/// padding, exactly as the wire carries them. The raw payload and the chunk
/// commitment ride alongside but never serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub format: Format,
    #[serde(default)]
    pub id: TransactionId,
    #[serde(default)]
    pub last_tx: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub target: String,
    #[serde(default = "default_quantity")]
    pub quantity: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub data_root: String,
    #[serde(default)]
    pub data_size: String,
    #[serde(default)]
    pub reward: String,
    #[serde(default)]
    pub signature: String,

    /// The raw payload; represented on the wire by `data_root`/`data_size`.
    #[serde(skip)]
    pub raw_data: Bytes,
    /// The chunk commitment, populated by [`Transaction::prepare_chunks`].
    #[serde(skip)]
    pub chunks: Option<TransactionChunks>,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            format: Format::V2,
            id: TransactionId::new(),
            last_tx: String::new(),
            owner: String::new(),
            tags: Vec::new(),
            target: String::new(),
            quantity: default_quantity(),
            data: String::new(),
            data_root: String::new(),
            data_size: String::new(),
            reward: String::new(),
            signature: String::new(),
            raw_data: Bytes::new(),
            chunks: None,
        }
    }
}

impl Transaction {
    /// A data-bearing transaction.
    pub fn with_data(data: impl Into<Bytes>) -> Self {
        let raw_data = data.into();
        Self {
            data: b64url_encode(&raw_data),
            data_size: raw_data.len().to_string(),
            raw_data,
            ..Self::default()
        }
    }

    /// A wallet-to-wallet value transfer.
    pub fn transfer(quantity: permaweave_core::Winston, target: &Address) -> Self {
        Self {
            quantity: quantity.to_string(),
            target: target.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Append a tag, base64url-encoding name and value.
    pub fn add_tag(&mut self, name: &str, value: &str) {
        self.tags.push(Tag::new(name, value));
    }

    /// Whether this transaction carries a signature.
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Build the chunk commitment for the payload.
    ///
    /// Idempotent: a commitment that is already set is left alone. An empty
    /// payload gets the empty aggregate and an empty `data_root`.
    pub fn prepare_chunks(&mut self) -> Result<()> {
        if self.chunks.is_some() {
            return Ok(());
        }
        if self.raw_data.is_empty() {
            self.chunks = Some(TransactionChunks::empty());
            self.data_root = String::new();
        } else {
            let chunks = transaction_chunks(&self.raw_data)?;
            self.data_root = chunks.data_root.to_base64url();
            self.chunks = Some(chunks);
        }
        Ok(())
    }

    /// The 48-byte deep-hash digest this transaction signs.
    ///
    /// Field order is fixed; byte fields are decoded back to raw bytes,
    /// while `format`, `quantity`, `reward`, and `data_size` hash as their
    /// decimal-ASCII digits.
    pub fn signature_preimage(&self) -> Result<[u8; 48]> {
        let mut tag_items = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            tag_items.push(DeepHashChunk::List(vec![
                DeepHashChunk::Blob(tag.decoded_name()?),
                DeepHashChunk::Blob(tag.decoded_value()?),
            ]));
        }

        let fields = DeepHashChunk::List(vec![
            DeepHashChunk::Blob(u8::from(self.format).to_string().into_bytes()),
            DeepHashChunk::Blob(b64url_decode(&self.owner)?),
            DeepHashChunk::Blob(b64url_decode(&self.target)?),
            DeepHashChunk::Blob(self.quantity.clone().into_bytes()),
            DeepHashChunk::Blob(self.reward.clone().into_bytes()),
            DeepHashChunk::Blob(b64url_decode(&self.last_tx)?),
            DeepHashChunk::List(tag_items),
            DeepHashChunk::Blob(self.data_size.clone().into_bytes()),
            DeepHashChunk::Blob(b64url_decode(&self.data_root)?),
        ]);
        Ok(deep_hash(&fields))
    }

    /// Sign this transaction, returning the signed copy.
    ///
    /// Fetches a fresh anchor and the price for the payload size
    /// concurrently; both must succeed or the whole operation fails with no
    /// partial state. The single fetched anchor is used both as `last_tx`
    /// and inside the preimage. Repeated calls produce different valid
    /// signatures and ids, since the anchor and the PSS salt change between
    /// calls.
    pub async fn sign<K, G>(&self, key_store: &K, gateway: &G) -> Result<Transaction>
    where
        K: KeyStore + ?Sized,
        G: Gateway + ?Sized,
    {
        let mut tx = self.clone();

        let target = (!tx.target.is_empty()).then(|| Address::new(tx.target.clone()));
        let (anchor, price) = tokio::try_join!(
            gateway.tx_anchor(),
            gateway.price(tx.raw_data.len() as u64, target.as_ref())
        )?;
        debug!(anchor = %anchor, reward = %price, "fetched signing inputs");

        tx.last_tx = anchor;
        tx.reward = price.to_string();
        tx.owner = key_store.owner_modulus().to_string();
        tx.data = b64url_encode(&tx.raw_data);
        tx.data_size = tx.data.len().to_string();
        tx.prepare_chunks()?;

        let digest = tx.signature_preimage()?;
        let signature = key_store.sign(&digest)?;
        tx.signature = b64url_encode(&signature);
        tx.id = Sha256Hash::hash(&signature).to_base64url();
        debug!(id = %tx.id, "signed transaction");
        Ok(tx)
    }

    /// The wire JSON body for submission.
    ///
    /// Chunked payloads ride as `data_root`/`data_size`; the `data` field
    /// goes out empty for them.
    pub fn wire_json(&self) -> Result<Vec<u8>> {
        let mut wire = self.clone();
        if !wire.data_root.is_empty() {
            wire.data = String::new();
        }
        serde_json::to_vec(&wire).map_err(|e| TransactionError::Decode(e.to_string()))
    }

    /// Submit this signed transaction.
    ///
    /// Fails with [`TransactionError::MissingSignature`] before `sign`,
    /// making no network call.
    pub async fn commit<G>(&self, gateway: &G) -> Result<u16>
    where
        G: Gateway + ?Sized,
    {
        if !self.is_signed() {
            return Err(TransactionError::MissingSignature);
        }
        let body = self.wire_json()?;
        let status = gateway.submit(&body).await?;
        debug!(id = %self.id, status, "committed transaction");
        Ok(status)
    }

    /// Fetch a transaction by id.
    pub async fn find<G>(gateway: &G, id: &str) -> Result<Transaction>
    where
        G: Gateway + ?Sized,
    {
        let body = gateway.transaction(id).await?;
        serde_json::from_slice(&body).map_err(|e| TransactionError::Decode(e.to_string()))
    }

    /// Fetch a transaction's payload by id, base64url-encoded.
    pub async fn data_of<G>(gateway: &G, id: &str) -> Result<String>
    where
        G: Gateway + ?Sized,
    {
        Ok(gateway.transaction_data(id).await?)
    }

    /// Fetch a transaction's confirmation status by id.
    pub async fn status_of<G>(gateway: &G, id: &str) -> Result<TransactionStatus>
    where
        G: Gateway + ?Sized,
    {
        let (status, body) = gateway.transaction_status(id).await?;
        if status == 200 {
            let data =
                serde_json::from_slice(&body).map_err(|e| TransactionError::Decode(e.to_string()))?;
            Ok(TransactionStatus::Accepted(data))
        } else {
            Ok(TransactionStatus::from_code(status))
        }
    }
}
