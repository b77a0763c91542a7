//! A deterministic in-memory gateway for tests.
//!
//! Anchors can be scripted, pricing is a fixed linear function of byte size,
//! submissions are recorded and looked up like a real node would, and
//! individual operations can be switched to fail for error-path tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;
use tracing::debug;

use permaweave_core::{b64url_encode, Address, Winston};

use crate::error::{GatewayError, Result};
use crate::gateway::Gateway;

#[derive(Debug, Default)]
struct State {
    anchors: VecDeque<String>,
    anchor_counter: u64,
    balances: HashMap<String, Winston>,
    transactions: HashMap<String, Vec<u8>>,
    submissions: Vec<Vec<u8>>,
    anchor_fails: bool,
    price_fails: bool,
    submit_status: Option<u16>,
}

/// In-memory [`Gateway`] implementation.
pub struct MemoryGateway {
    base_fee: u128,
    winston_per_byte: u128,
    state: Mutex<State>,
}

impl MemoryGateway {
    /// A gateway with the default fee schedule.
    pub fn new() -> Self {
        Self {
            base_fee: 1000,
            winston_per_byte: 10,
            state: Mutex::new(State::default()),
        }
    }

    /// A gateway with an explicit linear fee schedule.
    pub fn with_fee_schedule(base_fee: u128, winston_per_byte: u128) -> Self {
        Self {
            base_fee,
            winston_per_byte,
            state: Mutex::new(State::default()),
        }
    }

    /// Queue an anchor to be returned by the next `tx_anchor` call.
    ///
    /// Anchors end up base64url-decoded inside signing preimages, so pass a
    /// valid base64url string. When the queue is empty, anchors are generated
    /// from a counter so that consecutive fetches observe fresh network
    /// state.
    pub async fn push_anchor(&self, anchor: impl Into<String>) {
        self.state.lock().await.anchors.push_back(anchor.into());
    }

    /// Set a wallet balance.
    pub async fn set_balance(&self, address: &Address, balance: Winston) {
        self.state
            .lock()
            .await
            .balances
            .insert(address.as_str().to_string(), balance);
    }

    /// Make subsequent `tx_anchor` calls fail.
    pub async fn fail_anchor(&self) {
        self.state.lock().await.anchor_fails = true;
    }

    /// Make subsequent `price` calls fail.
    pub async fn fail_price(&self) {
        self.state.lock().await.price_fails = true;
    }

    /// Make subsequent `submit` calls answer with the given status code.
    pub async fn reject_submissions(&self, status: u16) {
        self.state.lock().await.submit_status = Some(status);
    }

    /// Bodies of every accepted submission, in order.
    pub async fn submissions(&self) -> Vec<Vec<u8>> {
        self.state.lock().await.submissions.clone()
    }

    /// Number of accepted submissions.
    pub async fn submission_count(&self) -> usize {
        self.state.lock().await.submissions.len()
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn tx_anchor(&self) -> Result<String> {
        let mut state = self.state.lock().await;
        if state.anchor_fails {
            return Err(GatewayError::Unreachable("anchor fetch failed".into()));
        }
        if let Some(anchor) = state.anchors.pop_front() {
            return Ok(anchor);
        }
        state.anchor_counter += 1;
        // Encoded so the anchor is always decodable wherever real ones are.
        Ok(b64url_encode(format!("anchor-{}", state.anchor_counter)))
    }

    async fn price(&self, bytes: u64, _target: Option<&Address>) -> Result<Winston> {
        let state = self.state.lock().await;
        if state.price_fails {
            return Err(GatewayError::Unreachable("price fetch failed".into()));
        }
        Ok(Winston(
            self.base_fee + self.winston_per_byte * u128::from(bytes),
        ))
    }

    async fn submit(&self, body: &[u8]) -> Result<u16> {
        let mut state = self.state.lock().await;
        if let Some(status) = state.submit_status {
            return Err(GatewayError::BadResponse { status });
        }

        // Index the submission by its id so lookups behave like a node.
        let parsed: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| GatewayError::Unreachable(format!("unparsable submission: {e}")))?;
        if let Some(id) = parsed.get("id").and_then(|v| v.as_str()) {
            state.transactions.insert(id.to_string(), body.to_vec());
        }
        state.submissions.push(body.to_vec());
        debug!(bytes = body.len(), "accepted submission");
        Ok(200)
    }

    async fn transaction(&self, id: &str) -> Result<Vec<u8>> {
        let state = self.state.lock().await;
        state
            .transactions
            .get(id)
            .cloned()
            .ok_or(GatewayError::BadResponse { status: 404 })
    }

    async fn transaction_data(&self, id: &str) -> Result<String> {
        let body = self.transaction(id).await?;
        let parsed: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| GatewayError::Unreachable(format!("corrupt stored body: {e}")))?;
        Ok(parsed
            .get("data")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string())
    }

    async fn transaction_status(&self, id: &str) -> Result<(u16, Vec<u8>)> {
        let state = self.state.lock().await;
        if state.transactions.contains_key(id) {
            let body = serde_json::json!({
                "block_height": 1207,
                "block_indep_hash": "mock-block",
                "number_of_confirmations": 12,
            });
            Ok((200, body.to_string().into_bytes()))
        } else {
            Ok((404, Vec::new()))
        }
    }

    async fn balance(&self, address: &Address) -> Result<Winston> {
        let state = self.state.lock().await;
        Ok(state
            .balances
            .get(address.as_str())
            .copied()
            .unwrap_or(Winston::ZERO))
    }

    async fn last_tx(&self, address: &Address) -> Result<String> {
        let state = self.state.lock().await;
        Ok(state
            .balances
            .contains_key(address.as_str())
            .then(|| format!("last-of-{address}"))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_anchors_are_fresh_by_default() {
        let gateway = MemoryGateway::new();
        let a = gateway.tx_anchor().await.unwrap();
        let b = gateway.tx_anchor().await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_scripted_anchors_come_first() {
        let gateway = MemoryGateway::new();
        gateway.push_anchor("scripted").await;
        assert_eq!(gateway.tx_anchor().await.unwrap(), "scripted");
        assert_eq!(
            gateway.tx_anchor().await.unwrap(),
            b64url_encode(b"anchor-1")
        );
    }

    #[tokio::test]
    async fn test_price_is_linear_in_bytes() {
        let gateway = MemoryGateway::with_fee_schedule(100, 2);
        assert_eq!(gateway.price(0, None).await.unwrap(), Winston(100));
        assert_eq!(gateway.price(50, None).await.unwrap(), Winston(200));
    }

    #[tokio::test]
    async fn test_submit_records_and_indexes() {
        let gateway = MemoryGateway::new();
        let body = br#"{"id":"tx-1","data":"aGk"}"#;
        assert_eq!(gateway.submit(body).await.unwrap(), 200);
        assert_eq!(gateway.submission_count().await, 1);
        assert_eq!(gateway.transaction("tx-1").await.unwrap(), body.to_vec());
        assert_eq!(gateway.transaction_data("tx-1").await.unwrap(), "aGk");

        let (status, _) = gateway.transaction_status("tx-1").await.unwrap();
        assert_eq!(status, 200);
        let (status, _) = gateway.transaction_status("unknown").await.unwrap();
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn test_rejection_surfaces_status_verbatim() {
        let gateway = MemoryGateway::new();
        gateway.reject_submissions(400).await;
        let err = gateway.submit(br#"{"id":"x"}"#).await.unwrap_err();
        assert!(matches!(err, GatewayError::BadResponse { status: 400 }));
    }

    #[tokio::test]
    async fn test_unknown_transaction_is_404() {
        let gateway = MemoryGateway::new();
        let err = gateway.transaction("missing").await.unwrap_err();
        assert!(matches!(err, GatewayError::BadResponse { status: 404 }));
    }

    #[tokio::test]
    async fn test_balance_defaults_to_zero() {
        let gateway = MemoryGateway::new();
        let address = Address::new("someone");
        assert_eq!(gateway.balance(&address).await.unwrap(), Winston::ZERO);

        gateway.set_balance(&address, Winston::from_ar(1)).await;
        assert_eq!(
            gateway.balance(&address).await.unwrap(),
            Winston(1_000_000_000_000)
        );
    }
}
