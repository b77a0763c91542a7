//! Test fixtures and helpers.
//!
//! Common setup for end-to-end tests: a generated wallet plus an in-memory
//! gateway.

use permaweave::{Transaction, Wallet};
use permaweave_core::Winston;
use permaweave_gateway::MemoryGateway;

/// A test fixture with a fresh wallet and an in-memory gateway.
pub struct TestFixture {
    pub wallet: Wallet,
    pub gateway: MemoryGateway,
}

impl TestFixture {
    /// Create a fixture with a 2048-bit wallet.
    pub fn new() -> Self {
        Self {
            wallet: Wallet::generate(2048).expect("test key generation"),
            gateway: MemoryGateway::new(),
        }
    }

    /// Credit the fixture wallet with a balance.
    pub async fn fund(&self, amount: Winston) {
        self.gateway.set_balance(self.wallet.address(), amount).await;
    }

    /// A small data transaction with a content-type tag.
    pub fn demo_transaction(&self) -> Transaction {
        let mut tx = Transaction::with_data(crate::vectors::HELLO_WORLD.to_vec());
        tx.add_tag("Content-Type", "text/html");
        tx
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permaweave_gateway::Gateway;

    #[tokio::test]
    async fn test_fixture_signs_and_queries_balance() {
        let fixture = TestFixture::new();
        fixture.fund(Winston::from_ar(2)).await;

        assert_eq!(
            fixture.gateway.balance(fixture.wallet.address()).await.unwrap(),
            Winston(2_000_000_000_000)
        );

        let signed = fixture
            .demo_transaction()
            .sign(&fixture.wallet, &fixture.gateway)
            .await
            .unwrap();
        assert_eq!(signed.data_root, crate::vectors::HELLO_WORLD_DATA_ROOT);
    }
}
