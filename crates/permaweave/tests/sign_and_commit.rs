//! End-to-end signing and submission against the in-memory gateway.

use permaweave::{
    Address, KeyStore, Transaction, TransactionError, TransactionStatus, Wallet, Winston,
};
use permaweave_core::b64url_decode;
use permaweave_gateway::{GatewayError, MemoryGateway};

fn test_wallet() -> Wallet {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Wallet::generate(2048).expect("key generation")
}

#[tokio::test]
async fn test_sign_data_transaction_end_to_end() {
    let wallet = test_wallet();
    let gateway = MemoryGateway::new();

    let mut tx = Transaction::with_data("<h1>Hello World!</h1>".as_bytes().to_vec());
    tx.add_tag("Content-Type", "text/html");

    let signed = tx.sign(&wallet, &gateway).await.unwrap();

    // The original is untouched; signing has value semantics.
    assert!(!tx.is_signed());
    assert!(tx.owner.is_empty());

    assert_eq!(signed.data, "PGgxPkhlbGxvIFdvcmxkITwvaDE-");
    assert_eq!(signed.data_size, "28");
    assert_eq!(
        signed.data_root,
        "-1wLgp936N8myTJT1SyD_sOaKNJADUHo82C6PsI1_ZA"
    );
    assert_eq!(signed.owner, wallet.owner_modulus());
    assert!(!signed.last_tx.is_empty());
    assert!(!signed.reward.is_empty());

    let chunks = signed.chunks.as_ref().unwrap();
    assert_eq!(chunks.chunks.len(), 1);
    assert_eq!(chunks.proofs.len(), 1);
    assert_eq!(chunks.chunks[0].min_byte_range, 0);
    assert_eq!(chunks.chunks[0].max_byte_range, 21);

    // The id is the hash of the signature bytes.
    let signature = b64url_decode(&signed.signature).unwrap();
    let expected_id = permaweave::Sha256Hash::hash(&signature).to_base64url();
    assert_eq!(signed.id, expected_id);

    // The signature verifies over the deep-hash preimage.
    let digest = signed.signature_preimage().unwrap();
    wallet.verify(&digest, &signature).unwrap();
}

#[tokio::test]
async fn test_repeated_signing_differs_across_anchors() {
    let wallet = test_wallet();
    let gateway = MemoryGateway::new();

    let tx = Transaction::with_data(b"same payload".to_vec());
    let first = tx.sign(&wallet, &gateway).await.unwrap();
    let second = tx.sign(&wallet, &gateway).await.unwrap();

    assert_ne!(first.last_tx, second.last_tx);
    assert_ne!(first.signature, second.signature);
    assert_ne!(first.id, second.id);

    // Both are nonetheless valid.
    for signed in [&first, &second] {
        let digest = signed.signature_preimage().unwrap();
        let signature = b64url_decode(&signed.signature).unwrap();
        wallet.verify(&digest, &signature).unwrap();
    }
}

#[tokio::test]
async fn test_commit_before_sign_makes_no_network_call() {
    let gateway = MemoryGateway::new();
    let tx = Transaction::with_data(b"unsigned".to_vec());

    let err = tx.commit(&gateway).await.unwrap_err();
    assert!(matches!(err, TransactionError::MissingSignature));
    assert_eq!(gateway.submission_count().await, 0);
}

#[tokio::test]
async fn test_commit_and_lookup() {
    let wallet = test_wallet();
    let gateway = MemoryGateway::new();

    let mut tx = Transaction::with_data(b"lookup me".to_vec());
    tx.add_tag("App-Name", "permaweave-tests");
    let signed = tx.sign(&wallet, &gateway).await.unwrap();

    let status = signed.commit(&gateway).await.unwrap();
    assert_eq!(status, 200);
    assert_eq!(gateway.submission_count().await, 1);

    // Chunked payloads go out as data_root/data_size, not inline data.
    let wire: serde_json::Value =
        serde_json::from_slice(&gateway.submissions().await[0]).unwrap();
    assert_eq!(wire["data"], "");
    assert_eq!(wire["data_root"], signed.data_root);
    assert_eq!(wire["data_size"], signed.data_size);

    let found = Transaction::find(&gateway, &signed.id).await.unwrap();
    assert_eq!(found.id, signed.id);
    assert_eq!(found.signature, signed.signature);
    assert_eq!(found.tags, signed.tags);

    match Transaction::status_of(&gateway, &signed.id).await.unwrap() {
        TransactionStatus::Accepted(data) => assert!(data.number_of_confirmations > 0),
        other => panic!("expected accepted status, got {other:?}"),
    }
    assert_eq!(
        Transaction::status_of(&gateway, "unknown-id").await.unwrap(),
        TransactionStatus::NotFound
    );
}

#[tokio::test]
async fn test_transfer_without_payload_signs_and_commits() {
    let wallet = test_wallet();
    let gateway = MemoryGateway::new();

    let target = Address::new("A5BYxvLAy0ksUzsKTRTvd8wPeKvMztUofYShogEc-4E");
    let tx = Transaction::transfer(Winston(500), &target);
    let signed = tx.sign(&wallet, &gateway).await.unwrap();

    assert_eq!(signed.quantity, "500");
    assert_eq!(signed.data_root, "");
    assert_eq!(signed.data_size, "0");
    assert!(signed.chunks.as_ref().unwrap().is_empty());

    assert_eq!(signed.commit(&gateway).await.unwrap(), 200);
}

#[tokio::test]
async fn test_gateway_failure_aborts_signing() {
    let wallet = test_wallet();
    let gateway = MemoryGateway::new();
    gateway.fail_price().await;

    let tx = Transaction::with_data(b"doomed".to_vec());
    let err = tx.sign(&wallet, &gateway).await.unwrap_err();
    assert!(matches!(
        err,
        TransactionError::Gateway(GatewayError::Unreachable(_))
    ));

    // No partial state anywhere: the input is still pristine.
    assert!(tx.last_tx.is_empty());
    assert!(tx.reward.is_empty());
    assert!(!tx.is_signed());
}

#[tokio::test]
async fn test_anchor_failure_aborts_signing() {
    let wallet = test_wallet();
    let gateway = MemoryGateway::new();
    gateway.fail_anchor().await;

    let tx = Transaction::with_data(b"doomed".to_vec());
    assert!(tx.sign(&wallet, &gateway).await.is_err());
}

#[tokio::test]
async fn test_rejected_submission_surfaces_status() {
    let wallet = test_wallet();
    let gateway = MemoryGateway::new();
    gateway.reject_submissions(429).await;

    let signed = Transaction::with_data(b"rate limited".to_vec())
        .sign(&wallet, &gateway)
        .await
        .unwrap();
    let err = signed.commit(&gateway).await.unwrap_err();
    assert!(matches!(
        err,
        TransactionError::Gateway(GatewayError::BadResponse { status: 429 })
    ));
}
