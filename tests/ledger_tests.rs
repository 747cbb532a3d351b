//! `HttpLedgerSink` against a stub ledger node.

mod common;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{Value, json};

use trustlens::{ClaimReview, HttpLedgerSink, LedgerError, LedgerSink};

use common::fixtures::{MIXED_ORACLE_REPLY, TOPIC, reference_article, subject_article};
use common::harness::spawn_stub;

#[derive(Clone, Default)]
struct Captured {
    auth: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

fn stub_router(captured: Captured, status: StatusCode, reply: Value) -> Router {
    Router::new()
        .route(
            "/publishnote/create",
            post(
                move |State(captured): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        *captured.auth.lock() = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        *captured.body.lock() = Some(body);
                        (status, Json(reply))
                    }
                },
            ),
        )
        .with_state(captured)
}

async fn sample_review() -> ClaimReview {
    let analyzer = trustlens::Analyzer::new(Arc::new(trustlens::MockOracle::replying(
        MIXED_ORACLE_REPLY,
    )));
    let subject = subject_article();
    let reference = reference_article();
    let result = analyzer
        .analyze(&subject, &reference, trustlens::AnalysisDepth::Quick)
        .await
        .expect("analysis should succeed");
    trustlens::build_claim_review(&result, &subject, &reference, TOPIC)
}

#[tokio::test]
async fn test_publish_sends_bearer_and_article_payload() {
    let captured = Captured::default();
    let stub = spawn_stub(stub_router(
        captured.clone(),
        StatusCode::OK,
        json!({"UAL": "did:dkg:otp/0x1/7", "txHash": "0x5eed"}),
    ))
    .await
    .expect("stub should start");

    let sink = HttpLedgerSink::new(format!("{}/", stub.url()), Some("secret-key".to_string()));
    let receipt = sink.publish(&sample_review().await).await.expect("publish should succeed");

    assert_eq!(receipt.locator, "did:dkg:otp/0x1/7");
    assert_eq!(receipt.transaction_hash.as_deref(), Some("0x5eed"));
    assert_eq!(
        receipt.explorer_url.as_deref(),
        Some(format!("{}/explore?ual=did%3Adkg%3Aotp%2F0x1%2F7", stub.url()).as_str())
    );
    assert_eq!(captured.auth.lock().as_deref(), Some("Bearer secret-key"));

    let body = captured.body.lock().clone().expect("stub received a body");
    assert_eq!(body["privacy"], "public");
    let article: Value = serde_json::from_str(body["content"].as_str().unwrap()).unwrap();
    assert_eq!(article["@type"], "Article");
    assert_eq!(article["name"], format!("Claim review: {TOPIC}"));
    assert_eq!(article["claimReview"]["@type"], "ClaimReview");
    assert_eq!(article["claimReview"]["trustScore"], 49);
}

#[tokio::test]
async fn test_publish_prefers_node_explorer_url_and_skips_auth_without_key() {
    let captured = Captured::default();
    let stub = spawn_stub(stub_router(
        captured.clone(),
        StatusCode::OK,
        json!({"ual": "did:dkg:otp/0x1/8", "explorerUrl": "https://explorer.example.org/8"}),
    ))
    .await
    .expect("stub should start");

    let sink = HttpLedgerSink::new(stub.url(), None);
    let receipt = sink.publish(&sample_review().await).await.expect("publish should succeed");

    assert_eq!(receipt.explorer_url.as_deref(), Some("https://explorer.example.org/8"));
    assert!(receipt.transaction_hash.is_none());
    assert!(captured.auth.lock().is_none());
}

#[tokio::test]
async fn test_server_error_fails_publish() {
    let stub = spawn_stub(stub_router(
        Captured::default(),
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "node offline"}),
    ))
    .await
    .expect("stub should start");

    let sink = HttpLedgerSink::new(stub.url(), None);
    let err = sink.publish(&sample_review().await).await.unwrap_err();

    let LedgerError::PublishFailed { message } = err;
    assert!(message.contains("500"));
    assert!(message.contains("node offline"));
}

#[tokio::test]
async fn test_missing_locator_fails_publish() {
    let stub = spawn_stub(stub_router(
        Captured::default(),
        StatusCode::OK,
        json!({"status": "queued"}),
    ))
    .await
    .expect("stub should start");

    let sink = HttpLedgerSink::new(stub.url(), None);
    let err = sink.publish(&sample_review().await).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "ledger publish failed: ledger response did not include a locator"
    );
}

#[tokio::test]
async fn test_unreachable_node_fails_publish() {
    let sink = HttpLedgerSink::new("http://127.0.0.1:1", None);
    let err = sink.publish(&sample_review().await).await.unwrap_err();

    assert!(err.to_string().starts_with("ledger publish failed"));
}
