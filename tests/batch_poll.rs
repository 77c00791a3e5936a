//! Tests for the batch-completion poll.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::http::StatusCode;
use serde_json::json;

use blip_quickstart::error::AppError;
use common::{RequestLog, recording_stub, serve, test_client};

/// Stub whose status endpoint reports "processing" until the
/// `complete_after`-th check, then "complete". Zero means never complete.
fn status_stub(complete_after: u32, calls: Arc<AtomicU32>) -> axum::Router {
    recording_stub(RequestLog::default(), move |recorded| {
        assert_eq!(recorded.path, "/transactions/status");
        assert_eq!(recorded.query.as_deref(), Some("batch_id=batch-7"));

        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        if complete_after != 0 && n >= complete_after {
            (
                StatusCode::OK,
                json!({"status": "complete", "batch_id": "batch-7"}),
            )
        } else {
            (
                StatusCode::OK,
                json!({"status": "processing", "batch_id": "batch-7"}),
            )
        }
    })
}

#[tokio::test]
async fn poll_returns_body_once_batch_completes() {
    // Completion may arrive on any attempt up to the cap.
    for k in 1..=10 {
        let calls = Arc::new(AtomicU32::new(0));
        let base = serve(status_stub(k, calls.clone())).await;
        let client = test_client(&base);

        let body = client
            .await_processed_transactions("batch-7")
            .await
            .unwrap();

        assert_eq!(body, json!({"status": "complete", "batch_id": "batch-7"}));
        assert_eq!(calls.load(Ordering::SeqCst), k, "stopped polling at attempt {k}");
    }
}

#[tokio::test]
async fn poll_times_out_after_exactly_ten_checks() {
    let calls = Arc::new(AtomicU32::new(0));
    let base = serve(status_stub(0, calls.clone())).await;
    let client = test_client(&base);

    let err = client
        .await_processed_transactions("batch-7")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BatchTimeout));
    assert_eq!(calls.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn poll_treats_missing_status_field_as_not_complete() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let stub = recording_stub(RequestLog::default(), move |_| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        if n >= 3 {
            (StatusCode::OK, json!({"status": "complete"}))
        } else {
            // no status key at all
            (StatusCode::OK, json!({"batch_id": "batch-7"}))
        }
    });
    let base = serve(stub).await;
    let client = test_client(&base);

    let body = client
        .await_processed_transactions("batch-7")
        .await
        .unwrap();

    assert_eq!(body, json!({"status": "complete"}));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
