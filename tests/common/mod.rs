//! Shared helpers for the integration tests.
//!
//! Tests run the real router and `BlipClient` against in-process stub
//! servers bound to ephemeral localhost ports, so no network access or
//! real Blip credentials are needed.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::Request, http::StatusCode};
use serde_json::Value;

use blip_quickstart::{AppState, client::BlipClient, config::Config};

/// One request as seen by a stub Blip server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub api_key: Option<String>,
    pub body: Value,
}

/// Shared log of every request a stub server received, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RequestLog(pub Arc<Mutex<Vec<Recorded>>>);

impl RequestLog {
    /// `(method, path)` pairs in arrival order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .map(|r| (r.method.clone(), r.path.clone()))
            .collect()
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().clone()
    }
}

/// Build a stub Blip server that records every request and answers with
/// whatever the `reply` function returns for it.
pub fn recording_stub<F>(log: RequestLog, reply: F) -> Router
where
    F: Fn(&Recorded) -> (StatusCode, Value) + Clone + Send + Sync + 'static,
{
    Router::new().fallback(move |req: Request| {
        let log = log.clone();
        let reply = reply.clone();
        async move {
            let recorded = record(req).await;
            let (status, body) = reply(&recorded);
            log.0.lock().unwrap().push(recorded);
            (status, Json(body))
        }
    })
}

async fn record(req: Request) -> Recorded {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let api_key = req
        .headers()
        .get("X-API-Key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let bytes = axum::body::to_bytes(req.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    Recorded {
        method,
        path,
        query,
        api_key,
        body,
    }
}

/// Serve a router on an ephemeral localhost port, returning its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Test configuration pointed at a stub server. Pacing and poll sleeps are
/// zeroed so tests run instantly; attempt counts match the defaults.
pub fn test_config(base_url: &str) -> Config {
    Config {
        blip_api_key: "test-key".to_string(),
        blip_api_url: base_url.to_string(),
        server_port: 0,
        data_dir: "data".to_string(),
        delete_pacing_ms: 0,
        poll_interval_secs: 0,
        poll_max_attempts: 10,
    }
}

pub fn test_client(base_url: &str) -> BlipClient {
    BlipClient::new(&test_config(base_url)).unwrap()
}

/// Spin up the full application pointed at a stub Blip server, returning
/// the app's base URL.
pub async fn serve_app(blip_base_url: &str) -> String {
    let state = AppState {
        client: test_client(blip_base_url),
        data_dir: "data".to_string(),
    };
    serve(blip_quickstart::app(state)).await
}
