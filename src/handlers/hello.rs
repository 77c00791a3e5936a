//! Landing route.

use axum::Json;
use serde_json::{Value, json};

/// Returns hello world!
///
/// # Endpoint
///
/// `GET /`
pub async fn hello_world() -> Json<Value> {
    Json(json!({"Hello": "World"}))
}
