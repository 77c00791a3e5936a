//! Transaction HTTP handlers.
//!
//! This module implements the transaction-related routes:
//! - GET /transactions/get - List all transactions
//! - GET /transactions/create - Create the sample transactions
//! - GET /transactions/delete - Delete all visible transactions

use axum::{Json, extract::State};
use serde_json::Value;

use crate::{AppState, error::AppError, services::transaction_service};

/// List all transactions associated with any endusers, scoped to your
/// institution/API key.
///
/// # Endpoint
///
/// `GET /transactions/get`
pub async fn get_transactions(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    Ok(Json(state.client.get_transactions().await?))
}

/// Create the transactions defined in the sample transactions json file.
///
/// # Endpoint
///
/// `GET /transactions/create`
///
/// # Response
///
/// Blip's creation totals, including the `batch_id` for this upload.
pub async fn create_transactions(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let created =
        transaction_service::create_sample_transactions(&state.client, &state.data_dir).await?;
    Ok(Json(created))
}

/// Delete all transactions that were created as part of this quickstart.
///
/// # Endpoint
///
/// `GET /transactions/delete`
///
/// # Response
///
/// An array with one delete response per transaction, in listing order.
/// Deletes run one at a time with a small pause between them, so this
/// route can take a while on large lists.
pub async fn delete_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, AppError> {
    let deleted = transaction_service::delete_all_transactions(&state.client).await?;
    Ok(Json(deleted))
}
