//! Bill HTTP handlers.
//!
//! This module implements the bill-related routes:
//! - GET /bills/get - List all identified bills
//! - GET /bills/get/{enduser_oid} - List bills for one enduser
//! - GET /bills/delete - Delete all identified bills

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{AppState, error::AppError, services::bill_service};

/// List all bills scoped within your current institution/API key.
///
/// # Endpoint
///
/// `GET /bills/get`
pub async fn get_bills(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    Ok(Json(state.client.get_bills().await?))
}

/// List the identified bills for a given enduser.
///
/// # Endpoint
///
/// `GET /bills/get/{enduser_oid}`
///
/// # URL Parameters
///
/// - `enduser_oid` - your origin ID for the enduser whose bills to return
pub async fn get_bills_for_enduser(
    State(state): State<AppState>,
    Path(enduser_oid): Path<String>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.client.get_bills_for_enduser(&enduser_oid).await?))
}

/// Delete the bills that were identified during this quickstart.
///
/// # Endpoint
///
/// `GET /bills/delete`
///
/// # Response
///
/// An array with one delete response per bill, in listing order.
pub async fn delete_bills(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let deleted = bill_service::delete_all_bills(&state.client).await?;
    Ok(Json(deleted))
}
