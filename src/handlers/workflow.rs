//! Reset and scripted-workflow HTTP handlers.

use axum::{Json, extract::State};
use serde_json::Value;

use crate::{AppState, error::AppError, services::workflow_service};

/// Delete all bills, transactions, and endusers created by this
/// quickstart. This is a dangerous endpoint to hit, so be careful!
///
/// # Endpoint
///
/// `GET /reset`
///
/// # Response
///
/// `{"success": true}` once every cleanup step has finished.
pub async fn reset(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let result = workflow_service::delete_all(&state.client, &state.data_dir).await?;
    Ok(Json(result))
}

/// Execute the automated workflow described in the README: create sample
/// endusers, upload their transactions, wait for Blip to identify bills,
/// then return the bills for the first sample enduser.
///
/// # Endpoint
///
/// `GET /workflow`
///
/// # Response
///
/// - **Success (200 OK)**: Blip's bill list for the first sample enduser
/// - **Error (502)**: Creating transactions returned no `batch_id`, or
///   the Blip API could not be reached
/// - **Error (504)**: The batch never finished processing within the
///   poll schedule
pub async fn workflow(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let bills = workflow_service::run_workflow(&state.client, &state.data_dir).await?;
    Ok(Json(bills))
}
