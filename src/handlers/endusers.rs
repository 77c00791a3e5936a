//! Enduser HTTP handlers.
//!
//! This module implements the enduser-related routes:
//! - GET /endusers/get - List all endusers
//! - GET /endusers/create - Create the sample endusers
//! - GET /endusers/delete - Delete the sample endusers

use axum::{Json, extract::State};
use serde_json::Value;

use crate::{AppState, error::AppError, services::enduser_service};

/// List all endusers, scoped to your institution/API key.
///
/// # Endpoint
///
/// `GET /endusers/get`
///
/// # Response
///
/// - **Success (200 OK)**: The paginated enduser list exactly as Blip
///   returned it
/// - **Error (502)**: The Blip API could not be reached
pub async fn get_endusers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    Ok(Json(state.client.get_endusers().await?))
}

/// Create the endusers contained within the sample endusers json file.
///
/// # Endpoint
///
/// `GET /endusers/create`
///
/// # Response
///
/// - **Success (200 OK)**: Blip's creation totals
/// - **Error (500)**: The sample file could not be read
/// - **Error (502)**: The Blip API could not be reached
pub async fn create_endusers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let created = enduser_service::create_sample_endusers(&state.client, &state.data_dir).await?;
    Ok(Json(created))
}

/// Delete the endusers contained within the sample endusers json file.
///
/// # Endpoint
///
/// `GET /endusers/delete`
///
/// # Response
///
/// - **Success (200 OK)**: Blip's deletion totals
/// - **Error (500)**: The sample file could not be read
/// - **Error (502)**: The Blip API could not be reached
pub async fn delete_endusers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let deleted = enduser_service::delete_sample_endusers(&state.client, &state.data_dir).await?;
    Ok(Json(deleted))
}
