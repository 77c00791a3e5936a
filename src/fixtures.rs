//! Sample data loading.
//!
//! The quickstart ships two JSON files under the data directory: one with
//! sample endusers and one with sample transactions those endusers made.
//! The prepared commands load them here before calling the Blip API.

use std::path::Path;

use serde_json::Value;

use crate::error::AppError;

/// File holding the sample enduser records.
pub const SAMPLE_ENDUSERS_FILE: &str = "sample_endusers.json";

/// File holding the sample transaction records.
pub const SAMPLE_TRANSACTIONS_FILE: &str = "sample_transactions.json";

/// Read and parse the sample endusers file.
pub async fn sample_endusers(data_dir: &str) -> Result<Vec<Value>, AppError> {
    read_json_array(data_dir, SAMPLE_ENDUSERS_FILE).await
}

/// Read and parse the sample transactions file.
pub async fn sample_transactions(data_dir: &str) -> Result<Vec<Value>, AppError> {
    read_json_array(data_dir, SAMPLE_TRANSACTIONS_FILE).await
}

async fn read_json_array(data_dir: &str, file_name: &str) -> Result<Vec<Value>, AppError> {
    let path = Path::new(data_dir).join(file_name);
    let raw = tokio::fs::read_to_string(&path).await?;
    Ok(serde_json::from_str(&raw)?)
}
