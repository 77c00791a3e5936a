//! The scripted end-to-end workflow and the full cleanup command.

use serde_json::{Value, json};

use crate::client::BlipClient;
use crate::error::AppError;
use crate::fixtures;
use crate::models::batch::BatchReceipt;
use crate::services::{bill_service, enduser_service, transaction_service};

/// Run the automated quickstart workflow.
///
/// # Steps
///
/// 1. Create endusers from the sample endusers file
/// 2. Create transactions (that those endusers made) from the sample file
/// 3. Wait for Blip to process the batch and identify bills
/// 4. Fetch the processed transactions for the batch
/// 5. Fetch and return the identified bills for the first sample enduser
///    (they're the one with all the recurring transactions)
///
/// # Errors
///
/// - [`AppError::MissingBatchId`] if creating transactions returns no
///   `batch_id`; the workflow stops before issuing any further calls
/// - [`AppError::BatchTimeout`] if the batch never reports completion
pub async fn run_workflow(client: &BlipClient, data_dir: &str) -> Result<Value, AppError> {
    let endusers = fixtures::sample_endusers(data_dir).await?;
    let created_endusers = client.create_endusers(&endusers).await?;
    tracing::info!(%created_endusers, "created enduser(s)");

    let transactions = fixtures::sample_transactions(data_dir).await?;
    let created_transactions = client.create_transactions(&transactions).await?;

    let receipt: BatchReceipt =
        serde_json::from_value(created_transactions).unwrap_or_default();
    let batch_id = receipt.batch_id.ok_or(AppError::MissingBatchId)?;
    tracing::info!(%batch_id, "transactions uploaded");

    client.await_processed_transactions(&batch_id).await?;

    let processed = client.get_transactions_for_batch(&batch_id).await?;
    tracing::info!(%processed, "processed transactions");

    let first_enduser_oid = endusers
        .first()
        .and_then(|enduser| enduser.get("oid"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    client.get_bills_for_enduser(first_enduser_oid).await
}

/// Delete all bills, transactions, and endusers created by this quickstart.
///
/// This is a dangerous command, so be careful! Cleanup runs in dependency
/// order: bills first (they hang off transactions), then transactions,
/// then endusers.
pub async fn delete_all(client: &BlipClient, data_dir: &str) -> Result<Value, AppError> {
    tracing::info!("deleting bills...");
    bill_service::delete_all_bills(client).await?;

    tracing::info!("deleting transactions...");
    transaction_service::delete_all_transactions(client).await?;

    tracing::info!("deleting endusers...");
    enduser_service::delete_sample_endusers(client, data_dir).await?;

    tracing::info!("done deleting everything");
    Ok(json!({"success": true}))
}
