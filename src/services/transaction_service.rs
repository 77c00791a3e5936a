//! Prepared transaction commands.

use serde_json::Value;

use crate::client::BlipClient;
use crate::error::AppError;
use crate::fixtures;
use crate::models::page::Page;

/// Load the sample transactions and create them via the Blip API.
///
/// The response includes the `batch_id` Blip assigned to this upload.
pub async fn create_sample_transactions(
    client: &BlipClient,
    data_dir: &str,
) -> Result<Value, AppError> {
    let transactions = fixtures::sample_transactions(data_dir).await?;
    client.create_transactions(&transactions).await
}

/// Delete every transaction currently visible for the institution.
///
/// Fetches the transaction list, collects each item's `oid`, and deletes
/// them one at a time (paced, in listing order). Returns the individual
/// delete responses in that same order.
pub async fn delete_all_transactions(client: &BlipClient) -> Result<Vec<Value>, AppError> {
    let existing = client.get_transactions().await?;
    let page: Page = serde_json::from_value(existing).unwrap_or_default();

    client.delete_transactions(&page.string_field("oid")).await
}
