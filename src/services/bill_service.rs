//! Prepared bill commands.
//!
//! Bills are identified by Blip rather than created by the caller, so the
//! only prepared command is cleanup. Unlike endusers and transactions,
//! bills carry a Blip-assigned `id` instead of a caller-supplied `oid`.

use serde_json::Value;

use crate::client::BlipClient;
use crate::error::AppError;
use crate::models::page::Page;

/// Delete every identified bill currently visible for the institution.
///
/// Fetches the bill list, collects each item's `id`, and deletes them one
/// at a time (paced, in listing order). Returns the individual delete
/// responses in that same order.
pub async fn delete_all_bills(client: &BlipClient) -> Result<Vec<Value>, AppError> {
    let existing = client.get_bills().await?;
    let page: Page = serde_json::from_value(existing).unwrap_or_default();

    client.delete_bills(&page.string_field("id")).await
}
