//! Prepared enduser commands.
//!
//! Both commands work off the sample endusers file, so the quickstart can
//! create a known set of endusers and later remove exactly that set.

use serde_json::Value;

use crate::client::BlipClient;
use crate::error::AppError;
use crate::fixtures;

/// Load the sample endusers and create them via the Blip API.
///
/// Returns the creation totals reported by Blip.
pub async fn create_sample_endusers(
    client: &BlipClient,
    data_dir: &str,
) -> Result<Value, AppError> {
    let endusers = fixtures::sample_endusers(data_dir).await?;
    client.create_endusers(&endusers).await
}

/// Delete the endusers named in the sample endusers file.
///
/// Collects the `oid` value off each sample record and issues a single
/// bulk delete. Returns the deletion totals reported by Blip.
pub async fn delete_sample_endusers(
    client: &BlipClient,
    data_dir: &str,
) -> Result<Value, AppError> {
    let endusers = fixtures::sample_endusers(data_dir).await?;

    let oids: Vec<String> = endusers
        .iter()
        .filter_map(|enduser| enduser.get("oid").and_then(Value::as_str))
        .map(str::to_string)
        .collect();

    client.delete_endusers(&oids).await
}
