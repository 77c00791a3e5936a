//! Batch correlation types.
//!
//! Creating transactions returns a `batch_id` token. It is the only value
//! this service keeps hold of between remote calls: it correlates a later
//! status poll with the upload that produced it.

use serde::Deserialize;

/// The receipt returned by `POST /transactions`.
///
/// Blip includes a `batch_id` alongside the creation totals. The workflow
/// reads it to poll for processing completion; everything else in the
/// response passes through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchReceipt {
    /// Correlation token for the uploaded batch, if the remote issued one
    #[serde(default)]
    pub batch_id: Option<String>,
}

/// The body returned by `GET /transactions/status?batch_id=`.
///
/// Processing is finished once `status` is the literal string `"complete"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchStatus {
    #[serde(default)]
    pub status: Option<String>,
}

impl BatchStatus {
    /// Whether the batch has finished processing.
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some("complete")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_complete_only_on_exact_literal() {
        let done: BatchStatus = serde_json::from_value(json!({"status": "complete"})).unwrap();
        let pending: BatchStatus = serde_json::from_value(json!({"status": "processing"})).unwrap();
        let absent: BatchStatus = serde_json::from_value(json!({})).unwrap();

        assert!(done.is_complete());
        assert!(!pending.is_complete());
        assert!(!absent.is_complete());
    }

    #[test]
    fn receipt_tolerates_missing_batch_id() {
        let receipt: BatchReceipt = serde_json::from_value(json!({"total": 12})).unwrap();
        assert!(receipt.batch_id.is_none());
    }
}
