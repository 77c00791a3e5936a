//! Data models for the handful of Blip responses this service inspects.
//!
//! Most Blip payloads pass through this service untouched as raw
//! `serde_json::Value`. The structs here exist only for responses where a
//! specific field is read locally (pagination items, batch correlation).

/// Batch creation receipt and batch processing status
pub mod batch;
/// Paginated list envelope
pub mod page;
