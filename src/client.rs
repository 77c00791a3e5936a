//! HTTP client for the Blip API.
//!
//! This module provides utilities for:
//! - Building a `reqwest` client pre-baked with your API key and base URL
//! - Issuing the individual Blip calls (endusers, transactions, bills)
//! - Polling for batch processing completion
//!
//! Every call returns whatever JSON the remote yields. A non-success HTTP
//! status from Blip is deliberately not treated as an error: the body is
//! handed back to the caller unchanged.

use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;
use crate::models::batch::BatchStatus;

/// Header carrying the institution's API key on every remote call.
const API_KEY_HEADER: &str = "X-API-Key";

/// A Blip API client.
///
/// Wraps a `reqwest::Client` whose default headers already carry the
/// `X-API-Key` value from configuration, plus the base URL and the pacing
/// and poll schedule. Cloning is cheap (the inner client is `Arc`-backed),
/// so one instance is shared across all request handlers via Axum state.
#[derive(Debug, Clone)]
pub struct BlipClient {
    http: reqwest::Client,
    base_url: String,
    delete_pacing: Duration,
    poll_interval: Duration,
    poll_max_attempts: u32,
}

impl BlipClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `BLIP_API_URL` is not a valid absolute URL
    /// - `BLIP_API_KEY` contains characters that are invalid in a header value
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // Fail at startup on a malformed base URL rather than on first use
        url::Url::parse(&config.blip_api_url)
            .with_context(|| format!("BLIP_API_URL is not a valid URL: {}", config.blip_api_url))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&config.blip_api_key)
                .context("BLIP_API_KEY is not a valid header value")?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.blip_api_url.trim_end_matches('/').to_string(),
            delete_pacing: Duration::from_millis(config.delete_pacing_ms),
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            poll_max_attempts: config.poll_max_attempts,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Get all current endusers associated with your institution.
    ///
    /// Returns a paginated envelope whose `items` property holds enduser
    /// records. Because it's paginated, you may not see every result.
    pub async fn get_endusers(&self) -> Result<Value, AppError> {
        let resp = self.http.get(self.url("/endusers")).send().await?;
        Ok(resp.json().await?)
    }

    /// Create every enduser in the provided list.
    ///
    /// Each record's `oid` property should be a globally unique identifier
    /// from your own data sources, so endusers stay trackable across
    /// platforms. Returns the creation totals reported by Blip.
    pub async fn create_endusers(&self, endusers: &[Value]) -> Result<Value, AppError> {
        let resp = self
            .http
            .post(self.url("/endusers"))
            .json(endusers)
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Delete endusers by their origin ID values, in one call.
    pub async fn delete_endusers(&self, oids: &[String]) -> Result<Value, AppError> {
        let resp = self
            .http
            .delete(self.url("/endusers"))
            .json(oids)
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Get all available transactions for your institution.
    pub async fn get_transactions(&self) -> Result<Value, AppError> {
        let resp = self.http.get(self.url("/transactions")).send().await?;
        Ok(resp.json().await?)
    }

    /// Get the transactions belonging to one upload batch.
    ///
    /// The `batch_id` comes from an earlier [`create_transactions`] call.
    /// Useful for keeping track of a large group of transactions that spans
    /// multiple merchants and/or endusers.
    ///
    /// [`create_transactions`]: BlipClient::create_transactions
    pub async fn get_transactions_for_batch(&self, batch_id: &str) -> Result<Value, AppError> {
        let resp = self
            .http
            .get(self.url("/transactions"))
            .query(&[("batch_id", batch_id)])
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Create the provided transactions.
    ///
    /// The response carries a `batch_id` correlation token alongside the
    /// creation totals; see [`BlipClient::await_processed_transactions`].
    pub async fn create_transactions(&self, transactions: &[Value]) -> Result<Value, AppError> {
        let resp = self
            .http
            .post(self.url("/transactions"))
            .json(transactions)
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Delete one transaction by its oid.
    pub async fn delete_transaction(&self, oid: &str) -> Result<Value, AppError> {
        let resp = self
            .http
            .delete(self.url(&format!("/transactions/{oid}")))
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Delete many transactions, one remote call per oid.
    ///
    /// Issues the deletes in input order and returns the individual remote
    /// responses in the same order. A short pause runs between calls to
    /// avoid flooding the API.
    pub async fn delete_transactions(&self, oids: &[String]) -> Result<Vec<Value>, AppError> {
        let mut deleted = Vec::with_capacity(oids.len());
        for oid in oids {
            deleted.push(self.delete_transaction(oid).await?);
            tokio::time::sleep(self.delete_pacing).await;
        }
        Ok(deleted)
    }

    /// Get the bills Blip has identified from your endusers' transactions.
    pub async fn get_bills(&self) -> Result<Value, AppError> {
        let resp = self.http.get(self.url("/bills")).send().await?;
        Ok(resp.json().await?)
    }

    /// Get all identified bills for one enduser.
    pub async fn get_bills_for_enduser(&self, enduser_oid: &str) -> Result<Value, AppError> {
        let resp = self
            .http
            .get(self.url("/bills"))
            .query(&[("enduser_oid", enduser_oid)])
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Delete one bill by its Blip-assigned ID.
    pub async fn delete_bill(&self, bill_id: &str) -> Result<Value, AppError> {
        let resp = self
            .http
            .delete(self.url(&format!("/bills/{bill_id}")))
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Delete many bills, one remote call per ID.
    ///
    /// Same ordering and pacing behavior as
    /// [`BlipClient::delete_transactions`].
    pub async fn delete_bills(&self, bill_ids: &[String]) -> Result<Vec<Value>, AppError> {
        let mut deleted = Vec::with_capacity(bill_ids.len());
        for bill_id in bill_ids {
            deleted.push(self.delete_bill(bill_id).await?);
            tokio::time::sleep(self.delete_pacing).await;
        }
        Ok(deleted)
    }

    /// Fetch the processing status of one upload batch.
    pub async fn get_batch_status(&self, batch_id: &str) -> Result<Value, AppError> {
        let resp = self
            .http
            .get(self.url("/transactions/status"))
            .query(&[("batch_id", batch_id)])
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// Poll until a batch of transactions is done processing.
    ///
    /// Checks the status endpoint up to `POLL_MAX_ATTEMPTS` times (default
    /// 10), sleeping `POLL_INTERVAL_SECS` (default 5) between checks. A
    /// fixed schedule, no jitter, no backoff growth.
    ///
    /// # Errors
    ///
    /// - [`AppError::BatchTimeout`] if the loop completes without ever
    ///   seeing a "complete" status
    /// - [`AppError::Upstream`] if any individual status request fails
    ///
    /// # Returns
    ///
    /// The raw status response that reported completion.
    pub async fn await_processed_transactions(&self, batch_id: &str) -> Result<Value, AppError> {
        for current_try in 0..self.poll_max_attempts {
            tracing::info!(
                current_try,
                max_tries = self.poll_max_attempts,
                "awaiting transactions processing"
            );

            let response = self.get_batch_status(batch_id).await?;

            let status: BatchStatus =
                serde_json::from_value(response.clone()).unwrap_or_default();
            if status.is_complete() {
                return Ok(response);
            }

            tracing::info!(
                status = status.status.as_deref().unwrap_or("unknown"),
                sleep_secs = self.poll_interval.as_secs(),
                "batch not complete, sleeping"
            );
            tokio::time::sleep(self.poll_interval).await;
        }

        Err(AppError::BatchTimeout)
    }
}
