//! Blip quickstart service.
//!
//! A small HTTP server demonstrating the Blip financial-transactions API.
//! Every route proxies to the remote API: create/list/delete endusers,
//! create/list/delete transactions, and fetch/delete the bills Blip
//! identifies from those transactions. A scripted `/workflow` route chains
//! the calls end to end, polling until a transaction batch finishes
//! processing.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Outbound Client**: reqwest, pre-baked with the `X-API-Key` header
//! - **Format**: JSON in, JSON out; remote bodies pass through unchanged

pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::client::BlipClient;

/// Shared state handed to every route handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The pre-configured Blip API client
    pub client: BlipClient,

    /// Directory holding the sample JSON files
    pub data_dir: String,
}

/// Build the application router.
///
/// All routes are GET: the quickstart is meant to be driven from a
/// browser, so even the create and delete commands sit behind plain links.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello::hello_world))
        // Enduser routes
        .route("/endusers/get", get(handlers::endusers::get_endusers))
        .route("/endusers/create", get(handlers::endusers::create_endusers))
        .route("/endusers/delete", get(handlers::endusers::delete_endusers))
        // Transaction routes
        .route(
            "/transactions/get",
            get(handlers::transactions::get_transactions),
        )
        .route(
            "/transactions/create",
            get(handlers::transactions::create_transactions),
        )
        .route(
            "/transactions/delete",
            get(handlers::transactions::delete_transactions),
        )
        // Bill routes
        .route("/bills/get", get(handlers::bills::get_bills))
        .route(
            "/bills/get/{enduser_oid}",
            get(handlers::bills::get_bills_for_enduser),
        )
        .route("/bills/delete", get(handlers::bills::delete_bills))
        // Reset and scripted workflow
        .route("/reset", get(handlers::workflow::reset))
        .route("/workflow", get(handlers::workflow::workflow))
        // Add request tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share the Blip client with all handlers via State extraction
        .with_state(state)
}
