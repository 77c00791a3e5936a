//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (URL params, shared state)
//! 2. Calls the Blip client or a prepared command
//! 3. Returns the resulting JSON unchanged

/// Bill endpoints
pub mod bills;
/// Enduser endpoints
pub mod endusers;
/// Hello-world landing route
pub mod hello;
/// Transaction endpoints
pub mod transactions;
/// Reset and scripted-workflow endpoints
pub mod workflow;
