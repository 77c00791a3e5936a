//! Prepared commands layered over the Blip client.
//!
//! Services contain the quickstart's scripted behavior separated from HTTP
//! handlers: loading sample data, fanning out delete calls, and the
//! end-to-end workflow.

pub mod bill_service;
pub mod enduser_service;
pub mod transaction_service;
pub mod workflow_service;
