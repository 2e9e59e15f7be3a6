//! Axum-based HTTP surface: `GET /healthz` and `POST /generate`.
//!
//! - Request body size limit (2 MiB by default, configurable)
//! - Request timeout longer than the backend timeout, so a slow backend
//!   surfaces as a 500 from the pipeline rather than a 408
//! - CORS driven by `gateway.allow_origin`

mod handlers;
mod server;

pub use server::{build_app, build_state, run_gateway, run_gateway_with_listener};

use crate::pipeline::Pipeline;
use std::sync::Arc;

/// Added on top of the backend timeout to get the whole-request timeout.
pub const REQUEST_TIMEOUT_GRACE_SECS: u64 = 30;

pub const INVALID_PAYLOAD_ERROR: &str = "Invalid payload";
pub const GENERATION_FAILED_ERROR: &str = "Failed to generate agent manifest";

/// Shared state for all axum handlers. Read-only.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}
