// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID propagation, per-request spans and CORS configuration

/// CORS configuration
pub mod cors;
/// Request tracing layers
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{request_id_layers, trace_layer, REQUEST_ID_HEADER};
