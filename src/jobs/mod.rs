// ABOUTME: Background jobs run alongside the HTTP server
// ABOUTME: Currently the production keep-alive ping

/// Periodic self-ping that keeps an idle hosted instance awake
pub mod keepalive;

pub use keepalive::{KeepAliveHandle, KeepAliveJob};
