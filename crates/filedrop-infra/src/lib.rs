//! Filedrop Infrastructure Library
//!
//! This crate provides shared infrastructure components for the Filedrop server:
//! - Middleware (request ID)
//! - Telemetry initialization (tracing subscriber)

#[cfg(feature = "middleware")]
pub mod middleware;

#[cfg(feature = "observability-basic")]
pub mod telemetry;

// Re-export commonly used types
#[cfg(feature = "middleware")]
pub use middleware::{get_request_id, request_id_middleware, RequestId};

#[cfg(feature = "observability-basic")]
pub use telemetry::{init_telemetry, shutdown_telemetry};
