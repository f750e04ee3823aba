//! Filedrop API Library
//!
//! This crate provides the HTTP handlers, the upload form template and application setup.

// Module declarations
mod handlers;
mod utils;

// Public modules
pub mod error;
pub mod setup;
pub mod state;
pub mod template;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
pub use template::FormTemplate;
