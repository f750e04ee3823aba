//! Filedrop Core Library
//!
//! This crate provides the configuration, error taxonomy and shared types used by
//! the storage, infrastructure and API crates.

pub mod config;
pub mod destination_kind;
pub mod error;

// Re-export commonly used types
pub use config::{BaseConfig, Config, UploadConfig};
pub use destination_kind::DestinationKind;
pub use error::{AppError, ErrorMetadata, LogLevel};
