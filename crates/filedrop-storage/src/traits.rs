//! Destination abstraction trait
//!
//! This module defines the Destination trait that all upload destinations must implement.

use crate::DestinationKind;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Where an upload ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Human-readable location for logs: `discard` or the file path.
    pub location: String,
    /// Filesystem path of the stored file; `None` when the bytes were dropped.
    pub path: Option<PathBuf>,
    pub bytes_written: u64,
}

/// Upload destination trait
///
/// The upload handler writes through this trait without knowing whether bytes are
/// dropped or persisted, so the same handler serves both configurations and tests
/// can inject a destination rooted in a temporary directory.
#[async_trait]
pub trait Destination: Send + Sync {
    /// Open a fresh target, copy the reader into it until EOF and close it.
    ///
    /// The target is closed on every exit path. Implementations that create files
    /// remove a partially written file when the copy fails.
    ///
    /// # Returns
    /// The location written and the number of bytes copied
    async fn persist(
        &self,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StorageResult<StoredUpload>;

    /// Get the destination type
    fn kind(&self) -> DestinationKind;
}
