#[cfg(feature = "storage-directory")]
use crate::DirectoryDestination;
use crate::{Destination, DestinationKind, DiscardDestination, StorageResult};
use filedrop_core::Config;
use std::sync::Arc;

/// Create an upload destination based on configuration
///
/// The directory destination creates its save directory here, so a failure is a
/// startup failure rather than a per-request one.
pub async fn create_destination(config: &Config) -> StorageResult<Arc<dyn Destination>> {
    match config.destination() {
        DestinationKind::Discard => Ok(Arc::new(DiscardDestination::new())),

        #[cfg(feature = "storage-directory")]
        DestinationKind::Directory => {
            let destination = DirectoryDestination::new(config.upload_dir()).await?;
            Ok(Arc::new(destination))
        }

        #[cfg(not(feature = "storage-directory"))]
        DestinationKind::Directory => Err(crate::StorageError::ConfigError(
            "Directory destination not available (storage-directory feature not enabled)"
                .to_string(),
        )),
    }
}
