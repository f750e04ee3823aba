use crate::traits::{Destination, StorageError, StorageResult, StoredUpload};
use crate::DestinationKind;
use async_trait::async_trait;
use tokio::io::AsyncRead;

const DISCARD_LOCATION: &str = "discard";

/// Destination that reads every byte and drops it
#[derive(Clone, Debug, Default)]
pub struct DiscardDestination;

impl DiscardDestination {
    pub fn new() -> Self {
        DiscardDestination
    }
}

#[async_trait]
impl Destination for DiscardDestination {
    async fn persist(
        &self,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StorageResult<StoredUpload> {
        let start = std::time::Instant::now();
        let mut sink = tokio::io::sink();

        let bytes_copied = tokio::io::copy(reader, &mut sink).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to drain upload: {}", e))
        })?;

        tracing::debug!(
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Discarded upload"
        );

        Ok(StoredUpload {
            location: DISCARD_LOCATION.to_string(),
            path: None,
            bytes_written: bytes_copied,
        })
    }

    fn kind(&self) -> DestinationKind {
        DestinationKind::Discard
    }
}
