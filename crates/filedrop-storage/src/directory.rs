use crate::traits::{Destination, StorageError, StorageResult, StoredUpload};
use crate::DestinationKind;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncRead;
use uuid::Uuid;

/// Directory-backed destination: one generated file per upload
#[derive(Clone, Debug)]
pub struct DirectoryDestination {
    base_path: PathBuf,
}

impl DirectoryDestination {
    /// Create a new DirectoryDestination instance
    ///
    /// The directory is created if absent.
    ///
    /// # Arguments
    /// * `base_path` - Save directory (e.g., "/var/lib/filedrop/uploads")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create save directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(DirectoryDestination { base_path })
    }

    /// Generate a stored file name, independent of anything the client sent
    fn generate_name() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Convert a stored file name to a path inside the save directory
    ///
    /// Names are single path components made of ASCII alphanumerics, so the joined
    /// path cannot escape the base directory.
    fn name_to_path(&self, name: &str) -> StorageResult<PathBuf> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StorageError::InvalidName(format!(
                "'{}' is not a generated file name",
                name
            )));
        }

        Ok(self.base_path.join(name))
    }

    /// Best-effort removal of a partially written file
    async fn remove_partial(path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to remove partial upload"
            );
        }
    }
}

#[async_trait]
impl Destination for DirectoryDestination {
    async fn persist(
        &self,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StorageResult<StoredUpload> {
        let name = Self::generate_name();
        let path = self.name_to_path(&name)?;
        let start = std::time::Instant::now();

        // create_new: a name collision fails instead of overwriting another upload
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let bytes_copied = match tokio::io::copy(reader, &mut file).await {
            Ok(bytes) => bytes,
            Err(e) => {
                drop(file);
                Self::remove_partial(&path).await;
                return Err(StorageError::UploadFailed(format!(
                    "Failed to write stream to file {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        if let Err(e) = file.sync_all().await {
            drop(file);
            Self::remove_partial(&path).await;
            return Err(StorageError::UploadFailed(format!(
                "Failed to sync file {}: {}",
                path.display(),
                e
            )));
        }

        tracing::info!(
            path = %path.display(),
            name = %name,
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Directory upload successful"
        );

        Ok(StoredUpload {
            location: path.display().to_string(),
            path: Some(path),
            bytes_written: bytes_copied,
        })
    }

    fn kind(&self) -> DestinationKind {
        DestinationKind::Directory
    }
}

#[cfg(all(test, feature = "storage-directory"))]
mod tests {
    use super::*;
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tempfile::tempdir;
    use tokio::io::ReadBuf;

    /// Yields one chunk, then fails.
    struct FailingReader {
        sent: bool,
    }

    impl AsyncRead for FailingReader {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            if self.sent {
                return Poll::Ready(Err(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "client went away",
                )));
            }
            self.sent = true;
            buf.put_slice(b"partial");
            Poll::Ready(Ok(()))
        }
    }

    async fn file_count(dir: &Path) -> usize {
        let mut entries = fs::read_dir(dir).await.unwrap();
        let mut count = 0;
        while entries.next_entry().await.unwrap().is_some() {
            count += 1;
        }
        count
    }

    #[tokio::test]
    async fn test_directory_persist_round_trip() {
        let dir = tempdir().unwrap();
        let destination = DirectoryDestination::new(dir.path()).await.unwrap();
        let mut reader: &[u8] = b"hello";

        let stored = destination.persist(&mut reader).await.unwrap();

        assert_eq!(stored.bytes_written, 5);
        let path = stored.path.expect("directory destination returns a path");
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(fs::read(&path).await.unwrap(), b"hello");
        assert_eq!(file_count(dir.path()).await, 1);
    }

    #[tokio::test]
    async fn test_generated_names_are_unique() {
        let dir = tempdir().unwrap();
        let destination = DirectoryDestination::new(dir.path()).await.unwrap();

        let mut first: &[u8] = b"one";
        let mut second: &[u8] = b"two";
        let a = destination.persist(&mut first).await.unwrap();
        let b = destination.persist(&mut second).await.unwrap();

        assert_ne!(a.path, b.path);
        assert_eq!(file_count(dir.path()).await, 2);
    }

    #[tokio::test]
    async fn test_generated_name_shape() {
        let dir = tempdir().unwrap();
        let destination = DirectoryDestination::new(dir.path()).await.unwrap();
        let mut reader: &[u8] = b"x";

        let stored = destination.persist(&mut reader).await.unwrap();
        let name = stored
            .path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap()
            .to_string();

        assert_eq!(name.len(), 32);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!name.contains('.'));
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let destination = DirectoryDestination::new(&nested).await.unwrap();

        assert!(fs::metadata(&nested).await.unwrap().is_dir());
        assert_eq!(destination.base_path, nested);
    }

    #[tokio::test]
    async fn test_unusable_directory_is_config_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, b"not a directory").await.unwrap();

        let result = DirectoryDestination::new(blocker.join("uploads")).await;
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_failed_copy_removes_partial_file() {
        let dir = tempdir().unwrap();
        let destination = DirectoryDestination::new(dir.path()).await.unwrap();
        let mut reader = FailingReader { sent: false };

        let result = destination.persist(&mut reader).await;

        assert!(matches!(result, Err(StorageError::UploadFailed(_))));
        assert_eq!(file_count(dir.path()).await, 0);
    }

    #[test]
    fn test_name_validation_rejects_traversal() {
        let destination = DirectoryDestination {
            base_path: PathBuf::from("/srv/uploads"),
        };

        for name in ["", "..", "../etc/passwd", "a/b", "a.txt", "/etc/passwd"] {
            assert!(
                matches!(
                    destination.name_to_path(name),
                    Err(StorageError::InvalidName(_))
                ),
                "{name} should be rejected"
            );
        }

        assert_eq!(
            destination.name_to_path("abc123").unwrap(),
            PathBuf::from("/srv/uploads/abc123")
        );
    }
}
