//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p filedrop-api`.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use filedrop_api::setup::routes;
use filedrop_api::{AppState, FormTemplate};
use filedrop_core::DestinationKind;
use filedrop_storage::{
    Destination, DirectoryDestination, DiscardDestination, StorageError, StorageResult,
    StoredUpload,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::AsyncRead;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Test application: server and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// The save directory used by the directory destination.
    pub fn upload_dir(&self) -> PathBuf {
        self.temp_dir.path().join("uploads")
    }

    /// Every file currently in the save directory (empty if it was never created).
    pub fn stored_files(&self) -> Vec<PathBuf> {
        files_in(&self.upload_dir())
    }
}

pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.map(|entry| entry.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

fn build_server(destination: Arc<dyn Destination>, max_upload_size_bytes: usize) -> TestServer {
    let form = FormTemplate::new().expect("Bundled form should compile");
    let state = Arc::new(AppState::new(form, destination, max_upload_size_bytes));
    let app = routes::setup_routes(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Setup test app saving uploads into a temporary directory.
pub async fn setup_directory_app() -> TestApp {
    setup_directory_app_with_limit(DEFAULT_MAX_UPLOAD_BYTES).await
}

/// Setup test app saving uploads into a temporary directory, with a custom body cap.
pub async fn setup_directory_app_with_limit(max_upload_size_bytes: usize) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let destination = DirectoryDestination::new(temp_dir.path().join("uploads"))
        .await
        .expect("Failed to create directory destination");

    TestApp {
        server: build_server(Arc::new(destination), max_upload_size_bytes),
        temp_dir,
    }
}

/// Setup test app with the discard destination.
pub async fn setup_discard_app() -> TestApp {
    TestApp {
        server: build_server(Arc::new(DiscardDestination::new()), DEFAULT_MAX_UPLOAD_BYTES),
        temp_dir: TempDir::new().expect("Failed to create temp dir"),
    }
}

/// Destination whose writes always fail.
pub struct FailingDestination;

#[async_trait]
impl Destination for FailingDestination {
    async fn persist(
        &self,
        _reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StorageResult<StoredUpload> {
        Err(StorageError::UploadFailed(
            "Failed to create file /srv/uploads/x: No space left on device".to_string(),
        ))
    }

    fn kind(&self) -> DestinationKind {
        DestinationKind::Directory
    }
}

/// Setup test app whose destination fails every write.
pub async fn setup_failing_app() -> TestApp {
    TestApp {
        server: build_server(Arc::new(FailingDestination), DEFAULT_MAX_UPLOAD_BYTES),
        temp_dir: TempDir::new().expect("Failed to create temp dir"),
    }
}
