//! Application state shared by all handlers.
//!
//! Everything here is built once at startup and read-only afterwards, so handlers
//! share it through an `Arc` without locking.

use crate::template::FormTemplate;
use filedrop_storage::Destination;
use std::sync::Arc;

pub struct AppState {
    pub form: FormTemplate,
    pub destination: Arc<dyn Destination>,
    /// Request body cap for `POST /upload`, in bytes
    pub max_upload_size_bytes: usize,
}

impl AppState {
    pub fn new(
        form: FormTemplate,
        destination: Arc<dyn Destination>,
        max_upload_size_bytes: usize,
    ) -> Self {
        Self {
            form,
            destination,
            max_upload_size_bytes,
        }
    }
}
