//! Multipart extraction for the upload handler

use axum::extract::Multipart;
use bytes::{Bytes, BytesMut};
use filedrop_core::AppError;

/// Name of the form field carrying the upload
pub const FILE_FIELD: &str = "file";

/// Room for boundaries and part headers on top of the file size cap
pub const MULTIPART_FRAMING_ALLOWANCE: usize = 64 * 1024;

/// A file part read from a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied name, used for display and logging only
    pub filename: String,
    pub content_type: Option<String>,
    pub content: Bytes,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Extract the first `file` part from a multipart form.
///
/// Other fields are skipped, as is a `file` part without a filename or with an
/// empty one (what a browser sends when no file was chosen). A later `file` part
/// is ignored once one has been read. A file part larger than `max_file_bytes`
/// and any error while reading the body are client errors.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
    max_file_bytes: usize,
) -> Result<UploadedFile, AppError> {
    let mut upload: Option<UploadedFile> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        if upload.is_some() || field.name() != Some(FILE_FIELD) {
            continue;
        }

        let Some(filename) = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
        else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);

        let mut content = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?
        {
            if content.len() + chunk.len() > max_file_bytes {
                return Err(AppError::BadRequest(format!(
                    "File '{}' exceeds the {} byte limit",
                    filename, max_file_bytes
                )));
            }
            content.extend_from_slice(&chunk);
        }

        upload = Some(UploadedFile {
            filename,
            content_type,
            content: content.freeze(),
        });
    }

    upload.ok_or_else(|| {
        AppError::BadRequest(format!("No '{}' field in multipart form", FILE_FIELD))
    })
}
