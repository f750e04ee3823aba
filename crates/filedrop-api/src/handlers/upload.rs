use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{Method, StatusCode},
};
use filedrop_core::AppError;
use std::sync::Arc;

/// `POST /upload`: accept one multipart `file` field and hand it to the destination
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, String), HttpAppError> {
    let upload = extract_multipart_file(multipart?, state.max_upload_size_bytes).await?;

    tracing::info!(
        filename = %upload.filename,
        size_bytes = upload.size(),
        content_type = upload.content_type.as_deref().unwrap_or("unknown"),
        "Received file"
    );

    let mut reader: &[u8] = &upload.content;
    let stored = state.destination.persist(&mut reader).await?;

    tracing::info!(
        filename = %upload.filename,
        destination = %state.destination.kind(),
        location = %stored.location,
        bytes_written = stored.bytes_written,
        "Upload stored"
    );

    Ok((
        StatusCode::OK,
        format!("File '{}' uploaded successfully.", upload.filename),
    ))
}

/// Any other method on `/upload`
pub async fn upload_method_not_allowed(method: Method) -> HttpAppError {
    HttpAppError(AppError::MethodNotAllowed {
        method: method.to_string(),
        allowed: "POST",
    })
}
