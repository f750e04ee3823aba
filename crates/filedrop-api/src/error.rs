//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`. Use
//! `AppError` (or types that implement `Into<HttpAppError>`) for errors so every
//! failure is logged once and rendered as a plain-text body with the right status.

use axum::{
    extract::multipart::MultipartRejection,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use filedrop_core::{AppError, ErrorMetadata, LogLevel};
use filedrop_storage::StorageError;

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from filedrop-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let mut response = (status, app_error.client_message()).into_response();
        if let Some(allowed) = app_error.allowed_methods() {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(allowed));
        }
        response
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(AppError::Storage(err.to_string()))
    }
}

impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(AppError::BadRequest(format!(
            "Failed to parse multipart form: {}",
            rejection.body_text()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error_is_internal() {
        let storage_err = StorageError::UploadFailed("disk full".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::Storage(msg) => assert!(msg.contains("disk full")),
            other => panic!("Expected Storage variant, got {:?}", other),
        }
    }

    #[test]
    fn test_from_storage_config_error() {
        let HttpAppError(app_err) =
            StorageError::ConfigError("save directory missing".to_string()).into();
        assert_eq!(app_err.http_status_code(), 500);
    }

    #[test]
    fn test_bad_request_response() {
        let response =
            HttpAppError(AppError::BadRequest("no file field".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::ALLOW).is_none());
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = HttpAppError(AppError::MethodNotAllowed {
            method: "DELETE".to_string(),
            allowed: "POST",
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    }

    #[test]
    fn test_storage_error_response_is_500() {
        let response: Response = HttpAppError::from(StorageError::UploadFailed(
            "Failed to create file /srv/uploads/x".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
