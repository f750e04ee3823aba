pub mod form;
pub mod upload;

use crate::error::HttpAppError;
use axum::http::{Method, Uri};
use filedrop_core::AppError;

/// Router fallback for unknown paths
///
/// The method is checked before the path, so only `GET` reaches the 404.
pub async fn not_found(method: Method, uri: Uri) -> HttpAppError {
    if method != Method::GET {
        return HttpAppError(AppError::MethodNotAllowed {
            method: method.to_string(),
            allowed: "GET",
        });
    }
    HttpAppError(AppError::NotFound(format!("No route for {}", uri.path())))
}
