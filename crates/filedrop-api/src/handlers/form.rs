use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::Method,
    response::Html,
};
use filedrop_core::AppError;
use std::sync::Arc;

/// `GET /`: the upload form
pub async fn render_form(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HttpAppError> {
    let page = state
        .form
        .render()
        .map_err(|e| AppError::Template(format!("Failed to render upload form: {}", e)))?;

    Ok(Html(page))
}

/// Any other method on `/`
pub async fn form_method_not_allowed(method: Method) -> HttpAppError {
    HttpAppError(AppError::MethodNotAllowed {
        method: method.to_string(),
        allowed: "GET",
    })
}
