//! Route table

use crate::handlers::{
    form::{form_method_not_allowed, render_form},
    not_found,
    upload::{upload_file, upload_method_not_allowed},
};
use crate::state::AppState;
use crate::utils::upload::MULTIPART_FRAMING_ALLOWANCE;
use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware,
    routing::{get, post},
    Router,
};
use filedrop_infra::{get_request_id, request_id_middleware};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// `GET` (and only `GET`) is served on `/`, `POST` (and only `POST`) on `/upload`.
/// Any other method gets 405, on `/` and on unknown paths alike; `GET` on an
/// unknown path gets 404. The body limit applies to the upload route alone.
pub fn setup_routes(state: Arc<AppState>) -> Router {
    // The file part itself is capped in `extract_multipart_file`
    let body_limit = DefaultBodyLimit::max(
        state
            .max_upload_size_bytes
            .saturating_add(MULTIPART_FRAMING_ALLOWANCE),
    );

    Router::new()
        .route(
            "/",
            get(render_form)
                .head(form_method_not_allowed)
                .fallback(form_method_not_allowed),
        )
        .route(
            "/upload",
            post(upload_file)
                .fallback(upload_method_not_allowed)
                .layer(body_limit),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = get_request_id(request).unwrap_or_default();
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        }))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
