//! Error types module
//!
//! All request failures are unified under the `AppError` enum. Each variant
//! describes its own HTTP presentation through `ErrorMetadata`, so the API crate
//! can log and render any error the same way.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for routing misses like unknown paths
    Debug,
    /// Warning level - for malformed client input
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "BAD_REQUEST")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (never contains internal details)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method {method} not allowed, expected {allowed}")]
    MethodNotAllowed {
        method: String,
        allowed: &'static str,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Template error: {0}")]
    Template(String),
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::BadRequest(_) => (400, "BAD_REQUEST", LogLevel::Warn),
        AppError::NotFound(_) => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::MethodNotAllowed { .. } => (405, "METHOD_NOT_ALLOWED", LogLevel::Debug),
        AppError::Storage(_) => (500, "STORAGE_ERROR", LogLevel::Error),
        AppError::Template(_) => (500, "TEMPLATE_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for log fields
    pub fn error_type(&self) -> &str {
        match self {
            AppError::BadRequest(_) => "BadRequest",
            AppError::NotFound(_) => "NotFound",
            AppError::MethodNotAllowed { .. } => "MethodNotAllowed",
            AppError::Storage(_) => "Storage",
            AppError::Template(_) => "Template",
        }
    }

    /// The `Allow` header value for a 405 response.
    pub fn allowed_methods(&self) -> Option<&'static str> {
        match self {
            AppError::MethodNotAllowed { allowed, .. } => Some(*allowed),
            _ => None,
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(_) => "Bad Request".to_string(),
            AppError::NotFound(_) => "404 page not found".to_string(),
            AppError::MethodNotAllowed { .. } => "Method Not Allowed".to_string(),
            AppError::Storage(_) | AppError::Template(_) => {
                "Internal Server Error".to_string()
            }
        }
    }
}
