//! # Error Handling Middleware
//!
//! Maps [`SlotError`] values to HTTP status codes and JSON error bodies of the
//! form `{ "error": "<message>" }`.
//!
//! | Error | Status |
//! |-------|--------|
//! | `NotFound` | 404 |
//! | `Validation` | 400 |
//! | `Authentication` | 401 |
//! | `Authorization` | 403 |
//! | `Store` | 502, the store's message is passed through |
//! | `Internal` | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eagerbirds_core::errors::SlotError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use eagerbirds_api::middleware::error_handling::AppError;
/// use eagerbirds_core::errors::SlotError;
///
/// async fn handler(ready: bool) -> Result<Json<&'static str>, AppError> {
///     if !ready {
///         return Err(AppError(SlotError::Validation("Not ready".to_string())));
///     }
///     Ok(Json("ok"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SlotError::NotFound(_) => StatusCode::NOT_FOUND,
            SlotError::Validation(_) => StatusCode::BAD_REQUEST,
            SlotError::Authentication(_) => StatusCode::UNAUTHORIZED,
            SlotError::Authorization(_) => StatusCode::FORBIDDEN,
            SlotError::Store(_) => StatusCode::BAD_GATEWAY,
            SlotError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Store failures carry the backend's text as is.
    pub fn message(&self) -> String {
        match &self.0 {
            SlotError::Store(report) => report.to_string(),
            err => err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.message() }));

        (status, body).into_response()
    }
}

/// Allows `?` on `SlotResult` inside handlers.
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

/// Adapter failures reported through `eyre` are store failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SlotError::Store(err))
    }
}

/// Maps a SlotError to an HTTP response
pub fn map_error(err: SlotError) -> Response {
    AppError(err).into_response()
}
