/**
 * Error Conversion
 *
 * `ApiError` implements `IntoResponse`, so handlers and extractors return it
 * directly. Internal errors are logged here, once, with their cause.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "User not found",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::ApiError;
use crate::shared::SharedError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        ApiError::Validation(SharedError::serialization(rejection.body_text()))
    }
}
