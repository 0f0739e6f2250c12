use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AuthError;

/// The uniform JSON wrapper around every API response.
///
/// `code` is an application-level error indicator (0 = no error, errors live
/// in the 1001+ block in `codes`); the transport status is always 200, so
/// clients inspect `code`, not the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i32,
    pub msg: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub data: Value,
}

impl ApiResponse {
    /// Fresh envelope for one request, tied to its correlation id
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            code: 0,
            msg: String::new(),
            request_id: request_id.into(),
            data: Value::Null,
        }
    }

    /// Record an application-level failure
    pub fn set_error(&mut self, code: i32, msg: impl Into<String>) {
        self.code = code;
        self.msg = msg.into();
    }

    /// Record a token-gate failure
    pub fn set_auth_error(&mut self, err: &AuthError) {
        self.set_error(err.code(), err.message());
    }

    /// Backfill the default message. Called exactly once, when the envelope
    /// is emitted.
    pub fn finalize(&mut self) {
        if self.msg.is_empty() {
            self.msg = "success".to_string();
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(mut self) -> Response {
        self.finalize();
        // Transport status is always 200; `code` carries the outcome
        (StatusCode::OK, Json(self)).into_response()
    }
}
