//! Success responses
//!
//! Handlers wrap the shared `ApiResponse` envelope in `Reply` so the HTTP
//! status always matches the envelope's `status` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use blog_shared::ApiResponse;
use serde::Serialize;

/// JSON envelope response
#[derive(Debug)]
pub struct Reply<T>(pub ApiResponse<T>);

impl<T> Reply<T> {
    /// 200 with `data`
    pub fn ok(data: T) -> Self {
        Reply(ApiResponse::ok(data))
    }
}

impl Reply<()> {
    /// 200 with only a message
    pub fn message(message: impl Into<String>) -> Self {
        Reply(ApiResponse::message(StatusCode::OK.as_u16(), message))
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0)).into_response()
    }
}
