//! Request extractors with envelope-shaped rejections

use crate::error::ApiError;
use axum::extract::FromRequest;

/// `Json<T>` whose rejection renders as an `ApiError::Decode` envelope
/// instead of axum's plain-text body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Parse a blog id taken from the request path
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("invalid id: {}", raw)))
}
