//! Request extractors whose rejections use the crate's JSON error body.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body. Unlike [`axum::Json`], a body that fails to parse is
/// rejected as a 400 [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
