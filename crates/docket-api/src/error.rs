//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is reported as `{"error": <message>}` with the
//! matching status code, the shape shared by the whole HTTP surface.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Requested record does not exist → 404.
  #[error("{0}")]
  NotFound(String),

  /// Malformed or missing input → 400. No side effects occurred.
  #[error("{0}")]
  BadRequest(String),

  /// The write was rejected (duplicate title, type mismatch on a
  /// field, I/O failure); anything attempted was rolled back → 500
  /// with the failure message.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
