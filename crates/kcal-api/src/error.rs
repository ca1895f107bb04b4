//! API error type and [`axum::response::IntoResponse`] implementation.

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
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => match core_error(e.as_ref()) {
        // Missing-record errors from the store surface as 404, with the
        // domain message rather than the backend's wrapping.
        Some(core) if core.is_not_found() => {
          (StatusCode::NOT_FOUND, core.to_string())
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
      },
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

/// Walk the source chain looking for a domain error. Store backends wrap
/// [`kcal_core::Error`] rather than replacing it, so not-found conditions
/// stay identifiable here.
fn core_error<'a>(
  mut err: &'a (dyn std::error::Error + 'static),
) -> Option<&'a kcal_core::Error> {
  loop {
    if let Some(core) = err.downcast_ref::<kcal_core::Error>() {
      return Some(core);
    }
    err = err.source()?;
  }
}
