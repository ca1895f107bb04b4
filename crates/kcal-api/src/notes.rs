//! Handlers for `/notes` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, Utc};
use kcal_core::{
  note::{NewNote, Note},
  store::CalorieStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub from: DateTime<Utc>,
  pub to:   DateTime<Utc>,
}

/// `GET /notes?from=<rfc3339>&to=<rfc3339>`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Note>>, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let notes = store
    .notes_between(params.from, params.to)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(notes))
}

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub text: String,
  pub time: Option<DateTime<Utc>>,
}

/// `POST /notes` — returns 201 + the stored [`Note`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if body.text.trim().is_empty() {
    return Err(ApiError::BadRequest("note text must not be empty".into()));
  }

  let note = store
    .insert_note(NewNote { text: body.text, time: body.time })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(note)))
}

/// `DELETE /notes/:id` — 204 whether or not the row still existed.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .delete_note(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
