//! Handlers for the `/food-info` endpoints — the auxiliary lookup list.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use kcal_core::{food::FoodInfo, store::CalorieStore};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

/// `GET /food-info`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<FoodInfo>>, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let all = store
    .list_food_info()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(all))
}

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:  String,
  pub notes: String,
}

/// `POST /food-info` — returns 201 + the stored entry.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if body.name.trim().is_empty() || body.notes.trim().is_empty() {
    return Err(ApiError::BadRequest(
      "food name and notes must not be empty".into(),
    ));
  }

  let info = store
    .insert_food_info(body.name, body.notes)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(info)))
}

/// `DELETE /food-info/:id` — 204 whether or not the row still existed.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .delete_food_info(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
