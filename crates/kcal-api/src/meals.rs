//! Handlers for `/meals` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/meals?from=..&to=..` | Inclusive RFC 3339 bounds on `time` |
//! | `POST`   | `/meals` | Body: [`CreateBody`]; returns 201 + stored meal |
//! | `PUT`    | `/meals/:id` | Body: [`UpdateBody`]; name and calories only |
//! | `DELETE` | `/meals/:id` | Idempotent; returns 204 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, Utc};
use kcal_core::{
  meal::{Meal, NewMeal},
  store::CalorieStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub from: DateTime<Utc>,
  pub to:   DateTime<Utc>,
}

/// `GET /meals?from=<rfc3339>&to=<rfc3339>`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Meal>>, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let meals = store
    .meals_between(params.from, params.to)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(meals))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:     String,
  pub calories: u32,
  /// Optional; the store defaults a missing time to now.
  pub time:     Option<DateTime<Utc>>,
}

/// `POST /meals` — returns 201 + the stored [`Meal`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if body.name.trim().is_empty() {
    return Err(ApiError::BadRequest("meal name must not be empty".into()));
  }
  if body.calories == 0 {
    return Err(ApiError::BadRequest("calories must be positive".into()));
  }

  let meal = store
    .insert_meal(NewMeal {
      name:     body.name,
      calories: body.calories,
      time:     body.time,
    })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(meal)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
  pub name:     String,
  pub calories: u32,
}

/// `PUT /meals/:id`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<UpdateBody>,
) -> Result<Json<Meal>, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if body.name.trim().is_empty() {
    return Err(ApiError::BadRequest("meal name must not be empty".into()));
  }
  if body.calories == 0 {
    return Err(ApiError::BadRequest("calories must be positive".into()));
  }

  let meal = store
    .update_meal(id, body.name, body.calories)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(meal))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /meals/:id` — 204 whether or not the row still existed.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .delete_meal(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
