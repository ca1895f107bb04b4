//! Handlers for the `/goal` endpoints.
//!
//! The goal is a singleton: `GET` returns the lowest-id config row (or
//! `null` when none exists), and `PUT /goal/:id` updates that existing row.
//! There is deliberately no create route — the first row is provisioned
//! server-side (`kcal-server --init-goal`).

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use kcal_core::{goal::CaloriesConfig, store::CalorieStore};
use serde::Deserialize;

use crate::error::ApiError;

/// `GET /goal`
pub async fn get_goal<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Option<CaloriesConfig>>, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let goal = store
    .daily_goal()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(goal))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
  pub total_calories: u32,
}

/// `PUT /goal/:id` — body: `{"total_calories": 1800}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<UpdateBody>,
) -> Result<Json<CaloriesConfig>, ApiError>
where
  S: CalorieStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if body.total_calories == 0 {
    return Err(ApiError::BadRequest(
      "total_calories must be positive".into(),
    ));
  }

  let goal = store
    .update_daily_goal(id, body.total_calories)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(goal))
}
