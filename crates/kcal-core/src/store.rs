//! The `CalorieStore` trait.
//!
//! Implemented by storage backends (e.g. `kcal-store-sqlite`). Higher
//! layers (`kcal-api`, `kcal-cli`) depend on this abstraction, not on any
//! concrete backend.
//!
//! Every operation is a single request/response round trip; there is no
//! transaction coordination across calls. Consistency after a write is the
//! caller's job, via invalidate-and-refetch of the affected reads.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
  food::FoodInfo,
  goal::CaloriesConfig,
  meal::{Meal, NewMeal},
  note::{NewNote, Note},
};

/// Abstraction over the kcal record store.
pub trait CalorieStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Meals ─────────────────────────────────────────────────────────────

  /// All meals with `time` in `[from, to]` inclusive, ordered by `time`
  /// ascending. Meals with no `time` are never returned by a range read.
  fn meals_between(
    &self,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> impl Future<Output = Result<Vec<Meal>, Self::Error>> + Send + '_;

  /// Persist a new meal. `time` defaults to now when the input omits it;
  /// `id` and `created_at` are assigned by the store.
  fn insert_meal(
    &self,
    input: NewMeal,
  ) -> impl Future<Output = Result<Meal, Self::Error>> + Send + '_;

  /// Rename and recount an existing meal. `time` is never changed here.
  fn update_meal(
    &self,
    id: Uuid,
    name: String,
    calories: u32,
  ) -> impl Future<Output = Result<Meal, Self::Error>> + Send + '_;

  /// Delete a meal. Deleting an id that no longer exists is a no-op.
  fn delete_meal(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Notes ─────────────────────────────────────────────────────────────

  /// All notes with `time` in `[from, to]` inclusive, ordered by `time`.
  fn notes_between(
    &self,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> impl Future<Output = Result<Vec<Note>, Self::Error>> + Send + '_;

  fn insert_note(
    &self,
    input: NewNote,
  ) -> impl Future<Output = Result<Note, Self::Error>> + Send + '_;

  fn delete_note(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Daily goal ────────────────────────────────────────────────────────

  /// The authoritative goal row — the one with the lowest id — or `None`
  /// when the table is empty.
  fn daily_goal(
    &self,
  ) -> impl Future<Output = Result<Option<CaloriesConfig>, Self::Error>> + Send + '_;

  /// Update an existing goal row. Fails when `id` does not exist: creating
  /// the first row is not supported from this surface.
  fn update_daily_goal(
    &self,
    id: i64,
    total_calories: u32,
  ) -> impl Future<Output = Result<CaloriesConfig, Self::Error>> + Send + '_;

  // ── Food info ─────────────────────────────────────────────────────────

  /// The whole lookup list, ordered by name.
  fn list_food_info(
    &self,
  ) -> impl Future<Output = Result<Vec<FoodInfo>, Self::Error>> + Send + '_;

  fn insert_food_info(
    &self,
    name: String,
    notes: String,
  ) -> impl Future<Output = Result<FoodInfo, Self::Error>> + Send + '_;

  fn delete_food_info(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
