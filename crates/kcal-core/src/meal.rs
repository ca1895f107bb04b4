//! Meal — a single logged food entry.
//!
//! Meals are point records: inserted with a timestamp, updated in place
//! (name and calories only), and deleted outright. All day-based grouping
//! is derived from `time` at read time; nothing aggregate is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged meal. `time` is when the meal was eaten; `created_at` is when
/// the row was recorded. A meal without a `time` never appears in any
/// day bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
  pub id:         Uuid,
  pub name:       String,
  pub calories:   u32,
  pub time:       Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::CalorieStore::insert_meal`].
/// `id` and `created_at` are always assigned by the store; a missing `time`
/// defaults to the moment of insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeal {
  pub name:     String,
  pub calories: u32,
  pub time:     Option<DateTime<Utc>>,
}

impl NewMeal {
  /// Convenience constructor leaving `time` to the store's "now" default.
  pub fn new(name: impl Into<String>, calories: u32) -> Self {
    Self {
      name: name.into(),
      calories,
      time: None,
    }
  }
}
