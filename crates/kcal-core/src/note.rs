//! Note — a free-text daily observation.
//!
//! Same lifecycle as a meal but with no calorie value: inserted with a
//! timestamp, deleted outright, never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
  pub id:   Uuid,
  pub text: String,
  pub time: Option<DateTime<Utc>>,
}

/// Input to [`crate::store::CalorieStore::insert_note`].
/// A missing `time` defaults to the moment of insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNote {
  pub text: String,
  pub time: Option<DateTime<Utc>>,
}

impl NewNote {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into(), time: None }
  }
}
