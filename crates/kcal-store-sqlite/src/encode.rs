//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 UTC strings, so range predicates
//! on the `time` column compare correctly as text. UUIDs are stored as
//! hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use kcal_core::{food::FoodInfo, meal::Meal, note::Note};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Calories ─────────────────────────────────────────────────────────────────

pub fn decode_calories(raw: i64) -> Result<u32> {
  u32::try_from(raw)
    .map_err(|_| Error::Decode(format!("calorie count out of range: {raw}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `meals` row.
pub struct RawMeal {
  pub id:            String,
  pub meal_name:     String,
  pub meal_calories: i64,
  pub time:          Option<String>,
  pub created_at:    String,
}

impl RawMeal {
  pub fn into_meal(self) -> Result<Meal> {
    Ok(Meal {
      id:         decode_uuid(&self.id)?,
      name:       self.meal_name,
      calories:   decode_calories(self.meal_calories)?,
      time:       self.time.as_deref().map(decode_dt).transpose()?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `notes` row.
pub struct RawNote {
  pub id:   String,
  pub text: String,
  pub time: Option<String>,
}

impl RawNote {
  pub fn into_note(self) -> Result<Note> {
    Ok(Note {
      id:   decode_uuid(&self.id)?,
      text: self.text,
      time: self.time.as_deref().map(decode_dt).transpose()?,
    })
  }
}

/// Raw strings read directly from a `food_info` row.
pub struct RawFoodInfo {
  pub id:    String,
  pub name:  String,
  pub notes: String,
}

impl RawFoodInfo {
  pub fn into_food_info(self) -> Result<FoodInfo> {
    Ok(FoodInfo {
      id:    decode_uuid(&self.id)?,
      name:  self.name,
      notes: self.notes,
    })
  }
}
