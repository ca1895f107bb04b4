//! The daily calorie goal — a singleton configuration row.
//!
//! Exactly one row is authoritative: the one with the lowest id. The goal
//! is a single global value for all dates; there is no per-day override.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaloriesConfig {
  pub id:             i64,
  pub total_calories: u32,
}
