//! Food info — the auxiliary notes-lookup list.
//!
//! Independent of the daily note feature: a flat reference list of foods
//! and remarks ("half a cup is 200 kcal") shown in its own panel.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodInfo {
  pub id:    Uuid,
  pub name:  String,
  pub notes: String,
}
