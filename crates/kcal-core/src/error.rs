//! Error types for `kcal-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("meal not found: {0}")]
  MealNotFound(Uuid),

  #[error("note not found: {0}")]
  NoteNotFound(Uuid),

  #[error("food info entry not found: {0}")]
  FoodInfoNotFound(Uuid),

  /// The goal update path requires a pre-existing `calories_config` row;
  /// creating the first row is not supported from the client surface.
  #[error("no daily goal row is configured")]
  GoalNotConfigured,
}

impl Error {
  /// True for errors that mean "the addressed record does not exist",
  /// which API layers map to a 404.
  pub fn is_not_found(&self) -> bool {
    matches!(
      self,
      Error::MealNotFound(_)
        | Error::NoteNotFound(_)
        | Error::FoodInfoNotFound(_)
        | Error::GoalNotConfigured
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
