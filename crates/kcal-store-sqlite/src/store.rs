//! [`SqliteStore`] — the SQLite implementation of [`CalorieStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use kcal_core::{
  food::FoodInfo,
  goal::CaloriesConfig,
  meal::{Meal, NewMeal},
  note::{NewNote, Note},
  store::CalorieStore,
};

use crate::{
  encode::{RawFoodInfo, RawMeal, RawNote, encode_dt, encode_uuid},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A kcal record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Create the initial `calories_config` row. The client surface can only
  /// update an existing row, so first-time setup goes through here (the
  /// server's `--init-goal` flag) or through direct SQL.
  pub async fn seed_goal(&self, total_calories: u32) -> Result<CaloriesConfig> {
    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO calories_config (total_calories) VALUES (?1)",
          rusqlite::params![total_calories],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(CaloriesConfig { id, total_calories })
  }

  async fn get_meal(&self, id: Uuid) -> Result<Option<Meal>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawMeal> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, meal_name, meal_calories, time, created_at
               FROM meals WHERE id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawMeal {
                  id:            row.get(0)?,
                  meal_name:     row.get(1)?,
                  meal_calories: row.get(2)?,
                  time:          row.get(3)?,
                  created_at:    row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawMeal::into_meal).transpose()
  }
}

// ─── CalorieStore impl ───────────────────────────────────────────────────────

impl CalorieStore for SqliteStore {
  type Error = Error;

  // ── Meals ─────────────────────────────────────────────────────────────────

  async fn meals_between(
    &self,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> Result<Vec<Meal>> {
    let from_str = encode_dt(from);
    let to_str = encode_dt(to);

    let raws: Vec<RawMeal> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, meal_name, meal_calories, time, created_at
           FROM meals
           WHERE time IS NOT NULL AND time >= ?1 AND time <= ?2
           ORDER BY time ASC",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![from_str, to_str], |row| {
            Ok(RawMeal {
              id:            row.get(0)?,
              meal_name:     row.get(1)?,
              meal_calories: row.get(2)?,
              time:          row.get(3)?,
              created_at:    row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawMeal::into_meal).collect()
  }

  async fn insert_meal(&self, input: NewMeal) -> Result<Meal> {
    let now = Utc::now();
    let meal = Meal {
      id:         Uuid::new_v4(),
      name:       input.name,
      calories:   input.calories,
      // A missing time defaults to the moment of insertion.
      time:       Some(input.time.unwrap_or(now)),
      created_at: now,
    };

    let id_str = encode_uuid(meal.id);
    let name = meal.name.clone();
    let calories = meal.calories;
    let time_str = meal.time.map(encode_dt);
    let created_str = encode_dt(meal.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO meals (id, meal_name, meal_calories, time, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, name, calories, time_str, created_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(meal)
  }

  async fn update_meal(
    &self,
    id: Uuid,
    name: String,
    calories: u32,
  ) -> Result<Meal> {
    let id_str = encode_uuid(id);

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE meals SET meal_name = ?2, meal_calories = ?3 WHERE id = ?1",
          rusqlite::params![id_str, name, calories],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::Core(kcal_core::Error::MealNotFound(id)));
    }

    self
      .get_meal(id)
      .await?
      .ok_or(Error::Core(kcal_core::Error::MealNotFound(id)))
  }

  async fn delete_meal(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM meals WHERE id = ?1", rusqlite::params![
          id_str
        ])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Notes ─────────────────────────────────────────────────────────────────

  async fn notes_between(
    &self,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> Result<Vec<Note>> {
    let from_str = encode_dt(from);
    let to_str = encode_dt(to);

    let raws: Vec<RawNote> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, text, time FROM notes
           WHERE time IS NOT NULL AND time >= ?1 AND time <= ?2
           ORDER BY time ASC",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![from_str, to_str], |row| {
            Ok(RawNote {
              id:   row.get(0)?,
              text: row.get(1)?,
              time: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawNote::into_note).collect()
  }

  async fn insert_note(&self, input: NewNote) -> Result<Note> {
    let note = Note {
      id:   Uuid::new_v4(),
      text: input.text,
      time: Some(input.time.unwrap_or_else(Utc::now)),
    };

    let id_str = encode_uuid(note.id);
    let text = note.text.clone();
    let time_str = note.time.map(encode_dt);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO notes (id, text, time) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, text, time_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(note)
  }

  async fn delete_note(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM notes WHERE id = ?1", rusqlite::params![
          id_str
        ])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Daily goal ────────────────────────────────────────────────────────────

  async fn daily_goal(&self) -> Result<Option<CaloriesConfig>> {
    let row: Option<(i64, i64)> = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, total_calories FROM calories_config
               ORDER BY id ASC LIMIT 1",
              [],
              |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?,
        )
      })
      .await?;

    row
      .map(|(id, total)| {
        Ok(CaloriesConfig {
          id,
          total_calories: crate::encode::decode_calories(total)?,
        })
      })
      .transpose()
  }

  async fn update_daily_goal(
    &self,
    id: i64,
    total_calories: u32,
  ) -> Result<CaloriesConfig> {
    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE calories_config SET total_calories = ?2 WHERE id = ?1",
          rusqlite::params![id, total_calories],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::Core(kcal_core::Error::GoalNotConfigured));
    }

    Ok(CaloriesConfig { id, total_calories })
  }

  // ── Food info ─────────────────────────────────────────────────────────────

  async fn list_food_info(&self) -> Result<Vec<FoodInfo>> {
    let raws: Vec<RawFoodInfo> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, notes FROM food_info ORDER BY name ASC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawFoodInfo {
              id:    row.get(0)?,
              name:  row.get(1)?,
              notes: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawFoodInfo::into_food_info).collect()
  }

  async fn insert_food_info(
    &self,
    name: String,
    notes: String,
  ) -> Result<FoodInfo> {
    let info = FoodInfo { id: Uuid::new_v4(), name, notes };

    let id_str = encode_uuid(info.id);
    let name = info.name.clone();
    let notes = info.notes.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO food_info (id, name, notes) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, name, notes],
        )?;
        Ok(())
      })
      .await?;

    Ok(info)
  }

  async fn delete_food_info(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM food_info WHERE id = ?1", rusqlite::params![
          id_str
        ])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
