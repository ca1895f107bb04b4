//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{TimeZone, Utc};
use kcal_core::{
  meal::NewMeal,
  note::NewNote,
  store::CalorieStore,
};
use uuid::Uuid;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn at(h: u32, m: u32) -> chrono::DateTime<Utc> {
  Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
}

// ─── Meals ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_meal_defaults_time_to_now() {
  let s = store().await;

  let before = Utc::now();
  let meal = s.insert_meal(NewMeal::new("Oatmeal", 320)).await.unwrap();
  let after = Utc::now();

  let time = meal.time.expect("defaulted time");
  assert!(time >= before && time <= after);
  assert_eq!(meal.created_at, time);
}

#[tokio::test]
async fn insert_meal_keeps_explicit_time() {
  let s = store().await;

  let mut input = NewMeal::new("Lunch", 650);
  input.time = Some(at(12, 30));
  let meal = s.insert_meal(input).await.unwrap();

  assert_eq!(meal.time, Some(at(12, 30)));
}

#[tokio::test]
async fn meals_between_is_inclusive_and_ordered() {
  let s = store().await;

  for (name, calories, time) in [
    ("Dinner", 800, at(19, 0)),
    ("Breakfast", 300, at(8, 0)),
    ("Lunch", 600, at(12, 0)),
  ] {
    let mut input = NewMeal::new(name, calories);
    input.time = Some(time);
    s.insert_meal(input).await.unwrap();
  }

  // Bounds land exactly on the first and last meal — both included.
  let meals = s.meals_between(at(8, 0), at(19, 0)).await.unwrap();
  let names: Vec<_> = meals.iter().map(|m| m.name.as_str()).collect();
  assert_eq!(names, ["Breakfast", "Lunch", "Dinner"]);
}

#[tokio::test]
async fn meals_between_excludes_outside_the_bounds() {
  let s = store().await;

  let mut input = NewMeal::new("Midnight snack", 150);
  input.time = Some(at(23, 50));
  s.insert_meal(input).await.unwrap();

  let meals = s.meals_between(at(8, 0), at(19, 0)).await.unwrap();
  assert!(meals.is_empty());
}

#[tokio::test]
async fn update_meal_changes_name_and_calories_but_not_time() {
  let s = store().await;

  let mut input = NewMeal::new("Tost", 200);
  input.time = Some(at(9, 0));
  let meal = s.insert_meal(input).await.unwrap();

  let updated = s
    .update_meal(meal.id, "Toast".into(), 250)
    .await
    .unwrap();

  assert_eq!(updated.id, meal.id);
  assert_eq!(updated.name, "Toast");
  assert_eq!(updated.calories, 250);
  assert_eq!(updated.time, meal.time);
}

#[tokio::test]
async fn update_missing_meal_fails() {
  let s = store().await;
  let result = s.update_meal(Uuid::new_v4(), "x".into(), 1).await;
  assert!(matches!(
    result,
    Err(Error::Core(kcal_core::Error::MealNotFound(_)))
  ));
}

#[tokio::test]
async fn delete_meal_removes_the_row_and_is_idempotent() {
  let s = store().await;

  let mut input = NewMeal::new("Cake", 450);
  input.time = Some(at(15, 0));
  let meal = s.insert_meal(input).await.unwrap();

  s.delete_meal(meal.id).await.unwrap();
  let meals = s.meals_between(at(0, 0), at(23, 59)).await.unwrap();
  assert!(meals.is_empty());

  // Second delete of the same id is a no-op.
  s.delete_meal(meal.id).await.unwrap();
}

// ─── Notes ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_list_notes_in_range() {
  let s = store().await;

  let mut input = NewNote::new("slept badly, craving sugar");
  input.time = Some(at(10, 0));
  let note = s.insert_note(input).await.unwrap();

  let notes = s.notes_between(at(0, 0), at(23, 59)).await.unwrap();
  assert_eq!(notes.len(), 1);
  assert_eq!(notes[0].id, note.id);
  assert_eq!(notes[0].text, "slept badly, craving sugar");
}

#[tokio::test]
async fn insert_note_defaults_time_to_now() {
  let s = store().await;
  let note = s.insert_note(NewNote::new("hydrate")).await.unwrap();
  assert!(note.time.is_some());
}

#[tokio::test]
async fn delete_note_removes_the_row() {
  let s = store().await;

  let mut input = NewNote::new("temp");
  input.time = Some(at(10, 0));
  let note = s.insert_note(input).await.unwrap();

  s.delete_note(note.id).await.unwrap();
  let notes = s.notes_between(at(0, 0), at(23, 59)).await.unwrap();
  assert!(notes.is_empty());
}

// ─── Daily goal ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn daily_goal_is_none_when_table_is_empty() {
  let s = store().await;
  assert!(s.daily_goal().await.unwrap().is_none());
}

#[tokio::test]
async fn daily_goal_reads_the_lowest_id_row() {
  let s = store().await;

  let first = s.seed_goal(1800).await.unwrap();
  s.seed_goal(2500).await.unwrap();

  let goal = s.daily_goal().await.unwrap().expect("goal row");
  assert_eq!(goal.id, first.id);
  assert_eq!(goal.total_calories, 1800);
}

#[tokio::test]
async fn update_daily_goal_changes_the_existing_row() {
  let s = store().await;
  let seeded = s.seed_goal(1800).await.unwrap();

  let updated = s.update_daily_goal(seeded.id, 2000).await.unwrap();
  assert_eq!(updated.total_calories, 2000);

  let goal = s.daily_goal().await.unwrap().expect("goal row");
  assert_eq!(goal.total_calories, 2000);
}

#[tokio::test]
async fn update_daily_goal_without_a_row_fails() {
  let s = store().await;
  let result = s.update_daily_goal(1, 2000).await;
  assert!(matches!(
    result,
    Err(Error::Core(kcal_core::Error::GoalNotConfigured))
  ));
}

// ─── Food info ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn food_info_roundtrip_ordered_by_name() {
  let s = store().await;

  s.insert_food_info("Rice".into(), "1 cup cooked ≈ 200 kcal".into())
    .await
    .unwrap();
  s.insert_food_info("Apple".into(), "medium ≈ 95 kcal".into())
    .await
    .unwrap();

  let all = s.list_food_info().await.unwrap();
  let names: Vec<_> = all.iter().map(|f| f.name.as_str()).collect();
  assert_eq!(names, ["Apple", "Rice"]);
}

#[tokio::test]
async fn delete_food_info_removes_the_entry() {
  let s = store().await;

  let info = s
    .insert_food_info("Banana".into(), "large ≈ 120 kcal".into())
    .await
    .unwrap();
  s.delete_food_info(info.id).await.unwrap();

  assert!(s.list_food_info().await.unwrap().is_empty());
}
