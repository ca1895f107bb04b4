//! SQL schema for the kcal SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Column names mirror the remote collections the client was written
/// against (`meal_name`, `meal_calories`, `time`, `created_at`).
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS meals (
    id            TEXT PRIMARY KEY,
    meal_name     TEXT NOT NULL,
    meal_calories INTEGER NOT NULL CHECK (meal_calories >= 0),
    time          TEXT,              -- RFC 3339 UTC; NULL when unknown
    created_at    TEXT NOT NULL      -- RFC 3339 UTC; store-assigned
);

CREATE TABLE IF NOT EXISTS notes (
    id   TEXT PRIMARY KEY,
    text TEXT NOT NULL,
    time TEXT
);

-- Singleton by convention: reads take the lowest id. Updates require an
-- existing row; the client surface never creates one.
CREATE TABLE IF NOT EXISTS calories_config (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    total_calories INTEGER NOT NULL CHECK (total_calories > 0)
);

CREATE TABLE IF NOT EXISTS food_info (
    id    TEXT PRIMARY KEY,
    name  TEXT NOT NULL,
    notes TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS meals_time_idx ON meals(time);
CREATE INDEX IF NOT EXISTS notes_time_idx ON notes(time);

PRAGMA user_version = 1;
";
