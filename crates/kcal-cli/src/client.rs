//! Async HTTP client wrapping the kcal JSON API.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use kcal_core::{
  food::FoodInfo,
  goal::CaloriesConfig,
  meal::{Meal, NewMeal},
  note::Note,
};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

/// Connection settings for the kcal API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the kcal JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Surface a non-success response as an error carrying the server's
  /// message, so the status bar can show it verbatim.
  async fn checked(
    resp: reqwest::Response,
    what: &str,
  ) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(anyhow!("{what} → {status} {body}"))
  }

  // ── Meals ─────────────────────────────────────────────────────────────────

  /// `GET /api/meals?from=..&to=..`
  pub async fn meals_between(
    &self,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> Result<Vec<Meal>> {
    let resp = self
      .client
      .get(self.url("/meals"))
      .query(&[("from", from.to_rfc3339()), ("to", to.to_rfc3339())])
      .send()
      .await
      .context("GET /meals failed")?;
    Self::checked(resp, "GET /meals")
      .await?
      .json()
      .await
      .context("deserialising meals")
  }

  /// `POST /api/meals`
  pub async fn insert_meal(&self, input: &NewMeal) -> Result<Meal> {
    let resp = self
      .client
      .post(self.url("/meals"))
      .json(input)
      .send()
      .await
      .context("POST /meals failed")?;
    Self::checked(resp, "POST /meals")
      .await?
      .json()
      .await
      .context("deserialising inserted meal")
  }

  /// `PUT /api/meals/<id>`
  pub async fn update_meal(
    &self,
    id: Uuid,
    name: &str,
    calories: u32,
  ) -> Result<Meal> {
    let resp = self
      .client
      .put(self.url(&format!("/meals/{id}")))
      .json(&json!({ "name": name, "calories": calories }))
      .send()
      .await
      .context("PUT /meals failed")?;
    Self::checked(resp, "PUT /meals")
      .await?
      .json()
      .await
      .context("deserialising updated meal")
  }

  /// `DELETE /api/meals/<id>`
  pub async fn delete_meal(&self, id: Uuid) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/meals/{id}")))
      .send()
      .await
      .context("DELETE /meals failed")?;
    Self::checked(resp, "DELETE /meals").await?;
    Ok(())
  }

  // ── Notes ─────────────────────────────────────────────────────────────────

  /// `GET /api/notes?from=..&to=..`
  pub async fn notes_between(
    &self,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> Result<Vec<Note>> {
    let resp = self
      .client
      .get(self.url("/notes"))
      .query(&[("from", from.to_rfc3339()), ("to", to.to_rfc3339())])
      .send()
      .await
      .context("GET /notes failed")?;
    Self::checked(resp, "GET /notes")
      .await?
      .json()
      .await
      .context("deserialising notes")
  }

  /// `POST /api/notes`
  pub async fn insert_note(&self, text: &str) -> Result<Note> {
    let resp = self
      .client
      .post(self.url("/notes"))
      .json(&json!({ "text": text }))
      .send()
      .await
      .context("POST /notes failed")?;
    Self::checked(resp, "POST /notes")
      .await?
      .json()
      .await
      .context("deserialising inserted note")
  }

  /// `DELETE /api/notes/<id>`
  pub async fn delete_note(&self, id: Uuid) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/notes/{id}")))
      .send()
      .await
      .context("DELETE /notes failed")?;
    Self::checked(resp, "DELETE /notes").await?;
    Ok(())
  }

  // ── Daily goal ────────────────────────────────────────────────────────────

  /// `GET /api/goal` — `None` when no config row exists yet.
  pub async fn daily_goal(&self) -> Result<Option<CaloriesConfig>> {
    let resp = self
      .client
      .get(self.url("/goal"))
      .send()
      .await
      .context("GET /goal failed")?;
    Self::checked(resp, "GET /goal")
      .await?
      .json()
      .await
      .context("deserialising goal")
  }

  /// `PUT /api/goal/<id>`
  pub async fn update_goal(
    &self,
    id: i64,
    total_calories: u32,
  ) -> Result<CaloriesConfig> {
    let resp = self
      .client
      .put(self.url(&format!("/goal/{id}")))
      .json(&json!({ "total_calories": total_calories }))
      .send()
      .await
      .context("PUT /goal failed")?;
    Self::checked(resp, "PUT /goal")
      .await?
      .json()
      .await
      .context("deserialising updated goal")
  }

  // ── Food info ─────────────────────────────────────────────────────────────

  /// `GET /api/food-info`
  pub async fn list_food_info(&self) -> Result<Vec<FoodInfo>> {
    let resp = self
      .client
      .get(self.url("/food-info"))
      .send()
      .await
      .context("GET /food-info failed")?;
    Self::checked(resp, "GET /food-info")
      .await?
      .json()
      .await
      .context("deserialising food info")
  }

  /// `POST /api/food-info`
  pub async fn insert_food_info(
    &self,
    name: &str,
    notes: &str,
  ) -> Result<FoodInfo> {
    let resp = self
      .client
      .post(self.url("/food-info"))
      .json(&json!({ "name": name, "notes": notes }))
      .send()
      .await
      .context("POST /food-info failed")?;
    Self::checked(resp, "POST /food-info")
      .await?
      .json()
      .await
      .context("deserialising inserted food info")
  }

  /// `DELETE /api/food-info/<id>`
  pub async fn delete_food_info(&self, id: Uuid) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/food-info/{id}")))
      .send()
      .await
      .context("DELETE /food-info failed")?;
    Self::checked(resp, "DELETE /food-info").await?;
    Ok(())
  }
}
