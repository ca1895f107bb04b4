//! JSON REST API for kcal.
//!
//! Exposes an axum [`Router`] backed by any [`kcal_core::store::CalorieStore`].
//! This is the "managed backend" the terminal client talks to; auth, TLS,
//! and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", kcal_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod food_info;
pub mod goal;
pub mod meals;
pub mod notes;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, put},
};
use kcal_core::store::CalorieStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CalorieStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Meals
    .route("/meals", get(meals::list::<S>).post(meals::create::<S>))
    .route(
      "/meals/{id}",
      put(meals::update::<S>).delete(meals::delete_one::<S>),
    )
    // Notes
    .route("/notes", get(notes::list::<S>).post(notes::create::<S>))
    .route("/notes/{id}", delete(notes::delete_one::<S>))
    // Daily goal
    .route("/goal", get(goal::get_goal::<S>))
    .route("/goal/{id}", put(goal::update::<S>))
    // Food info
    .route(
      "/food-info",
      get(food_info::list::<S>).post(food_info::create::<S>),
    )
    .route("/food-info/{id}", delete(food_info::delete_one::<S>))
    .with_state(store)
}
