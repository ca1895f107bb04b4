//! Core types and trait definitions for the kcal calorie tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod chart;
pub mod error;
pub mod food;
pub mod goal;
pub mod input;
pub mod meal;
pub mod note;
pub mod store;
pub mod summary;

pub use error::{Error, Result};
