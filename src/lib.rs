//! Numerology - life path and compatibility calculations
//!
//! This library derives a life path number from a birth date, looks up its
//! interpretation, and scores the compatibility of two life path numbers
//! from a fixed table. The `routes` module exposes the same operations over
//! HTTP.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_life_path, compatibility_score, meaning_for, Numerologist};
pub use crate::models::{BirthDate, CompatibilityScore, CompatibilityTier, DateError, LifePathNumber, NumberMeaning};
