// ABOUTME: Recipe compatibility scoring engine for companion animals
// ABOUTME: Amount parsing, nutrient resolution, factor scoring, species adjustment, calibration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Kibble Intelligence
//!
//! Pure, synchronous scoring pipeline. Every entry point reads shared
//! immutable reference data (the nutrient registry and the reference tables)
//! and returns freshly allocated results, so callers may score any number of
//! (recipe, pet) pairs in parallel without locking.
//!
//! Pipeline, leaves first:
//!
//! 1. [`amount_parser`] turns free-text quantities into grams
//! 2. [`key_resolver`] turns ingredient names into registry keys
//! 3. [`aggregator`] builds dry-matter nutrition, using [`fallback`] and [`moisture`]
//! 4. [`factors`] computes the seven factor scores
//! 5. [`species`] applies per-species weights and critical overrides
//! 6. [`gate`] blends everything behind the safety gate
//! 7. [`calibration`] rescales a cohort of scores for one pet

/// Free-text quantity to grams
pub mod amount_parser;
/// Ingredient name to registry key resolution
pub mod key_resolver;
/// Static nutrient registry with an init-once built-in table
pub mod registry;
/// Category fallback nutrition
pub mod fallback;
/// Moisture inference heuristics
pub mod moisture;
/// Dry-matter nutrient aggregation
pub mod aggregator;
/// Reference tables: targets, benefit profiles, quality tiers, species checks
pub mod reference;
/// The seven factor scorers
pub mod factors;
/// Per-species weight profiles and critical overrides
pub mod species;
/// Safety gate, optimality blend, bonuses and tie-breaker
pub mod gate;
/// Deterministic string hashing
pub mod hashing;
/// Explicit scoring context passed to every entry point
pub mod context;
/// End-to-end compatibility engine
pub mod compatibility;
/// Cohort score calibration
pub mod calibration;
/// Scoring configuration
pub mod config;

pub use calibration::{calibrate, CalibrationMode, CalibrationOutcome, CohortEntry};
pub use compatibility::{CohortScores, CompatibilityEngine};
pub use config::{ConfigError, ScoringConfig};
pub use context::ScoringContext;
pub use registry::NutrientRegistry;
