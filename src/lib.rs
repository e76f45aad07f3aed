// ABOUTME: Main library entry point for the kibble pet recipe compatibility scorer
// ABOUTME: Configuration, structured logging, JSON input loading, and the batch scoring service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Kibble Scorer
//!
//! Scores how well a candidate recipe matches an individual pet's dietary
//! needs, producing a 0-100 compatibility score with an explainable
//! breakdown, and ranks whole recipe sets for one pet with cohort
//! calibration.
//!
//! ## Architecture
//!
//! - **kibble-core**: Domain models, `AppError`, shared constants
//! - **kibble-intelligence**: The pure scoring pipeline (amount parsing,
//!   key resolution, aggregation, factor scoring, species adjustment,
//!   safety gate, calibration)
//! - **This crate**: Environment configuration, logging, file loading, the
//!   [`scoring::ScoringService`] and the `kibble-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kibble_scorer::config::ScorerConfig;
//! use kibble_scorer::models::{AnimalProfile, IngredientReference, Recipe, SpeciesType};
//! use kibble_scorer::scoring::ScoringService;
//!
//! # fn main() -> kibble_scorer::errors::AppResult<()> {
//! let config = ScorerConfig::from_env()?;
//! let service = ScoringService::new(config.scoring);
//!
//! let pet = AnimalProfile::new(SpeciesType::Dog, 4.0, 20.0);
//! let recipe = Recipe::new("chicken-dinner", SpeciesType::Dog)
//!     .with_ingredient(IngredientReference::new("chicken breast", "700g"))
//!     .with_ingredient(IngredientReference::new("sweet potato", "200g"));
//!
//! let result = service.score_recipe(&pet, &recipe);
//! println!("{} ({})", result.overall_score, result.grade);
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// JSON input loading with validation
pub mod io;

/// Structured logging setup
pub mod logging;

/// Single-recipe and cohort scoring service
pub mod scoring;

/// Re-exported error types from `kibble-core`
pub use kibble_core::errors;

/// Re-exported domain models from `kibble-core`
pub use kibble_core::models;

/// Re-exported scoring pipeline
pub use kibble_intelligence as intelligence;
