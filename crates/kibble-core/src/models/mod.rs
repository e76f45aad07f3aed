// ABOUTME: Domain model re-exports for pets, recipes, nutrition, and scoring results
// ABOUTME: Serde-ready value types shared by the intelligence crate and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models.

/// Pet profile, species, activity and life stage
pub mod animal;
/// Nutrient profiles and aggregated nutrition
pub mod nutrition;
/// Recipe inputs
pub mod recipe;
/// Scoring outputs
pub mod scoring;

pub use animal::{ActivityLevel, AnimalProfile, LifeStage, SpeciesType};
pub use nutrition::{
    AggregatedNutrition, CompatibilityTier, Confidence, DataSource, IngredientContribution,
    NutrientProfile, NutritionSource, ProfileSource, SpeciesCompatibility,
};
pub use recipe::{Amount, IngredientReference, NutrientTotals, Recipe, Supplement};
pub use scoring::{
    clamp_score, CompatibilityResult, FactorKind, FactorScore, Grade, HealthImpact,
    IngredientAnalysis, IngredientVerdict, ScoreBreakdown, SpeciesAssessment, SpeciesFactors,
    SpeciesWeights,
};
