// ABOUTME: The seven factor scorers and the report that bundles their results
// ABOUTME: Every scorer is a pure function of recipe, pet, aggregate and registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Factor Scorers
//!
//! Each scorer returns a [`FactorScore`] in `[0, 100]` with reasoning, issues
//! and strengths. Some also return side findings that later stages need:
//! safety reports the avoid-tier ingredients, nutrition reports the critical
//! floor deficit, allergen reports the matched allergens.

use std::collections::BTreeMap;

use kibble_core::models::{AggregatedNutrition, AnimalProfile, FactorKind, FactorScore, Recipe};

use crate::registry::NutrientRegistry;

/// Activity fit against caloric need
pub mod activity;
/// Declared allergies against ingredient text
pub mod allergen;
/// Health concerns against benefit profiles
pub mod health;
/// Age bucket against recipe age groups
pub mod life_stage;
/// Dry-matter nutrients against target ranges
pub mod nutrition;
/// Ingredient quality tiering
pub mod quality;
/// Species compatibility tiers and banned ingredients
pub mod safety;

pub use allergen::AllergenAssessment;
pub use nutrition::NutritionAssessment;
pub use quality::QualityFactor;
pub use safety::{ClassifiedIngredient, SafetyAssessment};

/// Inputs shared by every factor scorer
#[derive(Debug, Clone, Copy)]
pub struct FactorInput<'a> {
    /// Recipe being scored
    pub recipe: &'a Recipe,
    /// Pet the recipe is scored for
    pub pet: &'a AnimalProfile,
    /// Aggregated dry-matter nutrition of the recipe
    pub nutrition: &'a AggregatedNutrition,
    /// Registry used for species tiers
    pub registry: &'a NutrientRegistry,
}

impl<'a> FactorInput<'a> {
    /// Bundle scorer inputs
    #[must_use]
    pub const fn new(
        recipe: &'a Recipe,
        pet: &'a AnimalProfile,
        nutrition: &'a AggregatedNutrition,
        registry: &'a NutrientRegistry,
    ) -> Self {
        Self {
            recipe,
            pet,
            nutrition,
            registry,
        }
    }
}

/// Results of all seven factor scorers
#[derive(Debug, Clone)]
pub struct FactorReport {
    /// Ingredient safety with classified ingredients
    pub safety: SafetyAssessment,
    /// Nutritional adequacy with gaps and floor deficit
    pub nutrition: NutritionAssessment,
    /// Health alignment
    pub health: FactorScore,
    /// Life-stage fit
    pub life_stage: FactorScore,
    /// Activity fit
    pub activity: FactorScore,
    /// Allergen safety with matched allergens
    pub allergen: AllergenAssessment,
    /// Ingredient quality with tier ratios
    pub quality: QualityFactor,
}

impl FactorReport {
    /// Score of one factor
    #[must_use]
    pub const fn score(&self, kind: FactorKind) -> f64 {
        self.factor(kind).score
    }

    /// Factor score of one kind
    #[must_use]
    pub const fn factor(&self, kind: FactorKind) -> &FactorScore {
        match kind {
            FactorKind::IngredientSafety => &self.safety.factor,
            FactorKind::NutritionalAdequacy => &self.nutrition.factor,
            FactorKind::HealthAlignment => &self.health,
            FactorKind::LifeStageFit => &self.life_stage,
            FactorKind::ActivityFit => &self.activity,
            FactorKind::AllergenSafety => &self.allergen.factor,
            FactorKind::IngredientQuality => &self.quality.factor,
        }
    }

    /// All factor scores keyed by kind
    #[must_use]
    pub fn scores(&self) -> BTreeMap<FactorKind, FactorScore> {
        FactorKind::ALL
            .iter()
            .map(|kind| (*kind, self.factor(*kind).clone()))
            .collect()
    }
}

/// Run every factor scorer
#[must_use]
pub fn compute_all(input: &FactorInput<'_>) -> FactorReport {
    FactorReport {
        safety: safety::score(input),
        nutrition: nutrition::score(input),
        health: health::score(input),
        life_stage: life_stage::score(input),
        activity: activity::score(input),
        allergen: allergen::score(input),
        quality: quality::score(input),
    }
}

/// Lowercased ingredient and supplement names of a recipe
pub(crate) fn searchable_names(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .map(|i| i.name.as_str())
        .chain(recipe.supplements.iter().map(|s| s.name.as_str()))
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .collect()
}
