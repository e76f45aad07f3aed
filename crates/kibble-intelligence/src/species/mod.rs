// ABOUTME: Species adjustment engine: shared baseline, per-species overrides and weight profiles
// ABOUTME: Closed five-variant dispatch table of (weights, adjustment) pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Species Adjustment Engine
//!
//! Every species starts from the same baseline: the four top-level factors
//! (safety, nutrition, health, quality) derived from the factor report.
//! A per-species adjustment then applies critical overrides such as missing
//! taurine for cats or missing calcium support for reptiles. Finally the
//! factors are blended with the species' own weight profile.
//!
//! Adding a species means adding a variant, a weight profile and an
//! adjustment function to [`profile`]; the baseline never changes.

use kibble_core::models::{
    AggregatedNutrition, AnimalProfile, Grade, Recipe, SpeciesAssessment, SpeciesFactors,
    SpeciesType, SpeciesWeights,
};
use tracing::debug;

use crate::factors::FactorReport;
use crate::hashing::supplement_boost;
use crate::reference::categories::CoarseCategory;

mod bird;
mod cat;
mod pocket_pet;
mod reptile;

const SAFETY_INGREDIENT_SHARE: f64 = 0.7;
const SAFETY_ALLERGEN_SHARE: f64 = 0.3;
const SMOOTH_PENALTY_STEEPNESS: f64 = 4.0;

/// Inputs visible to a species adjustment
#[derive(Debug, Clone, Copy)]
pub struct SpeciesInput<'a> {
    /// Recipe being scored
    pub recipe: &'a Recipe,
    /// Pet the recipe is scored for
    pub pet: &'a AnimalProfile,
    /// Aggregated dry-matter nutrition
    pub nutrition: &'a AggregatedNutrition,
    /// Factor scores
    pub factors: &'a FactorReport,
}

/// Mutable state threaded through an adjustment
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesState {
    /// Top-level factors, adjusted in place
    pub factors: SpeciesFactors,
    /// Violations that must surface to the safety gate
    pub critical_violations: Vec<String>,
    /// Non-critical findings
    pub warnings: Vec<String>,
    /// Positive findings
    pub strengths: Vec<String>,
    /// A species-toxic ingredient was found
    pub toxic_ingredient_detected: bool,
}

impl SpeciesState {
    fn penalize_nutrition(&mut self, penalty: f64) {
        self.factors.nutrition -= penalty;
    }
}

/// Per-species adjustment applied after the baseline
pub type Adjustment = fn(&SpeciesInput<'_>, &mut SpeciesState);

/// Weight profile and adjustment of one species
#[derive(Debug, Clone, Copy)]
pub struct SpeciesProfile {
    /// Top-level factor weights
    pub weights: SpeciesWeights,
    /// Critical overrides
    pub adjust: Adjustment,
}

const fn weights(safety: f64, nutrition: f64, health: f64, quality: f64) -> SpeciesWeights {
    SpeciesWeights {
        safety,
        nutrition,
        health,
        quality,
    }
}

/// Dogs have no species-specific overrides
fn no_adjustment(_input: &SpeciesInput<'_>, _state: &mut SpeciesState) {}

/// Dispatch table entry for a species
#[must_use]
pub const fn profile(species: SpeciesType) -> SpeciesProfile {
    match species {
        SpeciesType::Dog => SpeciesProfile {
            weights: weights(0.30, 0.45, 0.15, 0.10),
            adjust: no_adjustment,
        },
        SpeciesType::Cat => SpeciesProfile {
            weights: weights(0.30, 0.50, 0.10, 0.10),
            adjust: cat::adjust,
        },
        SpeciesType::Bird => SpeciesProfile {
            weights: weights(0.35, 0.40, 0.15, 0.10),
            adjust: bird::adjust,
        },
        SpeciesType::Reptile => SpeciesProfile {
            weights: weights(0.25, 0.55, 0.10, 0.10),
            adjust: reptile::adjust,
        },
        SpeciesType::PocketPet => SpeciesProfile {
            weights: weights(0.25, 0.55, 0.10, 0.10),
            adjust: pocket_pet::adjust,
        },
    }
}

/// `(1 − e^(−4·d)) × max` with `d` clamped to `[0, 1]`
#[must_use]
pub fn smooth_penalty(deficit: f64, max_penalty: f64) -> f64 {
    let d = if deficit.is_finite() { deficit.clamp(0.0, 1.0) } else { 0.0 };
    -(-SMOOTH_PENALTY_STEEPNESS * d).exp_m1() * max_penalty
}

/// Relative shortfall of `actual` below `minimum`, zero when met
#[must_use]
pub fn relative_deficit(actual: f64, minimum: f64) -> f64 {
    if minimum <= 0.0 || actual >= minimum {
        0.0
    } else {
        (minimum - actual) / minimum
    }
}

fn baseline(input: &SpeciesInput<'_>) -> SpeciesState {
    let report = input.factors;
    let safety = report.safety.factor.score.mul_add(
        SAFETY_INGREDIENT_SHARE,
        report.allergen.factor.score * SAFETY_ALLERGEN_SHARE,
    );
    SpeciesState {
        factors: SpeciesFactors {
            safety,
            nutrition: report.nutrition.factor.score,
            health: report.health.score,
            quality: report.quality.factor.score,
        },
        critical_violations: Vec::new(),
        warnings: Vec::new(),
        strengths: Vec::new(),
        toxic_ingredient_detected: false,
    }
}

fn supplement_names(recipe: &Recipe) -> Vec<&str> {
    recipe
        .supplements
        .iter()
        .map(|s| s.name.as_str())
        .chain(recipe.ingredients.iter().filter_map(|i| {
            let tagged = i
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains("supplement"));
            (tagged || CoarseCategory::classify(&i.name) == Some(CoarseCategory::Supplement))
                .then_some(i.name.as_str())
        }))
        .collect()
}

fn clamp_factor(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Run baseline, species overrides and the species weight blend
#[must_use]
pub fn assess(input: &SpeciesInput<'_>) -> SpeciesAssessment {
    let species = input.pet.species;
    let profile = profile(species);
    let mut state = baseline(input);
    (profile.adjust)(input, &mut state);

    let factors = SpeciesFactors {
        safety: clamp_factor(state.factors.safety),
        nutrition: clamp_factor(state.factors.nutrition),
        health: clamp_factor(state.factors.health),
        quality: clamp_factor(state.factors.quality),
    };
    let weights = profile.weights.normalized();
    let blended = weights.safety.mul_add(
        factors.safety,
        weights.nutrition.mul_add(
            factors.nutrition,
            weights.health.mul_add(factors.health, weights.quality * factors.quality),
        ),
    );

    let supplements = supplement_names(input.recipe);
    let boost = if supplements.is_empty() {
        0.0
    } else {
        supplement_boost(&input.recipe.id, supplements)
    };
    let overall_score = clamp_factor(blended + boost);

    if !state.critical_violations.is_empty() {
        debug!(
            recipe = %input.recipe.id,
            species = %species,
            violations = state.critical_violations.len(),
            "Species critical violations"
        );
    }

    SpeciesAssessment {
        species,
        weights,
        factors,
        overall_score,
        grade: Grade::from_score(overall_score),
        supplement_boost: boost,
        toxic_ingredient_detected: state.toxic_ingredient_detected,
        critical_violations: state.critical_violations,
        warnings: state.warnings,
        strengths: state.strengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::factors::{compute_all, FactorInput};
    use crate::registry::NutrientRegistry;
    use kibble_core::models::{IngredientReference, Supplement};

    pub(super) fn run(recipe: &Recipe, pet: &AnimalProfile) -> SpeciesAssessment {
        let registry = NutrientRegistry::builtin();
        let nutrition = aggregate(recipe, registry);
        let report = compute_all(&FactorInput::new(recipe, pet, &nutrition, registry));
        assess(&SpeciesInput {
            recipe,
            pet,
            nutrition: &nutrition,
            factors: &report,
        })
    }

    #[test]
    fn test_smooth_penalty_shape() {
        assert!(smooth_penalty(0.0, 40.0).abs() < f64::EPSILON);
        let full = smooth_penalty(1.0, 40.0);
        assert!(full > 39.0 && full < 40.0);
        assert!((smooth_penalty(5.0, 40.0) - full).abs() < f64::EPSILON);
        assert!(smooth_penalty(f64::NAN, 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weight_profiles_sum_to_one() {
        for species in SpeciesType::ALL {
            assert!((profile(species).weights.total() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dog_has_no_overrides() {
        let recipe = Recipe::new("veg", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("sweet potato", 100.0));
        let result = run(&recipe, &AnimalProfile::new(SpeciesType::Dog, 4.0, 20.0));
        assert!(result.critical_violations.is_empty());
        assert!(!result.toxic_ingredient_detected);
    }

    #[test]
    fn test_supplement_boost_is_deterministic() {
        let recipe = Recipe::new("boosted", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("chicken breast", 100.0))
            .with_supplement(Supplement::new("fish oil", "1 g"));
        let pet = AnimalProfile::new(SpeciesType::Dog, 4.0, 20.0);
        let a = run(&recipe, &pet);
        let b = run(&recipe, &pet);
        assert!((1.0..=3.0).contains(&a.supplement_boost));
        assert_eq!(a, b);
    }

    #[test]
    fn test_relative_deficit() {
        assert!((relative_deficit(35.0, 70.0) - 0.5).abs() < f64::EPSILON);
        assert!(relative_deficit(80.0, 70.0).abs() < f64::EPSILON);
        assert!(relative_deficit(0.0, 0.0).abs() < f64::EPSILON);
    }
}
