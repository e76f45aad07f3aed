// ABOUTME: Activity fit factor comparing recipe energy with the pet's activity-driven need
// ABOUTME: Penalizes only the extremes: under-fed very active pets and over-fed sedentary pets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::{ActivityLevel, FactorKind, FactorScore};

use super::FactorInput;

/// Energy density assumed when the aggregate carries no calories
const DEFAULT_KCAL_PER_100G: f64 = 150.0;
const UNDERFED_RATIO: f64 = 0.8;
const OVERFED_RATIO: f64 = 1.2;
const MISMATCH_SCORE: f64 = 70.0;

/// Score the recipe's energy against the pet's activity level
#[must_use]
pub fn score(input: &FactorInput<'_>) -> FactorScore {
    let Some(level) = input.pet.activity_level else {
        return FactorScore::new(FactorKind::ActivityFit, 100.0, "Activity level not specified");
    };

    let weight = input.pet.weight_kg;
    let need = level.kcal_per_kg() * weight;
    let density = if input.nutrition.calories_per_100g > 0.0 {
        input.nutrition.calories_per_100g
    } else {
        DEFAULT_KCAL_PER_100G
    };
    let supplied = density * weight / 10.0;
    let reasoning = format!("Estimated {supplied:.0} kcal against a need of {need:.0} kcal");

    let underfed = level == ActivityLevel::VeryActive && supplied < need * UNDERFED_RATIO;
    let overfed = level == ActivityLevel::Sedentary && supplied > need * OVERFED_RATIO;
    if underfed {
        FactorScore::new(FactorKind::ActivityFit, MISMATCH_SCORE, reasoning)
            .with_issues(vec!["Energy may be too low for a very active pet".to_owned()])
    } else if overfed {
        FactorScore::new(FactorKind::ActivityFit, MISMATCH_SCORE, reasoning)
            .with_issues(vec!["Energy may be too high for a sedentary pet".to_owned()])
    } else {
        FactorScore::new(FactorKind::ActivityFit, 100.0, reasoning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NutrientRegistry;
    use kibble_core::models::{AggregatedNutrition, AnimalProfile, Recipe, SpeciesType};

    fn run(level: Option<ActivityLevel>, kcal_per_100g: f64) -> f64 {
        let recipe = Recipe::new("r", SpeciesType::Dog);
        let mut pet = AnimalProfile::new(SpeciesType::Dog, 4.0, 20.0);
        pet.activity_level = level;
        let mut nutrition = AggregatedNutrition::empty();
        nutrition.calories_per_100g = kcal_per_100g;
        score(&FactorInput::new(&recipe, &pet, &nutrition, NutrientRegistry::builtin())).score
    }

    #[test]
    fn test_unknown_activity_is_skipped() {
        assert!((run(None, 10.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_only_extremes_are_penalized() {
        assert!((run(Some(ActivityLevel::VeryActive), 150.0) - 70.0).abs() < f64::EPSILON);
        assert!((run(Some(ActivityLevel::Moderate), 150.0) - 100.0).abs() < f64::EPSILON);
        assert!((run(Some(ActivityLevel::Sedentary), 150.0) - 100.0).abs() < f64::EPSILON);
    }
}
