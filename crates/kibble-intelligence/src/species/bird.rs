// ABOUTME: Bird overrides: toxic ingredients zero out safety, then pellet share and Ca:P band
// ABOUTME: Breed standards come from the species checks reference table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{relative_deficit, smooth_penalty, SpeciesInput, SpeciesState};
use crate::reference::species_checks::{bird_standard, bird_toxic_ingredients, pellet_pct};

const PELLET_PENALTY_MAX: f64 = 35.0;
const CA_P_PENALTY_MAX: f64 = 25.0;

pub(super) fn adjust(input: &SpeciesInput<'_>, state: &mut SpeciesState) {
    let toxic = bird_toxic_ingredients(input.recipe);
    if !toxic.is_empty() {
        state.factors.safety = 0.0;
        state.toxic_ingredient_detected = true;
        state
            .critical_violations
            .push(format!("Toxic to birds: {}", toxic.join(", ")));
        return;
    }

    let standard = bird_standard(&input.pet.breed_key());

    // seed and vegetable mixes without any pellets are not judged on pellet share
    let pellets = pellet_pct(input.recipe, input.nutrition);
    if pellets > 0.0 && pellets < standard.pellet_min_pct {
        let deficit = relative_deficit(pellets, standard.pellet_min_pct);
        state.penalize_nutrition(smooth_penalty(deficit, PELLET_PENALTY_MAX));
        state.warnings.push(format!(
            "Pellets are {pellets:.0}% of the diet, below the recommended {:.0}%",
            standard.pellet_min_pct
        ));
    }

    if let Some(ratio) = input.nutrition.ca_p_ratio() {
        let band = standard.ca_p;
        let deviation = if ratio < band.min {
            (band.min - ratio) / band.min
        } else if ratio > band.max {
            (ratio - band.max) / band.max
        } else {
            0.0
        };
        if deviation > 0.0 {
            state.penalize_nutrition(smooth_penalty(deviation, CA_P_PENALTY_MAX));
            state.warnings.push(format!(
                "Ca:P ratio {ratio:.2} is outside the {:.1}-{:.1} band for this bird",
                band.min, band.max
            ));
        } else {
            state.strengths.push("Ca:P ratio suits this bird".to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::species::tests::run;
    use kibble_core::models::{AnimalProfile, IngredientReference, Recipe, SpeciesType};

    fn budgie() -> AnimalProfile {
        AnimalProfile::new(SpeciesType::Bird, 2.0, 0.04).with_breed("Budgie")
    }

    #[test]
    fn test_toxic_ingredient_forces_zero_safety() {
        let recipe = Recipe::new("toxic", SpeciesType::Bird)
            .with_ingredient(IngredientReference::new("pellets", 70.0))
            .with_ingredient(IngredientReference::new("avocado", 10.0));
        let result = run(&recipe, &budgie());
        assert!(result.toxic_ingredient_detected);
        assert!(result.factors.safety.abs() < f64::EPSILON);
        assert_eq!(result.critical_violations.len(), 1);
    }

    #[test]
    fn test_low_pellet_share_is_penalized_only_when_present() {
        let seed_mix = Recipe::new("seeds", SpeciesType::Bird)
            .with_ingredient(IngredientReference::new("millet seed", 50.0))
            .with_ingredient(IngredientReference::new("kale", 50.0));
        let seeds = run(&seed_mix, &budgie());
        assert!(!seeds.warnings.iter().any(|w| w.starts_with("Pellets")));

        let low_pellet = Recipe::new("low", SpeciesType::Bird)
            .with_ingredient(IngredientReference::new("pellets", 20.0))
            .with_ingredient(IngredientReference::new("kale", 80.0));
        let low = run(&low_pellet, &budgie());
        assert!(low.warnings.iter().any(|w| w.starts_with("Pellets")));
    }
}
