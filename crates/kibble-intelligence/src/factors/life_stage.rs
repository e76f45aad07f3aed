// ABOUTME: Life-stage fit factor comparing the pet's age bucket with recipe age groups
// ABOUTME: Full score for matching, universal or untagged recipes; graduated by bucket distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::{FactorKind, FactorScore, LifeStage, Recipe};

use super::FactorInput;
use crate::reference::normalize_tag;

const UNIVERSAL_TAGS: &[&str] = &["all", "all-ages", "all-life-stages", "any"];
const UNRECOGNIZED_TAGS_SCORE: f64 = 60.0;

/// Score for a mismatch at a given bucket distance
#[must_use]
pub const fn distance_score(distance: u8) -> f64 {
    match distance {
        0 => 100.0,
        1 => 75.0,
        2 => 60.0,
        _ => 45.0,
    }
}

/// Whether the recipe declares a stage explicitly or universally
#[must_use]
pub fn recipe_covers(recipe: &Recipe, stage: LifeStage) -> bool {
    let tags: Vec<String> = recipe
        .age_groups
        .iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty())
        .collect();
    tags.is_empty()
        || tags.iter().any(|t| UNIVERSAL_TAGS.contains(&t.as_str()))
        || tags.iter().any(|t| LifeStage::from_tag(t) == Some(stage))
}

/// Score how well the recipe's age groups fit the pet
#[must_use]
pub fn score(input: &FactorInput<'_>) -> FactorScore {
    let stage = input.pet.life_stage();
    if recipe_covers(input.recipe, stage) {
        return FactorScore::new(
            FactorKind::LifeStageFit,
            100.0,
            format!("Suitable for {} pets", stage.as_str()),
        );
    }

    let recognized: Vec<LifeStage> = input
        .recipe
        .age_groups
        .iter()
        .filter_map(|t| LifeStage::from_tag(t))
        .collect();
    let Some(distance) = recognized
        .iter()
        .map(|s| s.ordinal().abs_diff(stage.ordinal()))
        .min()
    else {
        return FactorScore::new(
            FactorKind::LifeStageFit,
            UNRECOGNIZED_TAGS_SCORE,
            "Recipe age groups are not recognized",
        )
        .with_issues(vec![format!(
            "Could not confirm suitability for {} pets",
            stage.as_str()
        )]);
    };

    let intended = recognized
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    FactorScore::new(
        FactorKind::LifeStageFit,
        distance_score(distance),
        format!("Recipe is intended for {intended}"),
    )
    .with_issues(vec![format!(
        "Recipe is not formulated for {} pets",
        stage.as_str()
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NutrientRegistry;
    use kibble_core::models::{AggregatedNutrition, AnimalProfile, SpeciesType};

    fn run(tags: &[&str], age: f64) -> f64 {
        let mut recipe = Recipe::new("r", SpeciesType::Dog);
        recipe.age_groups = tags.iter().map(|t| (*t).to_owned()).collect();
        let pet = AnimalProfile::new(SpeciesType::Dog, age, 10.0);
        let nutrition = AggregatedNutrition::empty();
        score(&FactorInput::new(&recipe, &pet, &nutrition, NutrientRegistry::builtin())).score
    }

    #[test]
    fn test_untagged_and_universal_recipes_fit_everyone() {
        assert!((run(&[], 12.0) - 100.0).abs() < f64::EPSILON);
        assert!((run(&["All Ages"], 0.5) - 100.0).abs() < f64::EPSILON);
        assert!((run(&["puppy"], 0.5) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mismatch_is_graduated_by_distance() {
        assert!((run(&["adult"], 8.0) - 75.0).abs() < f64::EPSILON);
        assert!((run(&["adult"], 0.5) - 60.0).abs() < f64::EPSILON);
        assert!((run(&["puppy"], 10.0) - 45.0).abs() < f64::EPSILON);
        assert!((run(&["young", "senior"], 4.0) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unrecognized_tags() {
        assert!((run(&["giant breeds"], 4.0) - 60.0).abs() < f64::EPSILON);
    }
}
