// ABOUTME: Nutritional adequacy factor against species dry-matter target ranges
// ABOUTME: Weighted range scores, Ca:P penalty, diversity bonus, critical floors, coverage penalty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::{AggregatedNutrition, FactorKind, FactorScore, SpeciesType};

use super::FactorInput;
use crate::reference::categories::distinct_categories;
use crate::reference::species_checks::pocket_pet_standard;
use crate::reference::targets::{ca_p_standard, critical_floor, targets_for, Nutrient};

const DIVERSITY_BONUS_PER_CATEGORY: f64 = 2.0;
const DIVERSITY_BONUS_CAP: f64 = 6.0;
const FLOOR_PENALTY_SCALE: f64 = 40.0;
const HAY_EATER_PROTEIN_CEILING: f64 = 20.0;
const HAY_EATER_PROTEIN_PENALTY_RATE: f64 = 1.5;
const HAY_EATER_PROTEIN_PENALTY_CAP: f64 = 18.0;

/// Nutritional adequacy factor with the findings behind it
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionAssessment {
    /// Factor score
    pub factor: FactorScore,
    /// Nutrients outside their target range
    pub gaps: Vec<String>,
    /// Nutrients inside their target range
    pub strengths: Vec<String>,
    /// Relative deficit below the species critical floor, when violated
    pub critical_deficit: Option<f64>,
    /// Calcium to phosphorus ratio, when both minerals are present
    pub ca_p_ratio: Option<f64>,
}

/// Dry-matter percentage of one tracked nutrient
#[must_use]
pub const fn nutrient_value(nutrition: &AggregatedNutrition, nutrient: Nutrient) -> f64 {
    match nutrient {
        Nutrient::Protein => nutrition.protein_pct,
        Nutrient::Fat => nutrition.fat_pct,
        Nutrient::Fiber => nutrition.fiber_pct,
        Nutrient::Calcium => nutrition.calcium_pct,
        Nutrient::Phosphorus => nutrition.phosphorus_pct,
    }
}

/// Whether the pet is a hay-obligate pocket pet
#[must_use]
pub fn is_hay_eater(species: SpeciesType, breed_key: &str) -> bool {
    species == SpeciesType::PocketPet && pocket_pet_standard(breed_key).is_hay_eater()
}

/// Diversity bonus for the number of distinct coarse categories
#[must_use]
pub fn diversity_bonus(categories: usize) -> f64 {
    (categories.saturating_sub(1) as f64 * DIVERSITY_BONUS_PER_CATEGORY).min(DIVERSITY_BONUS_CAP)
}

/// Fallback-data penalty applied only to pets with declared health concerns
#[must_use]
pub fn coverage_penalty(data_coverage: f64) -> f64 {
    if data_coverage < 0.3 {
        20.0
    } else if data_coverage < 0.5 {
        12.0
    } else if data_coverage < 0.7 {
        5.0
    } else {
        0.0
    }
}

/// Score dry-matter nutrition against the pet's species and life-phase targets
#[must_use]
pub fn score(input: &FactorInput<'_>) -> NutritionAssessment {
    let pet = input.pet;
    let nutrition = input.nutrition;
    let growing = pet.is_growing();
    let targets = targets_for(pet.species, growing);

    let mut gaps = Vec::new();
    let mut strengths = Vec::new();
    let mut weighted: f64 = 0.0;
    for (nutrient, range, weight) in targets.ranges() {
        let actual = nutrient_value(nutrition, nutrient);
        weighted = range.score(actual).mul_add(weight, weighted);
        let label = nutrient.label();
        if actual < range.min {
            gaps.push(format!(
                "{label} {actual:.1}% is below the {:.1}-{:.1}% target",
                range.min, range.max
            ));
        } else if actual > range.max {
            gaps.push(format!(
                "{label} {actual:.1}% is above the {:.1}-{:.1}% target",
                range.min, range.max
            ));
        } else {
            strengths.push(format!("{label} {actual:.1}% is within target"));
        }
    }

    let mut value = weighted;
    let mut issues = Vec::new();

    let ca_p_ratio = nutrition.ca_p_ratio();
    match ca_p_ratio {
        Some(ratio) => {
            let standard = ca_p_standard(pet.species);
            value -= standard.penalty(ratio);
            if !standard.safe.contains(ratio) {
                gaps.push(format!(
                    "Ca:P ratio {ratio:.2} is outside the {:.1}-{:.1} safe band",
                    standard.safe.min, standard.safe.max
                ));
            }
        }
        None => issues.push("Ca:P ratio could not be assessed".to_owned()),
    }

    let categories = distinct_categories(input.recipe.ingredients.iter().map(|i| i.name.as_str()));
    let bonus = diversity_bonus(categories.len());
    value += bonus;
    if categories.len() >= 3 {
        strengths.push(format!("{} ingredient categories for variety", categories.len()));
    }

    let hay_eater = is_hay_eater(pet.species, &pet.breed_key());
    let mut critical_deficit = None;
    if let Some(floor) = critical_floor(pet.species, growing, hay_eater) {
        let actual = nutrient_value(nutrition, floor.nutrient);
        if actual < floor.minimum && floor.minimum > 0.0 {
            let deficit = (floor.minimum - actual) / floor.minimum;
            value -= FLOOR_PENALTY_SCALE * deficit.powi(2);
            critical_deficit = Some(deficit);
            issues.push(format!(
                "{} {actual:.1}% is below the critical minimum of {:.1}%",
                floor.nutrient.label(),
                floor.minimum
            ));
        }
    }
    if hay_eater && nutrition.protein_pct > HAY_EATER_PROTEIN_CEILING {
        value -= ((nutrition.protein_pct - HAY_EATER_PROTEIN_CEILING)
            * HAY_EATER_PROTEIN_PENALTY_RATE)
            .min(HAY_EATER_PROTEIN_PENALTY_CAP);
        issues.push("Protein is too high for a hay-based herbivore".to_owned());
    }

    if !pet.health_concerns.is_empty() {
        let penalty = coverage_penalty(nutrition.data_coverage);
        if penalty > 0.0 {
            value -= penalty;
            issues.push(format!(
                "Only {:.0}% of ingredients have verified nutrient data",
                nutrition.data_coverage * 100.0
            ));
        }
    }

    issues.extend(gaps.iter().cloned());
    let reasoning = format!(
        "Weighted target fit {weighted:.1} for {} ({}), diversity bonus {bonus:.0}",
        pet.species,
        if growing { "growth" } else { "maintenance" }
    );
    NutritionAssessment {
        factor: FactorScore::new(FactorKind::NutritionalAdequacy, value, reasoning)
            .with_issues(issues)
            .with_strengths(strengths.clone()),
        gaps,
        strengths,
        critical_deficit,
        ca_p_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::registry::NutrientRegistry;
    use kibble_core::models::{AnimalProfile, IngredientReference, Recipe};

    fn assess(recipe: &Recipe, pet: &AnimalProfile) -> NutritionAssessment {
        let registry = NutrientRegistry::builtin();
        let nutrition = aggregate(recipe, registry);
        score(&FactorInput::new(recipe, pet, &nutrition, registry))
    }

    fn reference_dog_recipe() -> Recipe {
        Recipe::new("reference", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("chicken breast", 70.0))
            .with_ingredient(IngredientReference::new("sweet potato", 20.0))
            .with_ingredient(IngredientReference::new("carrots", 8.0))
            .with_ingredient(IngredientReference::new("fish oil", 2.0))
    }

    #[test]
    fn test_reference_dog_recipe_scores_moderately() {
        let pet = AnimalProfile::new(SpeciesType::Dog, 4.0, 20.0);
        let result = assess(&reference_dog_recipe(), &pet);
        // protein and fat in band, low calcium drags the Ca:P ratio
        assert!(result.factor.score > 55.0 && result.factor.score < 65.0);
        assert!(result.critical_deficit.is_none());
        assert!(result.gaps.iter().any(|g| g.starts_with("Calcium")));
    }

    #[test]
    fn test_protein_floor_violation_is_reported() {
        let recipe = Recipe::new("veg", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("sweet potato", 100.0))
            .with_ingredient(IngredientReference::new("carrots", 100.0));
        let result = assess(&recipe, &AnimalProfile::new(SpeciesType::Dog, 4.0, 20.0));
        let deficit = result.critical_deficit.unwrap_or_default();
        assert!(deficit > 0.2);
    }

    #[test]
    fn test_diversity_bonus_is_capped() {
        assert!(diversity_bonus(0).abs() < f64::EPSILON);
        assert!(diversity_bonus(1).abs() < f64::EPSILON);
        assert!((diversity_bonus(3) - 4.0).abs() < f64::EPSILON);
        assert!((diversity_bonus(6) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coverage_penalty_only_with_concerns() {
        let recipe = Recipe::new("fallback", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("duck gizzards", 100.0));
        let healthy = AnimalProfile::new(SpeciesType::Dog, 4.0, 20.0);
        let mut concerned = healthy.clone();
        concerned.health_concerns = vec!["joint-mobility".to_owned()];
        let a = assess(&recipe, &healthy).factor.score;
        let b = assess(&recipe, &concerned).factor.score;
        assert!((a - b - 20.0).abs() < 1e-9 || b.abs() < f64::EPSILON);
        assert!((coverage_penalty(0.6) - 5.0).abs() < f64::EPSILON);
        assert!(coverage_penalty(0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hay_eater_uses_fiber_floor() {
        assert!(is_hay_eater(SpeciesType::PocketPet, "rabbit"));
        assert!(!is_hay_eater(SpeciesType::PocketPet, "hamster"));
        assert!(!is_hay_eater(SpeciesType::Dog, "rabbit"));
    }
}
