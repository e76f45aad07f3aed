// ABOUTME: Integration tests for end-to-end compatibility scoring properties
// ABOUTME: Determinism, boundedness, safety and allergen dominance, and species isolation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use kibble_scorer::models::{FactorKind, Grade, IngredientReference, SpeciesType, Supplement};
use kibble_scorer::scoring::ScoringService;

use common::{
    adult_cat, all_pets, all_recipes, chicken_allergic_dog, healthy_adult_dog, init_test_logging,
    meatless_recipe, reference_dog_recipe,
};

#[test]
fn test_reference_recipe_end_to_end() {
    init_test_logging();
    let service = ScoringService::default();
    let result = service.score_recipe(&healthy_adult_dog(), &reference_dog_recipe("ref-dog"));

    assert!(result.overall_score >= 80, "score {}", result.overall_score);
    assert!((result.factor_score(FactorKind::IngredientSafety) - 100.0).abs() < f64::EPSILON);
    assert!((result.safety_score() - 100.0).abs() < f64::EPSILON);
    assert!(!result.nutrition.uses_fallback_nutrition);
    assert!(result.nutrition.fallback_ingredients.is_empty());
    assert!(result.critical_violations.is_empty());
    assert_eq!(result.grade, Grade::from_score(f64::from(result.overall_score)));

    // protein and fat sit inside the adult dog band
    assert!(result.nutrition.protein_pct > 35.0 && result.nutrition.protein_pct < 85.0);
    assert!(result.nutrition.fat_pct > 8.0 && result.nutrition.fat_pct < 24.0);
}

#[test]
fn test_scoring_is_deterministic() {
    init_test_logging();
    let service = ScoringService::default();
    for pet in all_pets() {
        for recipe in all_recipes() {
            let first = service.score_recipe(&pet, &recipe);
            let second = service.score_recipe(&pet, &recipe);
            assert_eq!(
                first, second,
                "recipe {} for {}",
                recipe.id,
                pet.species
            );
        }
    }
}

#[test]
fn test_all_scores_are_bounded() {
    init_test_logging();
    let service = ScoringService::default();
    for pet in all_pets() {
        for recipe in all_recipes() {
            let result = service.score_recipe(&pet, &recipe);
            assert!(result.overall_score <= 100);
            for (kind, factor) in &result.factors {
                assert!(
                    (0.0..=100.0).contains(&factor.score),
                    "{kind:?} = {} for {}",
                    factor.score,
                    recipe.id
                );
                assert!((0.0..=1.0).contains(&factor.weight));
            }
            let species = &result.species_assessment;
            for value in [
                species.factors.safety,
                species.factors.nutrition,
                species.factors.health,
                species.factors.quality,
                species.overall_score,
            ] {
                assert!((0.0..=100.0).contains(&value), "{value} for {}", recipe.id);
            }
        }
    }
}

#[test]
fn test_species_avoid_ingredient_dominates() {
    let service = ScoringService::default();
    let pet = healthy_adult_dog();
    for toxic in ["grapes", "raisins", "onion", "chocolate"] {
        let recipe = reference_dog_recipe(&format!("with-{toxic}"))
            .with_ingredient(IngredientReference::new(toxic, "5g"));
        let result = service.score_recipe(&pet, &recipe);
        assert!(result.overall_score <= 50, "{toxic}: {}", result.overall_score);
        assert!(result.safety_score().abs() < f64::EPSILON, "{toxic}");
        assert!(result.factor_score(FactorKind::IngredientSafety) <= 50.0);
        assert!(!result.is_perfect_match);
    }
}

#[test]
fn test_banned_ingredient_is_treated_as_avoid() {
    let service = ScoringService::default();
    let mut pet = healthy_adult_dog();
    pet.banned_ingredients = vec!["sweet potato".to_owned()];
    let result = service.score_recipe(&pet, &reference_dog_recipe("banned"));
    assert!(result.safety_score().abs() < f64::EPSILON);
    assert!(result.overall_score <= 50);
}

#[test]
fn test_allergen_match_zeroes_allergen_safety() {
    let service = ScoringService::default();
    let recipe = reference_dog_recipe("allergen");

    let allergic = service.score_recipe(&chicken_allergic_dog(), &recipe);
    let healthy = service.score_recipe(&healthy_adult_dog(), &recipe);

    assert!(allergic.factor_score(FactorKind::AllergenSafety).abs() < f64::EPSILON);
    assert!(allergic.safety_score().abs() < f64::EPSILON);
    assert!((healthy.factor_score(FactorKind::AllergenSafety) - 100.0).abs() < f64::EPSILON);
    assert!(
        f64::from(allergic.overall_score) + 30.0 < f64::from(healthy.overall_score),
        "allergic {} vs healthy {}",
        allergic.overall_score,
        healthy.overall_score
    );
}

#[test]
fn test_taurine_violation_is_cat_only() {
    let service = ScoringService::default();

    let dog =
        service.score_recipe(&healthy_adult_dog(), &meatless_recipe("m-dog", SpeciesType::Dog));
    assert!(
        !dog.critical_violations.iter().any(|v| v.contains("taurine")),
        "{:?}",
        dog.critical_violations
    );

    let cat_recipe = meatless_recipe("m-cat", SpeciesType::Cat);
    let without = service.score_recipe(&adult_cat(), &cat_recipe);
    assert!(without.critical_violations.iter().any(|v| v.contains("taurine")));

    let with = service.score_recipe(
        &adult_cat(),
        &cat_recipe.with_supplement(Supplement::new("Taurine powder", "250mg")),
    );
    assert!(!with.critical_violations.iter().any(|v| v.contains("taurine")));
    assert!(
        without.species_assessment.factors.nutrition < with.species_assessment.factors.nutrition,
        "without {} vs with {}",
        without.species_assessment.factors.nutrition,
        with.species_assessment.factors.nutrition
    );
    assert!(without.overall_score < with.overall_score);
}

#[test]
fn test_empty_recipe_yields_complete_low_result() {
    let service = ScoringService::default();
    let result = service.score_recipe(
        &healthy_adult_dog(),
        &kibble_scorer::models::Recipe::new("empty", SpeciesType::Dog),
    );
    assert!(result.overall_score < 60);
    assert_eq!(result.factors.len(), FactorKind::ALL.len());
    assert!(result.ingredient_analysis.is_empty());
}
