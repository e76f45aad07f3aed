// ABOUTME: Integration tests for cohort calibration and ranked cohort reports
// ABOUTME: Checks monotonicity, ceilings without a perfect match, and perfect-match anchoring
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::LazyLock;

use kibble_scorer::intelligence::config::CalibrationConfig;
use kibble_scorer::intelligence::{
    calibrate, CalibrationMode, CohortEntry, NutrientRegistry, ScoringConfig,
};
use kibble_scorer::models::{IngredientReference, NutrientProfile, Recipe, SpeciesType, Supplement};
use kibble_scorer::scoring::ScoringService;

use common::{all_recipes, chicken_allergic_dog, healthy_adult_dog, init_test_logging};

/// Registry tuned so `balanced_recipe` sits near every adult dog target midpoint
static BALANCED_REGISTRY: LazyLock<NutrientRegistry> = LazyLock::new(|| {
    NutrientRegistry::from_entries([
        (
            "chicken_breast",
            NutrientProfile::per_100g(24.0, 7.0, 0.0, 12.0, 340.0, 165.0).moisture(70.0),
        ),
        (
            "sweet_potato",
            NutrientProfile::per_100g(1.6, 0.1, 3.0, 30.0, 47.0, 86.0).moisture(77.0),
        ),
        (
            "blueberry",
            NutrientProfile::per_100g(0.7, 0.3, 2.4, 6.0, 12.0, 57.0).moisture(84.0),
        ),
        (
            "quinoa",
            NutrientProfile::per_100g(4.4, 1.9, 2.8, 17.0, 152.0, 120.0).moisture(72.0),
        ),
        (
            "calcium_carbonate",
            NutrientProfile::per_100g(0.0, 0.0, 0.0, 40_000.0, 0.0, 0.0).moisture(0.0),
        ),
    ])
});

fn balanced_recipe(id: &str) -> Recipe {
    Recipe::new(id, SpeciesType::Dog)
        .with_ingredient(IngredientReference::new("chicken breast", 65.0))
        .with_ingredient(IngredientReference::new("sweet potato", 15.0))
        .with_ingredient(IngredientReference::new("blueberries", 10.0))
        .with_ingredient(IngredientReference::new("quinoa", 10.0))
        .with_supplement(Supplement::new("calcium carbonate", "750 mg"))
}

#[test]
fn test_cohort_calibration_preserves_raw_order() {
    init_test_logging();
    let service = ScoringService::default();
    let report = service.score_cohort(&healthy_adult_dog(), &all_recipes());

    assert_eq!(report.results.len(), all_recipes().len());
    for a in &report.results {
        for b in &report.results {
            if a.raw_score > b.raw_score {
                assert!(
                    a.calibrated_score >= b.calibrated_score,
                    "{} ({}) vs {} ({})",
                    a.recipe_id,
                    a.calibrated_score,
                    b.recipe_id,
                    b.calibrated_score
                );
            }
        }
    }
}

#[test]
fn test_cohort_without_perfect_match_is_capped() {
    // declared allergies rule out every perfect match
    let service = ScoringService::default();
    let report = service.score_cohort(&chicken_allergic_dog(), &all_recipes());

    assert_eq!(report.mode, CalibrationMode::NoPerfect);
    assert!(report.results.iter().all(|r| !r.is_perfect_match));
    assert!(report.results.iter().all(|r| r.calibrated_score <= 92));
    assert_eq!(report.best().map(|r| r.calibrated_score), Some(92));
}

#[test]
fn test_best_perfect_match_lands_near_the_top() {
    let entries = vec![
        CohortEntry::new("anchor", 86.0, true),
        CohortEntry::new("runner-up", 91.0, false),
        CohortEntry::new("middling", 60.0, false),
        CohortEntry::new("unsafe", 12.0, false),
    ];
    let outcome = calibrate(&entries, &CalibrationConfig::default());

    assert_eq!(outcome.mode, CalibrationMode::PerfectAnchored);
    let anchor = outcome.score("anchor").unwrap();
    assert!((95..=100).contains(&anchor), "anchor {anchor}");
    // non-perfect recipes never exceed 95 in an anchored cohort
    assert_eq!(outcome.score("runner-up"), Some(95));
    assert!(outcome.score("middling").unwrap() > 60);
    assert!(outcome.score("unsafe").unwrap() < outcome.score("middling").unwrap());
}

#[test]
fn test_calibration_depends_only_on_snapshot() {
    let cohort = vec![
        CohortEntry::new("a", 70.0, false),
        CohortEntry::new("b", 50.0, false),
    ];
    let mut larger = cohort.clone();
    larger.push(CohortEntry::new("c", 90.0, false));

    let config = CalibrationConfig::default();
    let small = calibrate(&cohort, &config);
    let big = calibrate(&larger, &config);

    assert_eq!(small.score("a"), Some(92));
    assert!(big.score("a").unwrap() < small.score("a").unwrap());
    assert_eq!(calibrate(&cohort, &config), small);
}

#[test]
fn test_scored_perfect_match_anchors_cohort_at_98() {
    init_test_logging();
    let service = ScoringService::with_registry(&BALANCED_REGISTRY, ScoringConfig::default());
    let recipes = vec![
        balanced_recipe("balanced"),
        Recipe::new("lean", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("chicken breast", 80.0))
            .with_ingredient(IngredientReference::new("sweet potato", 20.0)),
    ];

    let single = service.score_recipe(&healthy_adult_dog(), &recipes[0]);
    assert!(single.is_perfect_match);
    assert!((single.breakdown.perfect_bonus - 5.0).abs() < f64::EPSILON);

    let report = service.score_cohort(&healthy_adult_dog(), &recipes);
    assert_eq!(report.mode, CalibrationMode::PerfectAnchored);
    let best = report.best().unwrap();
    assert_eq!(best.recipe_id, "balanced");
    assert!(best.is_perfect_match);
    assert_eq!(best.calibrated_score, 98);
    let lean = report.results.iter().find(|r| r.recipe_id == "lean").unwrap();
    assert!(!lean.is_perfect_match);
    assert!(lean.calibrated_score <= 95);
}
