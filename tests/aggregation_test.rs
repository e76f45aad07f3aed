// ABOUTME: Integration tests for amount parsing, key resolution and dry-matter aggregation
// ABOUTME: Covers the dry-matter invariant, kitchen measures, and category fallback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use kibble_scorer::intelligence::aggregator::aggregate;
use kibble_scorer::intelligence::fallback::FallbackCategory;
use kibble_scorer::intelligence::key_resolver::{normalize_key, resolve_normalized};
use kibble_scorer::intelligence::NutrientRegistry;
use kibble_scorer::models::{
    DataSource, IngredientReference, NutrientProfile, NutritionSource, Recipe, SpeciesType,
};

use common::{healthy_adult_dog, init_test_logging};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

#[test]
fn test_dry_matter_percentages_ignore_water_content() {
    init_test_logging();
    let registry = NutrientRegistry::from_entries([
        (
            "fresh_beef",
            NutrientProfile::per_100g(20.0, 10.0, 0.0, 10.0, 200.0, 170.0).moisture(70.0),
        ),
        (
            "dried_beef",
            NutrientProfile::per_100g(60.0, 30.0, 0.0, 30.0, 600.0, 510.0).moisture(10.0),
        ),
    ]);

    let fresh = aggregate(
        &Recipe::new("fresh", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("fresh beef", 100.0)),
        &registry,
    );
    let dried = aggregate(
        &Recipe::new("dried", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("dried beef", 100.0)),
        &registry,
    );

    assert!(close(fresh.dry_matter_grams, 30.0));
    assert!(close(dried.dry_matter_grams, 90.0));
    assert!(close(fresh.protein_pct, dried.protein_pct));
    assert!(close(fresh.fat_pct, dried.fat_pct));
    assert!(close(fresh.calcium_pct, dried.calcium_pct));
    assert!(close(fresh.phosphorus_pct, dried.phosphorus_pct));
    assert!(close(fresh.protein_pct, 200.0 / 3.0));
    assert!((fresh.data_coverage - 1.0).abs() < f64::EPSILON);
    assert_eq!(fresh.source, NutritionSource::Real);
}

#[test]
fn test_kitchen_measures_flow_into_totals() {
    let recipe = Recipe::new("measures", SpeciesType::Dog)
        .with_ingredient(IngredientReference::new("chicken breast", "1/2 lb"))
        .with_ingredient(IngredientReference::new("carrots", "1 cup"))
        .with_ingredient(IngredientReference::new("fish oil", "1 tbsp").with_category("oil"));

    let nutrition = aggregate(&recipe, NutrientRegistry::builtin());

    let grams: Vec<f64> = nutrition.breakdown.iter().map(|c| c.grams).collect();
    assert_eq!(grams.len(), 3);
    assert!(close(grams[0], 226.796));
    assert!(close(grams[1], 240.0));
    assert!(close(grams[2], 13.5));
    assert!(close(nutrition.total_grams, 226.796 + 240.0 + 13.5));
    assert!(nutrition.warnings.is_empty(), "{:?}", nutrition.warnings);
    assert!(nutrition
        .breakdown
        .iter()
        .all(|c| c.data_source == DataSource::Registry));
}

#[test]
fn test_vague_amount_is_skipped_with_warning() {
    let recipe = Recipe::new("vague", SpeciesType::Dog)
        .with_ingredient(IngredientReference::new("chicken breast", "200g"))
        .with_ingredient(IngredientReference::new("carrots", "a handful"));

    let nutrition = aggregate(&recipe, NutrientRegistry::builtin());

    assert!(close(nutrition.total_grams, 200.0));
    assert!(nutrition.warnings.iter().any(|w| w.contains("carrots")));
}

#[test]
fn test_unknown_ingredient_uses_category_fallback() {
    let registry = NutrientRegistry::builtin();
    let key = normalize_key("Duck Gizzards");
    assert_eq!(key, "duck_gizzard");
    assert!(resolve_normalized(&key, registry).is_none());
    assert_eq!(
        FallbackCategory::classify(&key),
        Some(FallbackCategory::FattyProtein)
    );

    let recipe = Recipe::new("gizzards", SpeciesType::Dog)
        .with_ingredient(IngredientReference::new("chicken breast", "300g"))
        .with_ingredient(IngredientReference::new("Duck Gizzards", "200g"));
    let nutrition = aggregate(&recipe, registry);

    assert!(nutrition.uses_fallback_nutrition);
    assert_eq!(nutrition.fallback_ingredients, vec!["Duck Gizzards".to_owned()]);
    assert!(close(nutrition.data_coverage, 0.5));
    let gizzards = &nutrition.breakdown[1];
    assert_eq!(gizzards.data_source, DataSource::Fallback);
    assert_eq!(gizzards.key.as_deref(), Some("fatty_protein"));
    assert!(gizzards.dry_matter_grams > 0.0);
}

#[test]
fn test_fallback_blocks_perfect_match() {
    let recipe = common::reference_dog_recipe("fallback")
        .with_ingredient(IngredientReference::new("duck gizzards", "5%"));
    let result = kibble_scorer::scoring::ScoringService::default()
        .score_recipe(&healthy_adult_dog(), &recipe);
    assert!(result.nutrition.uses_fallback_nutrition);
    assert!(!result.is_perfect_match);
}

#[test]
fn test_unresolvable_ingredient_contributes_nothing() {
    let recipe = Recipe::new("mystery", SpeciesType::Dog)
        .with_ingredient(IngredientReference::new("xylophone", "100g"));
    let nutrition = aggregate(&recipe, NutrientRegistry::builtin());

    assert_eq!(nutrition.breakdown[0].data_source, DataSource::None);
    assert!(nutrition.total_grams.abs() < f64::EPSILON);
    assert!(nutrition.data_coverage.abs() < f64::EPSILON);
    assert_eq!(nutrition.source, NutritionSource::Estimated);
    assert!(nutrition.protein_pct.abs() < f64::EPSILON);
}
