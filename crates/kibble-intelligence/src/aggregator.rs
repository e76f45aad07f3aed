// ABOUTME: Dry-matter nutrient aggregation over recipe ingredients and supplements
// ABOUTME: Registry lookups with category fallback, moisture inference, and coverage tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient Aggregator
//!
//! Percentages are reported on a dry-matter basis so recipes with different
//! water content are comparable: the same chicken fresh or dehydrated yields
//! the same protein percentage. Calories stay on an as-fed basis.
//!
//! Data gaps never fail aggregation. Unknown ingredients fall back to a
//! category estimate or contribute nothing, and the result records what
//! happened in `fallback_ingredients`, `data_coverage` and `warnings`.

use std::sync::LazyLock;

use kibble_core::models::{
    AggregatedNutrition, DataSource, IngredientContribution, NutrientProfile, NutrientTotals,
    NutritionSource, Recipe, Supplement,
};
use regex::Regex;
use tracing::debug;

use crate::amount_parser;
use crate::fallback::FallbackCategory;
use crate::key_resolver;
use crate::moisture::infer_moisture_pct;
use crate::registry::NutrientRegistry;

/// Supplement grams assumed when neither amount nor dosage can be read
const DEFAULT_SUPPLEMENT_GRAMS: f64 = 2.0;

/// Dry-matter share assumed when no ingredient contributed dry matter
const ASSUMED_DRY_MATTER_FRACTION: f64 = 0.25;

/// Batch weight assumed for precomputed totals without a weight
const DEFAULT_BATCH_GRAMS: f64 = 100.0;

static DOSAGE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(mg|g)\b").ok());

/// Absolute nutrient sums in grams, milligrams and kilocalories
#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    protein_g: f64,
    fat_g: f64,
    fiber_g: f64,
    calcium_mg: f64,
    phosphorus_mg: f64,
    kcal: f64,
    wet_g: f64,
    dry_matter_g: f64,
}

impl Totals {
    /// Add `grams` of an ingredient, returning its dry-matter grams
    fn add(&mut self, profile: &NutrientProfile, grams: f64, moisture_pct: f64) -> f64 {
        let factor = grams / 100.0;
        self.protein_g += profile.protein_g * factor;
        self.fat_g += profile.fat_g * factor;
        self.fiber_g += profile.fiber_g * factor;
        self.calcium_mg += profile.calcium_mg * factor;
        self.phosphorus_mg += profile.phosphorus_mg * factor;
        self.kcal += profile.kcal * factor;
        self.wet_g += grams;
        let dry = grams * (1.0 - moisture_pct.clamp(0.0, 100.0) / 100.0);
        self.dry_matter_g += dry;
        dry
    }
}

/// Map a supplement name to its registry key
#[must_use]
pub fn supplement_key(name: &str) -> Option<&'static str> {
    let lowered = name.to_lowercase();
    if lowered.contains("taurine") {
        Some("taurine_powder")
    } else if lowered.contains("eggshell")
        || lowered.contains("egg shell")
        || (lowered.contains("calcium")
            && (lowered.contains("carbonate") || lowered.contains("supplement")))
    {
        Some("calcium_carbonate")
    } else if lowered.contains("omega")
        || lowered.contains("fish oil")
        || lowered.contains("krill")
        || lowered.contains("salmon oil")
    {
        Some("fish_oil")
    } else {
        None
    }
}

fn supplement_grams(supplement: &Supplement) -> f64 {
    let parsed = amount_parser::parse_amount(supplement.amount.as_ref(), Some("supplement"));
    if parsed > 0.0 {
        return parsed;
    }
    supplement
        .dosage
        .as_deref()
        .and_then(dosage_grams)
        .unwrap_or(DEFAULT_SUPPLEMENT_GRAMS)
}

fn dosage_grams(dosage: &str) -> Option<f64> {
    let lowered = dosage.to_lowercase();
    let caps = DOSAGE_PATTERN.as_ref()?.captures(&lowered)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let grams = if caps.get(2)?.as_str() == "mg" {
        value / 1000.0
    } else {
        value
    };
    (grams > 0.0).then_some(grams)
}

/// Running state of one aggregation pass
#[derive(Default)]
struct Pass {
    totals: Totals,
    /// Dry matter from recipe ingredients, supplements excluded
    ingredient_dry_matter_g: f64,
    named: usize,
    registry_hits: usize,
    fallback_ingredients: Vec<String>,
    breakdown: Vec<IngredientContribution>,
    warnings: Vec<String>,
}

impl Pass {
    fn push(
        &mut self,
        name: &str,
        grams: f64,
        key: Option<String>,
        data_source: DataSource,
        profile: Option<(&NutrientProfile, f64)>,
    ) {
        let (dry, calcium_mg, phosphorus_mg) = match profile {
            Some((profile, moisture)) if grams > 0.0 => (
                self.totals.add(profile, grams, moisture),
                profile.calcium_mg * grams / 100.0,
                profile.phosphorus_mg * grams / 100.0,
            ),
            _ => (0.0, 0.0, 0.0),
        };
        if data_source != DataSource::Supplement {
            self.ingredient_dry_matter_g += dry;
        }
        self.breakdown.push(IngredientContribution {
            name: name.to_owned(),
            grams,
            key,
            data_source,
            dry_matter_grams: dry,
            calcium_mg,
            phosphorus_mg,
        });
    }

    fn ingredients(&mut self, recipe: &Recipe, registry: &NutrientRegistry) {
        for ingredient in &recipe.ingredients {
            let name = ingredient.name.trim();
            if name.is_empty() {
                continue;
            }
            self.named += 1;

            let grams = amount_parser::parse_amount(
                ingredient.amount.as_ref(),
                ingredient.category.as_deref(),
            );
            if grams <= 0.0 && ingredient.amount.is_some() {
                debug!(ingredient = name, "Unparsable ingredient amount");
                self.warnings
                    .push(format!("Could not determine amount for {name}; ingredient skipped"));
            }

            let key = key_resolver::normalize_key(name);
            if let Some(hit) = key_resolver::resolve_normalized(&key, registry) {
                self.registry_hits += 1;
                let moisture = hit
                    .profile
                    .moisture_g
                    .unwrap_or_else(|| infer_moisture_pct(name));
                self.push(
                    name,
                    grams,
                    Some(hit.key.to_owned()),
                    DataSource::Registry,
                    Some((hit.profile, moisture)),
                );
            } else if let Some(category) = FallbackCategory::classify(&key) {
                let profile = category.profile();
                let moisture = profile.moisture_g.unwrap_or_else(|| infer_moisture_pct(&key));
                if grams > 0.0 {
                    debug!(
                        ingredient = name,
                        category = category.as_str(),
                        "Using category fallback nutrition"
                    );
                    self.fallback_ingredients.push(name.to_owned());
                }
                self.push(
                    name,
                    grams,
                    Some(category.as_str().to_owned()),
                    DataSource::Fallback,
                    Some((&profile, moisture)),
                );
            } else {
                debug!(ingredient = name, key = %key, "No nutrient data for ingredient");
                self.warnings
                    .push(format!("No nutrient data for {name}; ingredient skipped"));
                self.push(name, grams, None, DataSource::None, None);
            }
        }
    }

    fn supplements(&mut self, recipe: &Recipe, registry: &NutrientRegistry) {
        for supplement in &recipe.supplements {
            let Some(key) = supplement_key(&supplement.name) else {
                debug!(supplement = %supplement.name, "Supplement has no nutrient mapping");
                continue;
            };
            let Some(profile) = registry.get(key) else {
                continue;
            };
            let grams = supplement_grams(supplement);
            let moisture = profile.moisture_g.unwrap_or(0.0);
            self.push(
                &supplement.name,
                grams,
                Some(key.to_owned()),
                DataSource::Supplement,
                Some((profile, moisture)),
            );
        }
    }
}

fn percent_of(amount: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        amount / denominator * 100.0
    } else {
        0.0
    }
}

/// Aggregate a recipe into dry-matter nutrient percentages
#[must_use]
pub fn aggregate(recipe: &Recipe, registry: &NutrientRegistry) -> AggregatedNutrition {
    let mut pass = Pass::default();
    pass.ingredients(recipe, registry);
    pass.supplements(recipe, registry);

    if let Some(totals) = &recipe.nutrient_totals {
        return from_precomputed(totals, pass);
    }

    let totals = pass.totals;
    let dry_matter = if totals.dry_matter_g > 0.0 {
        totals.dry_matter_g
    } else if totals.wet_g > 0.0 {
        totals.wet_g * ASSUMED_DRY_MATTER_FRACTION
    } else {
        1.0
    };
    let coverage = if pass.named > 0 {
        pass.registry_hits as f64 / pass.named as f64
    } else {
        0.0
    };

    AggregatedNutrition {
        protein_pct: percent_of(totals.protein_g, dry_matter),
        fat_pct: percent_of(totals.fat_g, dry_matter),
        fiber_pct: percent_of(totals.fiber_g, dry_matter),
        calcium_pct: percent_of(totals.calcium_mg / 1000.0, dry_matter),
        phosphorus_pct: percent_of(totals.phosphorus_mg / 1000.0, dry_matter),
        calories_per_100g: percent_of(totals.kcal, totals.wet_g),
        total_grams: totals.wet_g,
        dry_matter_grams: if totals.wet_g > 0.0 { dry_matter } else { 0.0 },
        source: if pass.registry_hits > 0 {
            NutritionSource::Real
        } else {
            NutritionSource::Estimated
        },
        uses_fallback_nutrition: !pass.fallback_ingredients.is_empty(),
        fallback_ingredients: pass.fallback_ingredients,
        data_coverage: coverage,
        breakdown: pass.breakdown,
        warnings: pass.warnings,
    }
}

/// Convert externally supplied absolute totals
fn from_precomputed(totals: &NutrientTotals, pass: Pass) -> AggregatedNutrition {
    let wet = totals
        .total_grams
        .filter(|g| *g > 0.0)
        .unwrap_or(DEFAULT_BATCH_GRAMS);
    let dry_matter = totals
        .dry_matter_grams
        .filter(|g| *g > 0.0)
        .or_else(|| (pass.ingredient_dry_matter_g > 0.0).then_some(pass.ingredient_dry_matter_g))
        .unwrap_or(wet * ASSUMED_DRY_MATTER_FRACTION);

    AggregatedNutrition {
        protein_pct: percent_of(totals.protein_g, dry_matter),
        fat_pct: percent_of(totals.fat_g, dry_matter),
        fiber_pct: percent_of(totals.fiber_g, dry_matter),
        calcium_pct: percent_of(totals.calcium_mg / 1000.0, dry_matter),
        phosphorus_pct: percent_of(totals.phosphorus_mg / 1000.0, dry_matter),
        calories_per_100g: percent_of(totals.calories_kcal, wet),
        total_grams: wet,
        dry_matter_grams: dry_matter,
        source: NutritionSource::Real,
        uses_fallback_nutrition: false,
        fallback_ingredients: Vec::new(),
        data_coverage: 1.0,
        breakdown: pass.breakdown,
        warnings: pass.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kibble_core::models::{IngredientReference, SpeciesType};

    #[test]
    fn test_supplement_mapping() {
        assert_eq!(supplement_key("Taurine 500mg"), Some("taurine_powder"));
        assert_eq!(supplement_key("Ground eggshell"), Some("calcium_carbonate"));
        assert_eq!(supplement_key("Calcium carbonate"), Some("calcium_carbonate"));
        assert_eq!(supplement_key("Wild salmon oil"), Some("fish_oil"));
        assert_eq!(supplement_key("Omega-3 capsules"), Some("fish_oil"));
        assert_eq!(supplement_key("Probiotic"), None);
    }

    #[test]
    fn test_dosage_parsing() {
        assert_eq!(dosage_grams("500mg daily"), Some(0.5));
        assert_eq!(dosage_grams("2 g"), Some(2.0));
        assert_eq!(dosage_grams("one capsule"), None);
        let s = Supplement {
            name: "fish oil".to_owned(),
            amount: None,
            dosage: None,
        };
        assert!((supplement_grams(&s) - DEFAULT_SUPPLEMENT_GRAMS).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_recipe_aggregates_to_zero() {
        let agg = aggregate(&Recipe::new("empty", SpeciesType::Dog), NutrientRegistry::builtin());
        assert!(agg.protein_pct.abs() < f64::EPSILON);
        assert!(agg.data_coverage.abs() < f64::EPSILON);
        assert_eq!(agg.source, NutritionSource::Estimated);
    }

    #[test]
    fn test_unknown_ingredient_falls_back_by_category() {
        let recipe = Recipe::new("fb", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("chicken breast", 50.0))
            .with_ingredient(IngredientReference::new("duck gizzards", 50.0));
        let agg = aggregate(&recipe, NutrientRegistry::builtin());
        assert!(agg.uses_fallback_nutrition);
        assert_eq!(agg.fallback_ingredients, vec!["duck gizzards".to_owned()]);
        assert!((agg.data_coverage - 0.5).abs() < 1e-9);
        assert_eq!(agg.breakdown[1].key.as_deref(), Some("fatty_protein"));
    }

    #[test]
    fn test_unparsable_amount_is_warned_and_skipped() {
        let recipe = Recipe::new("w", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("chicken breast", "a handful"));
        let agg = aggregate(&recipe, NutrientRegistry::builtin());
        assert!(agg.total_grams.abs() < f64::EPSILON);
        assert_eq!(agg.warnings.len(), 1);
    }

    #[test]
    fn test_precomputed_totals_divide_by_dry_matter() {
        let mut recipe = Recipe::new("t", SpeciesType::Dog);
        recipe.nutrient_totals = Some(NutrientTotals {
            protein_g: 30.0,
            fat_g: 10.0,
            fiber_g: 2.0,
            calcium_mg: 500.0,
            phosphorus_mg: 400.0,
            calories_kcal: 200.0,
            total_grams: Some(200.0),
            dry_matter_grams: Some(50.0),
        });
        let agg = aggregate(&recipe, NutrientRegistry::builtin());
        assert!((agg.protein_pct - 60.0).abs() < 1e-9);
        assert!((agg.calcium_pct - 1.0).abs() < 1e-9);
        assert!((agg.calories_per_100g - 100.0).abs() < 1e-9);
        assert_eq!(agg.source, NutritionSource::Real);
    }

    #[test]
    fn test_precomputed_totals_ignore_supplement_dry_matter() {
        let registry = NutrientRegistry::from_entries([
            (
                "chicken_breast",
                NutrientProfile::per_100g(20.0, 5.0, 0.0, 10.0, 200.0, 130.0).moisture(80.0),
            ),
            (
                "calcium_carbonate",
                NutrientProfile::per_100g(0.0, 0.0, 0.0, 40_000.0, 0.0, 0.0).moisture(0.0),
            ),
        ]);
        let mut recipe = Recipe::new("t", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("chicken breast", 100.0))
            .with_supplement(Supplement::new("calcium carbonate", "10 g"));
        recipe.nutrient_totals = Some(NutrientTotals {
            protein_g: 10.0,
            fat_g: 2.0,
            fiber_g: 0.0,
            calcium_mg: 0.0,
            phosphorus_mg: 0.0,
            calories_kcal: 130.0,
            total_grams: None,
            dry_matter_grams: None,
        });
        let agg = aggregate(&recipe, &registry);
        assert!((agg.dry_matter_grams - 20.0).abs() < 1e-9);
        assert!((agg.protein_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_registry_hit_moisture_inferred_from_display_name() {
        let registry = NutrientRegistry::from_entries([(
            "chicken_thighs",
            NutrientProfile::per_100g(19.0, 9.0, 0.0, 10.0, 180.0, 160.0),
        )]);
        let fresh = Recipe::new("f", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("chicken thighs", 100.0));
        let dehydrated = Recipe::new("d", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("dehydrated chicken thighs", 100.0));
        let fresh = aggregate(&fresh, &registry);
        let dehydrated = aggregate(&dehydrated, &registry);
        assert_eq!(dehydrated.breakdown[0].key.as_deref(), Some("chicken_thighs"));
        assert!((fresh.dry_matter_grams - 30.0).abs() < 1e-9);
        assert!((dehydrated.dry_matter_grams - 90.0).abs() < 1e-9);
    }
}
