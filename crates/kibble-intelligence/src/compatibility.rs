// ABOUTME: End-to-end compatibility engine scoring recipes for a pet with explainable results
// ABOUTME: Aggregation, factors, species adjustment, safety gate, perfect match and cohort ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Compatibility Engine
//!
//! [`CompatibilityEngine::score`] is a pure function of the recipe, the pet
//! and the [`ScoringContext`]: identical inputs produce identical results,
//! tie-breaker included. [`CompatibilityEngine::score_cohort`] scores many
//! recipes in parallel and calibrates the cohort afterwards.

use kibble_core::models::{
    ActivityLevel, AggregatedNutrition, AnimalProfile, CompatibilityResult, CompatibilityTier,
    DataSource, Grade, HealthImpact, IngredientAnalysis, IngredientVerdict, Recipe,
    SpeciesAssessment, SpeciesType,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::aggregate;
use crate::calibration::{calibrate, CalibrationOutcome, CohortEntry};
use crate::context::ScoringContext;
use crate::factors::life_stage::recipe_covers;
use crate::factors::nutrition::nutrient_value;
use crate::factors::{compute_all, FactorInput, FactorReport};
use crate::gate::{self, GateInput, OptimalityInputs, SafetySignals};
use crate::key_resolver::normalize_key;
use crate::reference::categories::distinct_categories;
use crate::reference::health_profiles::canonical_concern;
use crate::reference::species_checks::is_taurine_bearing;
use crate::reference::targets::{ca_p_standard, targets_for};
use crate::species::{self, SpeciesInput};

const OMEGA3_CONCERNS: &[&str] = &["joint-mobility", "skin-coat"];

/// Scored cohort for one pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortScores {
    /// Raw results in input order
    pub results: Vec<CompatibilityResult>,
    /// Calibrated scores for the cohort
    pub calibration: CalibrationOutcome,
}

/// Scores recipes against pets using an explicit context
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityEngine<'a> {
    context: ScoringContext<'a>,
}

impl CompatibilityEngine<'static> {
    /// Engine over the built-in registry and default configuration
    #[must_use]
    pub fn global() -> Self {
        Self::new(ScoringContext::global())
    }
}

impl<'a> CompatibilityEngine<'a> {
    /// Engine over an explicit context
    #[must_use]
    pub const fn new(context: ScoringContext<'a>) -> Self {
        Self { context }
    }

    /// Context the engine scores with
    #[must_use]
    pub const fn context(&self) -> &ScoringContext<'a> {
        &self.context
    }

    /// Score one recipe for one pet
    #[must_use]
    pub fn score(&self, recipe: &Recipe, pet: &AnimalProfile) -> CompatibilityResult {
        let registry = self.context.registry;
        let config = self.context.config;

        let nutrition = aggregate(recipe, registry);
        let report = compute_all(&FactorInput::new(recipe, pet, &nutrition, registry));
        let assessment = species::assess(&SpeciesInput {
            recipe,
            pet,
            nutrition: &nutrition,
            factors: &report,
        });

        let signals = SafetySignals {
            avoid_ingredient: report.safety.has_avoid(),
            allergen_match: report.allergen.has_match(),
            species_toxic: assessment.toxic_ingredient_detected,
            critical_deficit: report.nutrition.critical_deficit,
            species_critical: !assessment.critical_violations.is_empty(),
        };
        let safety = gate::safety_score(&config.gate, &signals);
        let optimality = gate::optimality_score(
            &config.optimality,
            &OptimalityInputs {
                nutrition: assessment.factors.nutrition,
                health: report.health.score,
                life_stage: report.life_stage.score,
                activity: report.activity.score,
                quality: report.quality.factor.score,
            },
        );
        let perfect_match = self.is_perfect_match(recipe, pet, &nutrition, &report);
        let (overall_score, breakdown) = gate::finalize(
            &config.gate,
            &config.bonuses,
            &GateInput {
                recipe_id: &recipe.id,
                safety,
                optimality,
                quality: report.quality.factor.score,
                perfect_match,
            },
        );

        debug!(
            recipe = %recipe.id,
            species = %pet.species,
            score = overall_score,
            safety,
            optimality,
            perfect_match,
            "Scored recipe"
        );

        let critical_violations = self.critical_violations(&report, &assessment);
        let warnings = collect_warnings(&nutrition, &report, &assessment);
        let recommendations = recommendations(pet, &nutrition, &report);
        let ingredient_analysis = analyze_ingredients(pet, &nutrition, &report, &self.context);

        CompatibilityResult {
            recipe_id: recipe.id.clone(),
            species: pet.species,
            overall_score,
            grade: Grade::from_score(f64::from(overall_score)),
            factors: report.scores(),
            breakdown,
            is_perfect_match: perfect_match,
            ingredient_analysis,
            nutritional_gaps: report.nutrition.gaps.clone(),
            nutritional_strengths: report.nutrition.strengths.clone(),
            warnings,
            recommendations,
            critical_violations,
            species_assessment: assessment,
            nutrition,
        }
    }

    /// Score every recipe for one pet in parallel, then calibrate the cohort
    #[must_use]
    pub fn score_cohort(&self, pet: &AnimalProfile, recipes: &[Recipe]) -> CohortScores {
        let results: Vec<CompatibilityResult> =
            recipes.par_iter().map(|recipe| self.score(recipe, pet)).collect();
        let entries: Vec<CohortEntry> = results
            .iter()
            .map(|r| {
                CohortEntry::new(
                    r.recipe_id.clone(),
                    f64::from(r.overall_score),
                    r.is_perfect_match,
                )
            })
            .collect();
        let calibration = calibrate(&entries, &self.context.config.calibration);
        CohortScores {
            results,
            calibration,
        }
    }

    /// Strict perfect-match predicate; every condition must hold
    #[must_use]
    pub fn is_perfect_match(
        &self,
        recipe: &Recipe,
        pet: &AnimalProfile,
        nutrition: &AggregatedNutrition,
        report: &FactorReport,
    ) -> bool {
        let thresholds = &self.context.config.perfect_match;
        if pet.has_declared_sensitivities()
            || recipe.species != pet.species
            || !recipe_covers(recipe, pet.life_stage())
            || report.safety.has_avoid()
        {
            return false;
        }

        let targets = targets_for(pet.species, pet.is_growing());
        let nutrients_centered = targets.ranges().iter().all(|(nutrient, range, _)| {
            range.within_inner_band(
                nutrient_value(nutrition, *nutrient),
                thresholds.nutrient_band_fraction,
            )
        });
        let ca_p_optimal = nutrition
            .ca_p_ratio()
            .is_some_and(|ratio| ca_p_standard(pet.species).optimal.contains(ratio));
        let data_complete = !nutrition.uses_fallback_nutrition
            && nutrition.data_coverage > thresholds.min_data_coverage;
        let categories =
            distinct_categories(recipe.ingredients.iter().map(|i| i.name.as_str())).len();

        nutrients_centered
            && ca_p_optimal
            && data_complete
            && report.quality.factor.score >= thresholds.min_quality
            && categories >= thresholds.min_categories
    }

    fn critical_violations(
        &self,
        report: &FactorReport,
        assessment: &SpeciesAssessment,
    ) -> Vec<String> {
        let mut violations = assessment.critical_violations.clone();
        if let Some(deficit) = report.nutrition.critical_deficit {
            if deficit > self.context.config.gate.critical_deficit_threshold {
                violations.push(format!(
                    "Critical nutrient is {:.0}% below the species minimum",
                    deficit * 100.0
                ));
            }
        }
        violations
    }
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

fn collect_warnings(
    nutrition: &AggregatedNutrition,
    report: &FactorReport,
    assessment: &SpeciesAssessment,
) -> Vec<String> {
    let mut warnings = Vec::new();
    if nutrition.uses_fallback_nutrition {
        push_unique(
            &mut warnings,
            format!(
                "Estimated nutrition used for: {}",
                nutrition.fallback_ingredients.join(", ")
            ),
        );
    }
    for warning in nutrition.warnings.iter().chain(&assessment.warnings) {
        push_unique(&mut warnings, warning.clone());
    }
    for issue in report
        .safety
        .factor
        .issues
        .iter()
        .chain(&report.allergen.factor.issues)
    {
        push_unique(&mut warnings, issue.clone());
    }
    warnings
}

fn recommendations(
    pet: &AnimalProfile,
    nutrition: &AggregatedNutrition,
    report: &FactorReport,
) -> Vec<String> {
    let mut out = Vec::new();
    if report.nutrition.factor.score < 70.0 {
        out.push("Consider adding supplements to balance the nutrient profile".to_owned());
    }
    if report.health.score < 60.0 && !pet.health_concerns.is_empty() {
        out.push("This recipe may not address the pet's health concerns".to_owned());
    }
    if report.activity.score < 70.0 && pet.activity_level == Some(ActivityLevel::VeryActive) {
        out.push("Add calorie-dense ingredients for a very active pet".to_owned());
    }
    if nutrition.uses_fallback_nutrition {
        out.push(format!(
            "Verify nutrient data for: {}",
            nutrition.fallback_ingredients.join(", ")
        ));
    }
    out
}

fn health_impact(
    pet: &AnimalProfile,
    name: &str,
    omega3_rich: bool,
    negative: bool,
) -> HealthImpact {
    if negative {
        return HealthImpact::Negative;
    }
    let omega3_concern = pet
        .health_concerns
        .iter()
        .any(|c| OMEGA3_CONCERNS.contains(&canonical_concern(c).as_str()));
    if (omega3_rich && omega3_concern)
        || (pet.species == SpeciesType::Cat && is_taurine_bearing(name))
    {
        HealthImpact::Positive
    } else {
        HealthImpact::Neutral
    }
}

fn analyze_ingredients(
    pet: &AnimalProfile,
    nutrition: &AggregatedNutrition,
    report: &FactorReport,
    context: &ScoringContext<'_>,
) -> Vec<IngredientAnalysis> {
    report
        .safety
        .ingredients
        .iter()
        .map(|classified| {
            let name = classified.name.as_str();
            let lowered = name.to_lowercase();
            let contribution = nutrition
                .breakdown
                .iter()
                .find(|c| c.name == name && c.data_source != DataSource::Supplement);
            let allergen = report.allergen.offending.contains(&lowered);
            let omega3_rich = context
                .registry
                .resolve(name)
                .is_some_and(|hit| hit.profile.is_omega3_rich());

            let mut notes = Vec::new();
            if classified.banned {
                notes.push("Banned for this pet".to_owned());
            }
            if allergen {
                notes.push("Contains a declared allergen".to_owned());
            }
            let species = pet.species;
            match classified.tier {
                CompatibilityTier::Avoid => notes.push(format!("Avoid for {species}")),
                CompatibilityTier::Caution => notes.push(format!("Use with caution for {species}")),
                CompatibilityTier::Limit => notes.push(format!("Limit portion for {species}")),
                CompatibilityTier::Ok | CompatibilityTier::Unknown => {}
            }
            let data_source = contribution.map_or(DataSource::None, |c| c.data_source);
            if data_source == DataSource::Fallback {
                notes.push("Nutrition estimated from ingredient category".to_owned());
            }

            let avoid = classified.is_avoid() || allergen;
            let impact = health_impact(pet, name, omega3_rich, avoid);
            let verdict = if avoid {
                IngredientVerdict::Avoid
            } else if classified.is_caution() {
                IngredientVerdict::Caution
            } else if impact == HealthImpact::Positive {
                IngredientVerdict::Excellent
            } else {
                IngredientVerdict::Good
            };

            IngredientAnalysis {
                ingredient: classified.name.clone(),
                resolved_key: contribution
                    .and_then(|c| c.key.clone())
                    .unwrap_or_else(|| normalize_key(name)),
                verdict,
                species_tier: classified.tier,
                health_impact: impact,
                notes,
                grams: contribution.map_or(0.0, |c| c.grams),
                data_source,
            }
        })
        .collect()
}
