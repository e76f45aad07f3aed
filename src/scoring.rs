// ABOUTME: Batch scoring service producing single-recipe results and calibrated cohort reports
// ABOUTME: Owns the scoring configuration and stamps cohort runs with an id and timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Service
//!
//! Thin orchestration over [`CompatibilityEngine`]. Scoring itself never
//! fails; the service adds run metadata and orders cohort results so a
//! report can be printed or serialized as-is.

use std::cmp::Ordering;
use std::time::Instant;

use chrono::{DateTime, Utc};
use kibble_core::models::{AnimalProfile, CompatibilityResult, Grade, Recipe, SpeciesType};
use kibble_intelligence::calibration::CalibrationMode;
use kibble_intelligence::{CompatibilityEngine, NutrientRegistry, ScoringConfig, ScoringContext};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// One recipe's place in a cohort report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecipe {
    /// 1-based position after sorting
    pub rank: usize,
    /// Recipe id
    pub recipe_id: String,
    /// Recipe display name
    pub recipe_name: String,
    /// Uncalibrated overall score
    pub raw_score: u8,
    /// Score after cohort calibration
    pub calibrated_score: u8,
    /// Grade of the calibrated score
    pub grade: Grade,
    /// Whether the strict perfect-match predicate held
    pub is_perfect_match: bool,
    /// Full explainable result
    pub result: CompatibilityResult,
}

/// Calibrated ranking of many recipes for one pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortReport {
    /// Unique id of this scoring run
    pub run_id: Uuid,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Pet the cohort was scored for, when it has an id
    pub pet_id: Option<String>,
    /// Pet species
    pub species: SpeciesType,
    /// Calibration rule that applied
    pub mode: CalibrationMode,
    /// Multiplier applied to raw scores
    pub scale: f64,
    /// Recipes ordered by calibrated score, then recipe id
    pub results: Vec<RankedRecipe>,
}

impl CohortReport {
    /// The first `n` ranked recipes
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedRecipe] {
        &self.results[..n.min(self.results.len())]
    }

    /// Best-ranked recipe, if any
    #[must_use]
    pub fn best(&self) -> Option<&RankedRecipe> {
        self.results.first()
    }
}

/// Scores recipes with an owned configuration over a registry
#[derive(Debug, Clone)]
pub struct ScoringService {
    registry: &'static NutrientRegistry,
    config: ScoringConfig,
}

impl Default for ScoringService {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringService {
    /// Service over the built-in registry
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_registry(NutrientRegistry::builtin(), config)
    }

    /// Service over an explicit registry
    #[must_use]
    pub const fn with_registry(registry: &'static NutrientRegistry, config: ScoringConfig) -> Self {
        Self { registry, config }
    }

    /// Scoring configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Registry in use
    #[must_use]
    pub const fn registry(&self) -> &'static NutrientRegistry {
        self.registry
    }

    fn engine(&self) -> CompatibilityEngine<'_> {
        CompatibilityEngine::new(ScoringContext::new(self.registry, &self.config))
    }

    /// Score one recipe for one pet
    #[must_use]
    pub fn score_recipe(&self, pet: &AnimalProfile, recipe: &Recipe) -> CompatibilityResult {
        let result = self.engine().score(recipe, pet);
        debug!(
            recipe = %result.recipe_id,
            score = result.overall_score,
            grade = %result.grade,
            "Scored single recipe"
        );
        result
    }

    /// Score and calibrate a cohort of recipes for one pet
    #[must_use]
    pub fn score_cohort(&self, pet: &AnimalProfile, recipes: &[Recipe]) -> CohortReport {
        let started = Instant::now();
        let cohort = self.engine().score_cohort(pet, recipes);
        let calibration = cohort.calibration;

        let mut ranked: Vec<RankedRecipe> = cohort
            .results
            .into_iter()
            .zip(recipes)
            .map(|(result, recipe)| {
                let calibrated_score = calibration
                    .score(&result.recipe_id)
                    .unwrap_or(result.overall_score);
                RankedRecipe {
                    rank: 0,
                    recipe_id: result.recipe_id.clone(),
                    recipe_name: recipe.name.clone(),
                    raw_score: result.overall_score,
                    calibrated_score,
                    grade: Grade::from_score(f64::from(calibrated_score)),
                    is_perfect_match: result.is_perfect_match,
                    result,
                }
            })
            .collect();

        ranked.sort_by(compare_ranked);
        for (index, entry) in ranked.iter_mut().enumerate() {
            entry.rank = index + 1;
        }

        let report = CohortReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            pet_id: pet.id.clone(),
            species: pet.species,
            mode: calibration.mode,
            scale: calibration.scale,
            results: ranked,
        };

        info!(
            run_id = %report.run_id,
            species = %report.species,
            recipes = report.results.len(),
            mode = calibration.mode.as_str(),
            best = report.best().map_or(0, |r| r.calibrated_score),
            elapsed_ms = started.elapsed().as_millis(),
            "Cohort scored"
        );
        report
    }
}

/// Higher calibrated score first, then recipe id ascending
fn compare_ranked(a: &RankedRecipe, b: &RankedRecipe) -> Ordering {
    b.calibrated_score
        .cmp(&a.calibrated_score)
        .then_with(|| a.recipe_id.cmp(&b.recipe_id))
}
