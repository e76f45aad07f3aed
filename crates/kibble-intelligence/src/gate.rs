// ABOUTME: Safety gate, optimality blend, quality and perfect-match bonuses, deterministic tie-breaker
// ABOUTME: Unsafe recipes are capped near the bottom regardless of how optimal they otherwise are
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Safety Gate
//!
//! The final score is assembled in three steps:
//!
//! 1. a safety score independent of the weighted factors
//!    (0 for anything that must be avoided, a reduced value for critical
//!    nutrient violations, 100 otherwise)
//! 2. the gate, which blends safety with the optimality score or caps the
//!    result when safety falls below the threshold
//! 3. bonuses and the deterministic tie-breaker

use kibble_core::constants::scores::{MAX_SCORE, MIN_SCORE};
use kibble_core::models::ScoreBreakdown;

use crate::config::{BonusConfig, OptimalityWeights, SafetyGateConfig};
use crate::hashing::tie_breaker;

/// Findings that decide the gate safety score
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SafetySignals {
    /// An avoid-tier or banned ingredient is present
    pub avoid_ingredient: bool,
    /// A declared allergen is present
    pub allergen_match: bool,
    /// A species-toxic ingredient is present
    pub species_toxic: bool,
    /// Relative deficit below the critical nutrient floor
    pub critical_deficit: Option<f64>,
    /// The species engine reported a critical violation
    pub species_critical: bool,
}

/// Safety score in `{0, critical_violation_safety, 100}`
#[must_use]
pub fn safety_score(config: &SafetyGateConfig, signals: &SafetySignals) -> f64 {
    if signals.avoid_ingredient || signals.allergen_match || signals.species_toxic {
        return MIN_SCORE;
    }
    let deficit_violation = signals
        .critical_deficit
        .is_some_and(|d| d > config.critical_deficit_threshold);
    if deficit_violation || signals.species_critical {
        return config.critical_violation_safety;
    }
    MAX_SCORE
}

/// Factor scores blended into the optimality score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalityInputs {
    /// Species-adjusted nutrition
    pub nutrition: f64,
    /// Health alignment
    pub health: f64,
    /// Life-stage fit
    pub life_stage: f64,
    /// Activity fit
    pub activity: f64,
    /// Ingredient quality
    pub quality: f64,
}

/// Fixed-weight blend of the non-safety factors
#[must_use]
pub fn optimality_score(weights: &OptimalityWeights, inputs: &OptimalityInputs) -> f64 {
    weights.nutrition.mul_add(
        inputs.nutrition,
        weights.health.mul_add(
            inputs.health,
            weights.life_stage.mul_add(
                inputs.life_stage,
                weights
                    .activity
                    .mul_add(inputs.activity, weights.quality * inputs.quality),
            ),
        ),
    )
}

/// Score before bonuses, capped when safety is below the gate threshold
#[must_use]
pub fn pre_bonus(config: &SafetyGateConfig, safety: f64, optimality: f64) -> f64 {
    if safety < config.threshold {
        safety
            .mul_add(
                config.unsafe_safety_factor,
                optimality * config.unsafe_optimality_factor,
            )
            .min(config.unsafe_score_cap)
    } else {
        optimality.mul_add(config.safe_optimality_weight, safety * config.safe_safety_weight)
    }
}

/// Bonus for ingredient quality above the baseline, capped
#[must_use]
pub fn quality_bonus(config: &BonusConfig, quality: f64) -> f64 {
    ((quality - config.quality_bonus_baseline) / config.quality_bonus_divisor)
        .clamp(0.0, config.quality_bonus_max)
}

/// Inputs of the final assembly
#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
    /// Recipe id seeding the tie-breaker
    pub recipe_id: &'a str,
    /// Gate safety score
    pub safety: f64,
    /// Optimality score
    pub optimality: f64,
    /// Ingredient quality score
    pub quality: f64,
    /// Whether the strict perfect-match predicate holds
    pub perfect_match: bool,
}

/// Final integer score and how it was assembled
#[must_use]
pub fn finalize(
    gate: &SafetyGateConfig,
    bonuses: &BonusConfig,
    input: &GateInput<'_>,
) -> (u8, ScoreBreakdown) {
    let pre = pre_bonus(gate, input.safety, input.optimality);
    let quality = quality_bonus(bonuses, input.quality);
    let perfect = if input.perfect_match {
        bonuses.perfect_match_bonus
    } else {
        0.0
    };
    let jitter = tie_breaker(input.recipe_id);
    let total = pre + quality + perfect + f64::from(jitter);
    let clamped = if total.is_finite() {
        total.clamp(MIN_SCORE, MAX_SCORE)
    } else {
        MIN_SCORE
    };

    let breakdown = ScoreBreakdown {
        safety_score: input.safety,
        optimality_score: input.optimality,
        pre_bonus: pre,
        quality_bonus: quality,
        perfect_bonus: perfect,
        tie_breaker: jitter,
    };
    (clamped.round() as u8, breakdown)
}
