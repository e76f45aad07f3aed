// ABOUTME: Scoring configuration for the safety gate, optimality blend, bonuses, and calibration
// ABOUTME: Defaults reproduce the tuned constants; environment overrides cover the main knobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration
//!
//! The gate and blend constants are empirically tuned. They are exposed as
//! configuration so deployments can experiment, but the defaults are the
//! values every test and fixture is calibrated against.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Tolerance used when checking that weights sum to 1
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Complete scoring configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Safety gate constants
    pub gate: SafetyGateConfig,
    /// Optimality blend weights
    pub optimality: OptimalityWeights,
    /// Bonus constants
    pub bonuses: BonusConfig,
    /// Perfect-match predicate thresholds
    pub perfect_match: PerfectMatchConfig,
    /// Cohort calibration targets
    pub calibration: CalibrationConfig,
}

/// Safety gate constants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SafetyGateConfig {
    /// Safety scores below this are gated (60)
    pub threshold: f64,
    /// Ceiling of the gated pre-bonus score (40)
    pub unsafe_score_cap: f64,
    /// Safety multiplier inside the gate (0.5)
    pub unsafe_safety_factor: f64,
    /// Optimality multiplier inside the gate (0.1)
    pub unsafe_optimality_factor: f64,
    /// Optimality weight for safe recipes (0.70)
    pub safe_optimality_weight: f64,
    /// Safety weight for safe recipes (0.30)
    pub safe_safety_weight: f64,
    /// Safety score assigned on a critical-nutrient violation (35)
    pub critical_violation_safety: f64,
    /// Relative deficit below a critical floor that counts as a violation (0.20)
    pub critical_deficit_threshold: f64,
}

impl Default for SafetyGateConfig {
    fn default() -> Self {
        Self {
            threshold: 60.0,
            unsafe_score_cap: 40.0,
            unsafe_safety_factor: 0.5,
            unsafe_optimality_factor: 0.1,
            safe_optimality_weight: 0.70,
            safe_safety_weight: 0.30,
            critical_violation_safety: 35.0,
            critical_deficit_threshold: 0.20,
        }
    }
}

/// Optimality blend weights; must sum to 1
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimalityWeights {
    /// Nutrition weight (0.40)
    pub nutrition: f64,
    /// Health weight (0.20)
    pub health: f64,
    /// Life-stage weight (0.15)
    pub life_stage: f64,
    /// Activity weight (0.10)
    pub activity: f64,
    /// Quality weight (0.15)
    pub quality: f64,
}

impl Default for OptimalityWeights {
    fn default() -> Self {
        Self {
            nutrition: 0.40,
            health: 0.20,
            life_stage: 0.15,
            activity: 0.10,
            quality: 0.15,
        }
    }
}

impl OptimalityWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.nutrition + self.health + self.life_stage + self.activity + self.quality
    }
}

/// Bonus constants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BonusConfig {
    /// Quality score at which the quality bonus starts (50)
    pub quality_bonus_baseline: f64,
    /// Quality points per bonus point (10)
    pub quality_bonus_divisor: f64,
    /// Maximum quality bonus (3)
    pub quality_bonus_max: f64,
    /// Flat perfect-match bonus (5)
    pub perfect_match_bonus: f64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            quality_bonus_baseline: 50.0,
            quality_bonus_divisor: 10.0,
            quality_bonus_max: 3.0,
            perfect_match_bonus: 5.0,
        }
    }
}

/// Perfect-match predicate thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerfectMatchConfig {
    /// Allowed distance from the range midpoint as a fraction of range width (0.15)
    pub nutrient_band_fraction: f64,
    /// Minimum registry data coverage, exclusive (0.95)
    pub min_data_coverage: f64,
    /// Minimum ingredient quality score (70)
    pub min_quality: f64,
    /// Minimum distinct coarse ingredient categories (3)
    pub min_categories: usize,
}

impl Default for PerfectMatchConfig {
    fn default() -> Self {
        Self {
            nutrient_band_fraction: 0.15,
            min_data_coverage: 0.95,
            min_quality: 70.0,
            min_categories: 3,
        }
    }
}

/// Cohort calibration targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalibrationConfig {
    /// Score the best perfect match is scaled to (98)
    pub perfect_target: f64,
    /// Ceiling for perfect matches in a perfect-anchored cohort (100)
    pub perfect_ceiling: f64,
    /// Ceiling for everything else in a perfect-anchored cohort (95)
    pub non_perfect_ceiling: f64,
    /// Score the best recipe is scaled to when no perfect match exists (92)
    pub no_perfect_target: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            perfect_target: 98.0,
            perfect_ceiling: 100.0,
            non_perfect_ceiling: 95.0,
            no_perfect_target: 92.0,
        }
    }
}

/// Apply an environment override when the variable is set
fn apply_override<T: FromStr>(key: &'static str, target: &mut T) -> Result<(), ConfigError> {
    match env::var(key) {
        Ok(raw) => {
            *target = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("{key}={raw} is not a valid number")))?;
            Ok(())
        }
        Err(env::VarError::NotPresent) => Ok(()),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

fn check_score_range(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange(format!(
            "{name} must be between 0 and 100, got {value}"
        )))
    }
}

impl ScoringConfig {
    /// Defaults with environment overrides applied, then validated
    ///
    /// Recognized variables: `KIBBLE_SAFETY_GATE_THRESHOLD`, `KIBBLE_UNSAFE_SCORE_CAP`,
    /// `KIBBLE_PERFECT_MATCH_BONUS`, `KIBBLE_CALIBRATION_PERFECT_TARGET`,
    /// `KIBBLE_CALIBRATION_NO_PERFECT_TARGET`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed numbers and any validation error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_override("KIBBLE_SAFETY_GATE_THRESHOLD", &mut config.gate.threshold)?;
        apply_override("KIBBLE_UNSAFE_SCORE_CAP", &mut config.gate.unsafe_score_cap)?;
        apply_override(
            "KIBBLE_PERFECT_MATCH_BONUS",
            &mut config.bonuses.perfect_match_bonus,
        )?;
        apply_override(
            "KIBBLE_CALIBRATION_PERFECT_TARGET",
            &mut config.calibration.perfect_target,
        )?;
        apply_override(
            "KIBBLE_CALIBRATION_NO_PERFECT_TARGET",
            &mut config.calibration.no_perfect_target,
        )?;
        config.validate()?;
        Ok(config)
    }

    /// Validate weights, thresholds and calibration targets
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` when blend weights don't sum to 1,
    /// `ConfigError::InvalidRange` for thresholds outside 0-100, and
    /// `ConfigError::ValueOutOfRange` for non-positive calibration targets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let optimality_sum = self.optimality.total();
        if (optimality_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "optimality weights must sum to 1.0, got {optimality_sum}"
            )));
        }
        let gate_sum = self.gate.safe_optimality_weight + self.gate.safe_safety_weight;
        if (gate_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "safe gate weights must sum to 1.0, got {gate_sum}"
            )));
        }

        check_score_range("gate.threshold", self.gate.threshold)?;
        check_score_range("gate.unsafe_score_cap", self.gate.unsafe_score_cap)?;
        check_score_range(
            "gate.critical_violation_safety",
            self.gate.critical_violation_safety,
        )?;
        check_score_range("bonuses.perfect_match_bonus", self.bonuses.perfect_match_bonus)?;
        check_score_range("bonuses.quality_bonus_max", self.bonuses.quality_bonus_max)?;
        check_score_range("perfect_match.min_quality", self.perfect_match.min_quality)?;
        check_score_range(
            "calibration.perfect_ceiling",
            self.calibration.perfect_ceiling,
        )?;
        check_score_range(
            "calibration.non_perfect_ceiling",
            self.calibration.non_perfect_ceiling,
        )?;

        if self.bonuses.quality_bonus_divisor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "bonuses.quality_bonus_divisor must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.perfect_match.min_data_coverage) {
            return Err(ConfigError::ValueOutOfRange(
                "perfect_match.min_data_coverage must be between 0 and 1".into(),
            ));
        }
        for (name, value) in [
            ("calibration.perfect_target", self.calibration.perfect_target),
            (
                "calibration.no_perfect_target",
                self.calibration.no_perfect_target,
            ),
        ] {
            if value <= 0.0 || value > 100.0 || value.is_nan() {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be in (0, 100], got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_unbalanced_optimality_weights() {
        let mut config = ScoringConfig::default();
        config.optimality.quality = 0.30;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        let mut config = ScoringConfig::default();
        config.gate.threshold = 120.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_rejects_non_positive_calibration_target() {
        let mut config = ScoringConfig::default();
        config.calibration.no_perfect_target = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
