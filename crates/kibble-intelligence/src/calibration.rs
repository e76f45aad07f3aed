// ABOUTME: Cohort calibration rescaling one pet's recipe scores relative to the best candidate
// ABOUTME: Perfect-match anchored when a perfect match exists, lower ceiling otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cohort Calibrator
//!
//! A pure function of the exact snapshot passed in. Calibrated scores are
//! only meaningful within the cohort that produced them and must be
//! recomputed whenever the candidate set changes.

use std::collections::BTreeMap;

use kibble_core::constants::scores::{MAX_SCORE, MIN_SCORE};
use serde::{Deserialize, Serialize};

use crate::config::CalibrationConfig;

/// One scored recipe in a cohort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortEntry {
    /// Recipe id; a later entry with the same id replaces an earlier one
    pub recipe_id: String,
    /// Uncalibrated score
    pub raw_score: f64,
    /// Whether the strict perfect-match predicate held
    pub is_perfect_match: bool,
}

impl CohortEntry {
    /// Entry from an id, raw score and perfect-match flag
    #[must_use]
    pub fn new(recipe_id: impl Into<String>, raw_score: f64, is_perfect_match: bool) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            raw_score,
            is_perfect_match,
        }
    }
}

/// Which calibration rule applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalibrationMode {
    /// Scaled so the best perfect match lands on the perfect target
    PerfectAnchored,
    /// Scaled so the best recipe lands on the lower no-perfect target
    NoPerfect,
    /// Nothing to scale against; raw scores returned unchanged
    Degenerate,
}

impl CalibrationMode {
    /// Kebab-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PerfectAnchored => "perfect-anchored",
            Self::NoPerfect => "no-perfect",
            Self::Degenerate => "degenerate",
        }
    }
}

/// Calibrated scores of a cohort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationOutcome {
    /// Rule that applied
    pub mode: CalibrationMode,
    /// Multiplier applied to raw scores
    pub scale: f64,
    /// Calibrated score per recipe id
    pub scores: BTreeMap<String, u8>,
}

impl CalibrationOutcome {
    /// Calibrated score of a recipe
    #[must_use]
    pub fn score(&self, recipe_id: &str) -> Option<u8> {
        self.scores.get(recipe_id).copied()
    }
}

fn to_score(value: f64, ceiling: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.clamp(MIN_SCORE, ceiling.min(MAX_SCORE)).round() as u8
}

fn max_raw<'a, I>(entries: I) -> Option<f64>
where
    I: Iterator<Item = &'a CohortEntry>,
{
    entries
        .map(|e| e.raw_score)
        .filter(|s| s.is_finite())
        .fold(None, |best, s| Some(best.map_or(s, |b: f64| b.max(s))))
}

/// Rescale a cohort of raw scores for one pet
#[must_use]
pub fn calibrate(entries: &[CohortEntry], config: &CalibrationConfig) -> CalibrationOutcome {
    // last entry wins for duplicate ids
    let mut latest: BTreeMap<&str, &CohortEntry> = BTreeMap::new();
    for entry in entries {
        latest.insert(entry.recipe_id.as_str(), entry);
    }

    let best_perfect = max_raw(latest.values().copied().filter(|e| e.is_perfect_match));
    let best_overall = max_raw(latest.values().copied());

    let (mode, scale) = match (best_perfect, best_overall) {
        (Some(best), _) if best > 0.0 => {
            (CalibrationMode::PerfectAnchored, config.perfect_target / best)
        }
        (None, Some(best)) if best > 0.0 => {
            (CalibrationMode::NoPerfect, config.no_perfect_target / best)
        }
        _ => (CalibrationMode::Degenerate, 1.0),
    };

    let scores = latest
        .into_iter()
        .map(|(id, entry)| {
            let scaled = entry.raw_score * scale;
            let score = match mode {
                CalibrationMode::PerfectAnchored if entry.is_perfect_match => {
                    to_score(scaled, config.perfect_ceiling)
                }
                CalibrationMode::PerfectAnchored => to_score(scaled, config.non_perfect_ceiling),
                CalibrationMode::NoPerfect => to_score(scaled, config.no_perfect_target),
                CalibrationMode::Degenerate => to_score(entry.raw_score, MAX_SCORE),
            };
            (id.to_owned(), score)
        })
        .collect();

    CalibrationOutcome {
        mode,
        scale,
        scores,
    }
}
