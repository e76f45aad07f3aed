// ABOUTME: Ingredient quality factor wrapping the premium/standard/basic tiering
// ABOUTME: Reported for explanation and used only as a bonus input by the safety gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::{FactorKind, FactorScore};

use super::FactorInput;
use crate::reference::quality_tiers::{assess_quality, QualityAssessment};

/// Quality factor with the tier ratios behind it
#[derive(Debug, Clone, PartialEq)]
pub struct QualityFactor {
    /// Factor score
    pub factor: FactorScore,
    /// Tier breakdown
    pub assessment: QualityAssessment,
}

/// Score ingredient quality
#[must_use]
pub fn score(input: &FactorInput<'_>) -> QualityFactor {
    let assessment = assess_quality(input.recipe);
    let strengths = assessment
        .premium
        .iter()
        .map(|name| format!("{name} is a premium ingredient"))
        .collect();
    let issues = assessment
        .basic
        .iter()
        .map(|name| format!("{name} is a filler or low-grade ingredient"))
        .collect();
    let reasoning = format!(
        "{:.0}% premium, {:.0}% basic, {:.0}% fresh",
        assessment.premium_ratio * 100.0,
        assessment.basic_ratio * 100.0,
        assessment.fresh_ratio * 100.0
    );
    QualityFactor {
        factor: FactorScore::new(FactorKind::IngredientQuality, assessment.score, reasoning)
            .with_issues(issues)
            .with_strengths(strengths),
        assessment,
    }
}
