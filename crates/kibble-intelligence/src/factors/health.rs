// ABOUTME: Health alignment factor classifying each declared concern into five ordered tiers
// ABOUTME: First concern carries full weight, the rest 0.7; tiers come from benefit profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::{AggregatedNutrition, FactorKind, FactorScore, Recipe};
use serde::{Deserialize, Serialize};

use super::{searchable_names, FactorInput};
use crate::reference::health_profiles::{canonical_concern, profile_for};
use crate::reference::loose_match;

const SECONDARY_CONCERN_WEIGHT: f64 = 0.7;

/// How well a recipe serves one concern, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    /// Targeted, beneficial ingredients, nothing to avoid, macros aligned
    Ideal,
    /// Targeted with beneficial ingredients
    Targeted,
    /// Beneficial ingredients present, or targeted without them
    Beneficial,
    /// No signal either way
    Neutral,
    /// Declared unsuitable or contains ingredients to avoid
    Unsuitable,
}

/// Evaluation of a single concern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcernEvaluation {
    /// Canonical concern tag
    pub concern: String,
    /// Tier the recipe falls into
    pub tier: HealthTier,
    /// Tier score in `[0, 100]`
    pub score: f64,
    /// Beneficial ingredients found
    pub beneficial: Vec<String>,
    /// Ingredients to avoid found
    pub avoid: Vec<String>,
}

fn tag_matches(tags: &[String], concern: &str) -> bool {
    tags.iter()
        .any(|tag| canonical_concern(tag) == concern || loose_match(tag, concern))
}

fn matching_names(names: &[String], terms: &[&str]) -> Vec<String> {
    names
        .iter()
        .filter(|name| {
            let text = name.replace(['-', '_'], " ");
            terms.iter().any(|t| text.contains(t))
        })
        .cloned()
        .collect()
}

/// Classify one concern for a recipe
#[must_use]
pub fn evaluate_concern(
    concern: &str,
    recipe: &Recipe,
    names: &[String],
    nutrition: &AggregatedNutrition,
) -> ConcernEvaluation {
    let canonical = canonical_concern(concern);
    let targeted = tag_matches(&recipe.health_concerns, &canonical);
    let unsuitable = tag_matches(&recipe.not_suitable_for, &canonical);

    let (beneficial, avoid, macro_fraction) = profile_for(&canonical).map_or_else(
        || (Vec::new(), Vec::new(), 0.5),
        |profile| {
            (
                matching_names(names, profile.beneficial),
                matching_names(names, profile.avoid),
                profile.macro_fraction(nutrition),
            )
        },
    );

    let (tier, score) = if unsuitable || !avoid.is_empty() {
        let matches = avoid.len().max(1);
        (
            HealthTier::Unsuitable,
            10.0f64.mul_add(-((matches - 1) as f64), 30.0).max(0.0),
        )
    } else if targeted && !beneficial.is_empty() && macro_fraction >= 1.0 {
        (HealthTier::Ideal, 100.0)
    } else if targeted && !beneficial.is_empty() {
        (HealthTier::Targeted, 30.0f64.mul_add(macro_fraction, 70.0))
    } else if targeted || !beneficial.is_empty() {
        (HealthTier::Beneficial, 40.0f64.mul_add(macro_fraction, 50.0))
    } else {
        (HealthTier::Neutral, 50.0)
    };

    ConcernEvaluation {
        concern: canonical,
        tier,
        score,
        beneficial,
        avoid,
    }
}

/// Score the recipe against the pet's declared health concerns
#[must_use]
pub fn score(input: &FactorInput<'_>) -> FactorScore {
    let concerns: Vec<&str> = input
        .pet
        .health_concerns
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();
    if concerns.is_empty() {
        return FactorScore::new(FactorKind::HealthAlignment, 100.0, "No health concerns declared");
    }

    let names = searchable_names(input.recipe);
    let mut weighted: f64 = 0.0;
    let mut total_weight: f64 = 0.0;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();
    for (index, concern) in concerns.iter().enumerate() {
        let evaluation = evaluate_concern(concern, input.recipe, &names, input.nutrition);
        let weight = if index == 0 { 1.0 } else { SECONDARY_CONCERN_WEIGHT };
        weighted = evaluation.score.mul_add(weight, weighted);
        total_weight += weight;

        match evaluation.tier {
            HealthTier::Unsuitable if evaluation.avoid.is_empty() => {
                issues.push(format!("Recipe is marked unsuitable for {}", evaluation.concern));
            }
            HealthTier::Unsuitable => issues.push(format!(
                "{} may aggravate {}",
                evaluation.avoid.join(", "),
                evaluation.concern
            )),
            HealthTier::Neutral => {
                issues.push(format!("Nothing in this recipe targets {}", evaluation.concern));
            }
            HealthTier::Ideal | HealthTier::Targeted | HealthTier::Beneficial => {
                if evaluation.beneficial.is_empty() {
                    strengths.push(format!("Formulated for {}", evaluation.concern));
                } else {
                    strengths.push(format!(
                        "{} support {}",
                        evaluation.beneficial.join(", "),
                        evaluation.concern
                    ));
                }
            }
        }
    }

    let value = if total_weight > 0.0 { weighted / total_weight } else { 50.0 };
    FactorScore::new(
        FactorKind::HealthAlignment,
        value,
        format!("{} health concerns evaluated", concerns.len()),
    )
    .with_issues(issues)
    .with_strengths(strengths)
}
