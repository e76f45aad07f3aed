// ABOUTME: Ingredient safety factor from species compatibility tiers and banned ingredients
// ABOUTME: Share-scaled avoid and caution penalties with a hard cap when anything must be avoided
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::{CompatibilityTier, FactorKind, FactorScore};
use serde::{Deserialize, Serialize};

use super::FactorInput;

const AVOID_PENALTY_PER_ITEM: f64 = 30.0;
const AVOID_PENALTY_CAP: f64 = 70.0;
const CAUTION_PENALTY_PER_ITEM: f64 = 10.0;
const CAUTION_PENALTY_CAP: f64 = 30.0;
/// Ceiling applied whenever one avoid-tier ingredient is present
const AVOID_SCORE_CEILING: f64 = 50.0;

/// One recipe ingredient with its species tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedIngredient {
    /// Ingredient text as written
    pub name: String,
    /// Registry key, when resolved
    pub key: Option<String>,
    /// Effective species tier (unknown reads as ok)
    pub tier: CompatibilityTier,
    /// Matched the pet's banned-ingredient list
    pub banned: bool,
}

impl ClassifiedIngredient {
    /// Avoid tier or banned for this pet
    #[must_use]
    pub fn is_avoid(&self) -> bool {
        self.banned || self.tier == CompatibilityTier::Avoid
    }

    /// Limit or caution tier, and not already avoid
    #[must_use]
    pub fn is_caution(&self) -> bool {
        !self.is_avoid()
            && matches!(
                self.tier,
                CompatibilityTier::Limit | CompatibilityTier::Caution
            )
    }
}

/// Ingredient safety factor with the classification behind it
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyAssessment {
    /// Factor score
    pub factor: FactorScore,
    /// Every named ingredient, in recipe order
    pub ingredients: Vec<ClassifiedIngredient>,
}

impl SafetyAssessment {
    /// Whether any ingredient is avoid tier or banned
    #[must_use]
    pub fn has_avoid(&self) -> bool {
        self.ingredients.iter().any(ClassifiedIngredient::is_avoid)
    }

    /// Classification of an ingredient by its text
    #[must_use]
    pub fn classification(&self, name: &str) -> Option<&ClassifiedIngredient> {
        self.ingredients.iter().find(|c| c.name == name)
    }
}

fn share_scaled(count: usize, total: usize, per_item: f64, cap: f64) -> f64 {
    if count == 0 || total == 0 {
        return 0.0;
    }
    let share = count as f64 / total as f64;
    (count as f64 * per_item * (1.0 + share)).min(cap)
}

/// Classify every ingredient and score the recipe's safety for the pet's species
#[must_use]
pub fn score(input: &FactorInput<'_>) -> SafetyAssessment {
    let species = input.pet.species;
    let banned: Vec<String> = input
        .pet
        .banned_ingredients
        .iter()
        .map(|b| b.trim().to_lowercase())
        .filter(|b| !b.is_empty())
        .collect();

    let ingredients: Vec<ClassifiedIngredient> = input
        .recipe
        .ingredients
        .iter()
        .map(|i| i.name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| {
            let resolved = input.registry.resolve(name);
            let tier = resolved.as_ref().map_or(CompatibilityTier::Ok, |hit| {
                hit.profile.compatibility.tier_for(species).effective()
            });
            let lowered = name.to_lowercase();
            ClassifiedIngredient {
                name: name.to_owned(),
                key: resolved.map(|hit| hit.key.to_owned()),
                tier,
                banned: banned.iter().any(|b| lowered.contains(b.as_str())),
            }
        })
        .collect();

    let total = ingredients.len();
    let avoid: Vec<&ClassifiedIngredient> = ingredients.iter().filter(|c| c.is_avoid()).collect();
    let caution: Vec<&ClassifiedIngredient> =
        ingredients.iter().filter(|c| c.is_caution()).collect();

    let mut value = 100.0
        - share_scaled(avoid.len(), total, AVOID_PENALTY_PER_ITEM, AVOID_PENALTY_CAP)
        - share_scaled(caution.len(), total, CAUTION_PENALTY_PER_ITEM, CAUTION_PENALTY_CAP);
    if !avoid.is_empty() {
        value = value.min(AVOID_SCORE_CEILING);
    }

    let mut issues = Vec::new();
    for item in &avoid {
        if item.banned {
            issues.push(format!("{} is banned for this pet", item.name));
        } else {
            issues.push(format!("{} should be avoided for {species}", item.name));
        }
    }
    for item in &caution {
        issues.push(format!("{} should be limited for {species}", item.name));
    }
    let strengths = if avoid.is_empty() && caution.is_empty() && total > 0 {
        vec![format!("All ingredients are suitable for {species}")]
    } else {
        Vec::new()
    };

    let reasoning = format!(
        "{total} ingredients checked: {} to avoid, {} to limit",
        avoid.len(),
        caution.len()
    );
    SafetyAssessment {
        factor: FactorScore::new(FactorKind::IngredientSafety, value, reasoning)
            .with_issues(issues)
            .with_strengths(strengths),
        ingredients,
    }
}
