// ABOUTME: Scoring result models produced by the compatibility pipeline
// ABOUTME: FactorScore, Grade, IngredientAnalysis, SpeciesAssessment, and CompatibilityResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::animal::SpeciesType;
use super::nutrition::{AggregatedNutrition, CompatibilityTier, DataSource};
use crate::constants::grades;
use crate::constants::scores::{MAX_SCORE, MIN_SCORE};

/// Clamp a score into `[0, 100]`, mapping NaN to 0
#[must_use]
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        MIN_SCORE
    } else {
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// The seven independent factors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    /// Species compatibility tiers and banned ingredients
    IngredientSafety,
    /// Dry-matter nutrients against target ranges
    NutritionalAdequacy,
    /// Declared health concerns against benefit profiles
    HealthAlignment,
    /// Age bucket against recipe age groups
    LifeStageFit,
    /// Energy content against activity needs
    ActivityFit,
    /// Declared allergies against ingredient text
    AllergenSafety,
    /// Ingredient quality tiering
    IngredientQuality,
}

impl FactorKind {
    /// Every factor in evaluation order
    pub const ALL: [Self; 7] = [
        Self::IngredientSafety,
        Self::NutritionalAdequacy,
        Self::HealthAlignment,
        Self::LifeStageFit,
        Self::ActivityFit,
        Self::AllergenSafety,
        Self::IngredientQuality,
    ];

    /// Reporting weight of the factor; quality is a bonus input only
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::IngredientSafety => 0.25,
            Self::NutritionalAdequacy => 0.30,
            Self::HealthAlignment => 0.20,
            Self::LifeStageFit => 0.10,
            Self::ActivityFit => 0.05,
            Self::AllergenSafety => 0.10,
            Self::IngredientQuality => 0.0,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IngredientSafety => "Ingredient safety",
            Self::NutritionalAdequacy => "Nutritional adequacy",
            Self::HealthAlignment => "Health alignment",
            Self::LifeStageFit => "Life-stage fit",
            Self::ActivityFit => "Activity fit",
            Self::AllergenSafety => "Allergen safety",
            Self::IngredientQuality => "Ingredient quality",
        }
    }
}

/// Score of one factor with its explanation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorScore {
    /// Score in `[0, 100]`
    pub score: f64,
    /// Reporting weight in `[0, 1]`
    pub weight: f64,
    /// One-line explanation
    pub reasoning: String,
    /// Problems found
    pub issues: Vec<String>,
    /// Positive findings
    pub strengths: Vec<String>,
}

impl FactorScore {
    /// Factor score with clamped value and the factor's weight
    #[must_use]
    pub fn new(kind: FactorKind, score: f64, reasoning: impl Into<String>) -> Self {
        Self {
            score: clamp_score(score),
            weight: kind.weight(),
            reasoning: reasoning.into(),
            issues: Vec::new(),
            strengths: Vec::new(),
        }
    }

    /// Attach issues
    #[must_use]
    pub fn with_issues(mut self, issues: Vec<String>) -> Self {
        self.issues = issues;
        self
    }

    /// Attach strengths
    #[must_use]
    pub fn with_strengths(mut self, strengths: Vec<String>) -> Self {
        self.strengths = strengths;
        self
    }
}

/// Letter grade derived from the overall score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Grade {
    /// 95 and above
    #[serde(rename = "A+")]
    APlus,
    /// 90 to 94
    #[serde(rename = "A")]
    A,
    /// 85 to 89
    #[serde(rename = "B+")]
    BPlus,
    /// 80 to 84
    #[serde(rename = "B")]
    B,
    /// 75 to 79
    #[serde(rename = "C+")]
    CPlus,
    /// 70 to 74
    #[serde(rename = "C")]
    C,
    /// 60 to 69
    #[serde(rename = "D")]
    D,
    /// Below 60
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Grade for an overall score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= grades::A_PLUS {
            Self::APlus
        } else if score >= grades::A {
            Self::A
        } else if score >= grades::B_PLUS {
            Self::BPlus
        } else if score >= grades::B {
            Self::B
        } else if score >= grades::C_PLUS {
            Self::CPlus
        } else if score >= grades::C {
            Self::C
        } else if score >= grades::D {
            Self::D
        } else {
            Self::F
        }
    }

    /// Display form ("A+", "B", ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict on a single ingredient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IngredientVerdict {
    /// Ok tier with a positive health impact
    Excellent,
    /// Ok tier
    Good,
    /// Limit or caution tier
    Caution,
    /// Avoid tier, banned, or allergen
    Avoid,
}

/// Effect of an ingredient on the pet's declared concerns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthImpact {
    /// Helps a declared concern
    Positive,
    /// No known effect
    Neutral,
    /// Harmful
    Negative,
}

/// Per-ingredient analysis row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientAnalysis {
    /// Ingredient text as written
    pub ingredient: String,
    /// Registry key it resolved to
    pub resolved_key: String,
    /// Overall verdict
    pub verdict: IngredientVerdict,
    /// Species tier from the registry
    pub species_tier: CompatibilityTier,
    /// Effect on declared concerns
    pub health_impact: HealthImpact,
    /// Notes explaining the verdict
    pub notes: Vec<String>,
    /// Resolved grams
    pub grams: f64,
    /// Where nutrition data came from
    pub data_source: DataSource,
}

/// How the final score was assembled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    /// Gate safety score (0, 35 or 100 by default)
    pub safety_score: f64,
    /// Blended optimality score
    pub optimality_score: f64,
    /// Score after the safety gate, before bonuses
    pub pre_bonus: f64,
    /// Ingredient quality bonus
    pub quality_bonus: f64,
    /// Perfect-match bonus
    pub perfect_bonus: f64,
    /// Deterministic tie-breaker in `[-2, 2]`
    pub tie_breaker: i32,
}

/// Per-species top-level weight profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpeciesWeights {
    /// Safety weight
    pub safety: f64,
    /// Nutrition weight
    pub nutrition: f64,
    /// Health weight
    pub health: f64,
    /// Quality weight
    pub quality: f64,
}

impl SpeciesWeights {
    /// Sum of the weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.safety + self.nutrition + self.health + self.quality
    }

    /// Weights scaled to sum to 1; equal weights when the total is not positive
    #[must_use]
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 || !total.is_finite() {
            return Self {
                safety: 0.25,
                nutrition: 0.25,
                health: 0.25,
                quality: 0.25,
            };
        }
        Self {
            safety: self.safety / total,
            nutrition: self.nutrition / total,
            health: self.health / total,
            quality: self.quality / total,
        }
    }
}

/// Four top-level species factors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpeciesFactors {
    /// Safety score
    pub safety: f64,
    /// Nutrition score
    pub nutrition: f64,
    /// Health score
    pub health: f64,
    /// Quality score
    pub quality: f64,
}

/// Output of the species adjustment engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesAssessment {
    /// Species assessed
    pub species: SpeciesType,
    /// Normalized weight profile used
    pub weights: SpeciesWeights,
    /// Factors after overrides
    pub factors: SpeciesFactors,
    /// Weighted blend plus supplement boost, clamped
    pub overall_score: f64,
    /// Grade of `overall_score`
    pub grade: Grade,
    /// Supplement boost applied
    pub supplement_boost: f64,
    /// Set when a toxic ingredient short-circuited the assessment
    pub toxic_ingredient_detected: bool,
    /// Species-critical violations
    pub critical_violations: Vec<String>,
    /// Non-critical warnings
    pub warnings: Vec<String>,
    /// Positive findings
    pub strengths: Vec<String>,
}

/// Full explainable result of scoring one recipe for one pet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompatibilityResult {
    /// Recipe scored
    pub recipe_id: String,
    /// Pet species
    pub species: SpeciesType,
    /// Final score in `[0, 100]`
    pub overall_score: u8,
    /// Grade of `overall_score`
    pub grade: Grade,
    /// The seven factor scores
    pub factors: BTreeMap<FactorKind, FactorScore>,
    /// Assembly of the final score
    pub breakdown: ScoreBreakdown,
    /// Whether the strict perfect-match predicate held
    pub is_perfect_match: bool,
    /// Aggregated dry-matter nutrition
    pub nutrition: AggregatedNutrition,
    /// Per-ingredient analysis
    pub ingredient_analysis: Vec<IngredientAnalysis>,
    /// Nutrients below target
    pub nutritional_gaps: Vec<String>,
    /// Nutrients on target
    pub nutritional_strengths: Vec<String>,
    /// Deduplicated warnings
    pub warnings: Vec<String>,
    /// Suggested actions
    pub recommendations: Vec<String>,
    /// Safety and species-critical violations
    pub critical_violations: Vec<String>,
    /// Species engine output
    pub species_assessment: SpeciesAssessment,
}

impl CompatibilityResult {
    /// Score of one factor, 0 when absent
    #[must_use]
    pub fn factor_score(&self, kind: FactorKind) -> f64 {
        self.factors.get(&kind).map_or(0.0, |f| f.score)
    }

    /// Gate safety score
    #[must_use]
    pub const fn safety_score(&self) -> f64 {
        self.breakdown.safety_score
    }
}
