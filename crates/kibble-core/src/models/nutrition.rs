// ABOUTME: Nutrient reference profiles and dry-matter aggregation results
// ABOUTME: NutrientProfile, SpeciesCompatibility tiers, AggregatedNutrition, and contributions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::animal::SpeciesType;

/// How appropriate an ingredient is for a species
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityTier {
    /// Safe in normal quantities
    Ok,
    /// Safe but should be kept to a small share
    Limit,
    /// Occasionally acceptable; flagged
    Caution,
    /// Must not be fed
    Avoid,
    /// No curated classification
    #[default]
    Unknown,
}

impl CompatibilityTier {
    /// Tier used by the safety factor; unclassified ingredients are treated as ok
    #[must_use]
    pub const fn effective(self) -> Self {
        match self {
            Self::Unknown => Self::Ok,
            other => other,
        }
    }
}

/// Per-species compatibility tiers of one ingredient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeciesCompatibility {
    /// Dog tier
    pub dog: CompatibilityTier,
    /// Cat tier
    pub cat: CompatibilityTier,
    /// Bird tier
    pub bird: CompatibilityTier,
    /// Reptile tier
    pub reptile: CompatibilityTier,
    /// Pocket-pet tier
    pub pocket_pet: CompatibilityTier,
}

impl SpeciesCompatibility {
    /// Same tier for every species
    #[must_use]
    pub const fn uniform(tier: CompatibilityTier) -> Self {
        Self {
            dog: tier,
            cat: tier,
            bird: tier,
            reptile: tier,
            pocket_pet: tier,
        }
    }

    /// Override the tier for one species
    #[must_use]
    pub const fn with(mut self, species: SpeciesType, tier: CompatibilityTier) -> Self {
        match species {
            SpeciesType::Dog => self.dog = tier,
            SpeciesType::Cat => self.cat = tier,
            SpeciesType::Bird => self.bird = tier,
            SpeciesType::Reptile => self.reptile = tier,
            SpeciesType::PocketPet => self.pocket_pet = tier,
        }
        self
    }

    /// Tier for a species
    #[must_use]
    pub const fn tier_for(&self, species: SpeciesType) -> CompatibilityTier {
        match species {
            SpeciesType::Dog => self.dog,
            SpeciesType::Cat => self.cat,
            SpeciesType::Bird => self.bird,
            SpeciesType::Reptile => self.reptile,
            SpeciesType::PocketPet => self.pocket_pet,
        }
    }
}

impl Default for SpeciesCompatibility {
    fn default() -> Self {
        Self::uniform(CompatibilityTier::Unknown)
    }
}

/// Confidence in a nutrient profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Lab or USDA data
    High,
    /// Curated from secondary sources
    Medium,
    /// Category estimate
    Low,
}

/// Origin of a nutrient profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    /// USDA `FoodData` Central
    Usda,
    /// Hand-curated entry
    Curated,
    /// Estimated from a category average
    Estimated,
}

/// Nutrient composition of one ingredient per 100 g as fed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientProfile {
    /// Protein grams
    pub protein_g: f64,
    /// Fat grams
    pub fat_g: f64,
    /// Fiber grams
    pub fiber_g: f64,
    /// Calcium milligrams
    pub calcium_mg: f64,
    /// Phosphorus milligrams
    pub phosphorus_mg: f64,
    /// Energy kilocalories
    pub kcal: f64,
    /// Water grams, when measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moisture_g: Option<f64>,
    /// Omega-3 grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omega3_g: Option<f64>,
    /// Vitamin C milligrams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_c_mg: Option<f64>,
    /// Species suitability
    pub compatibility: SpeciesCompatibility,
    /// Maximum recommended share of the recipe, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_inclusion_pct: Option<f64>,
    /// Data confidence
    pub confidence: Confidence,
    /// Data origin
    pub source: ProfileSource,
}

impl NutrientProfile {
    /// Profile from per-100 g values with unknown tiers and high USDA confidence
    #[must_use]
    pub const fn per_100g(
        protein_g: f64,
        fat_g: f64,
        fiber_g: f64,
        calcium_mg: f64,
        phosphorus_mg: f64,
        kcal: f64,
    ) -> Self {
        Self {
            protein_g,
            fat_g,
            fiber_g,
            calcium_mg,
            phosphorus_mg,
            kcal,
            moisture_g: None,
            omega3_g: None,
            vitamin_c_mg: None,
            compatibility: SpeciesCompatibility::uniform(CompatibilityTier::Unknown),
            max_inclusion_pct: None,
            confidence: Confidence::High,
            source: ProfileSource::Usda,
        }
    }

    /// Set measured moisture
    #[must_use]
    pub const fn moisture(mut self, grams: f64) -> Self {
        self.moisture_g = Some(grams);
        self
    }

    /// Set species tiers
    #[must_use]
    pub const fn tiers(mut self, compatibility: SpeciesCompatibility) -> Self {
        self.compatibility = compatibility;
        self
    }

    /// Set omega-3 content
    #[must_use]
    pub const fn omega3(mut self, grams: f64) -> Self {
        self.omega3_g = Some(grams);
        self
    }

    /// Set vitamin C content
    #[must_use]
    pub const fn vitamin_c(mut self, mg: f64) -> Self {
        self.vitamin_c_mg = Some(mg);
        self
    }

    /// Set the maximum inclusion share
    #[must_use]
    pub const fn max_inclusion(mut self, pct: f64) -> Self {
        self.max_inclusion_pct = Some(pct);
        self
    }

    /// Mark as a curated, medium-confidence entry
    #[must_use]
    pub const fn curated(mut self) -> Self {
        self.confidence = Confidence::Medium;
        self.source = ProfileSource::Curated;
        self
    }

    /// Mark as a category estimate
    #[must_use]
    pub const fn estimated(mut self) -> Self {
        self.confidence = Confidence::Low;
        self.source = ProfileSource::Estimated;
        self
    }

    /// Whether the entry is rich enough in omega-3 to count as a source
    #[must_use]
    pub fn is_omega3_rich(&self) -> bool {
        self.omega3_g.is_some_and(|g| g >= 1.0)
    }
}

/// Whether aggregate nutrition came from curated data or category estimates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutritionSource {
    /// At least one registry hit or precomputed totals
    Real,
    /// Only category fallbacks
    Estimated,
}

/// Where an ingredient's contribution came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Curated registry entry
    Registry,
    /// Category fallback estimate
    Fallback,
    /// Supplement mapping
    Supplement,
    /// Ingredient was skipped
    None,
}

/// One ingredient's contribution to the aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientContribution {
    /// Ingredient text as written
    pub name: String,
    /// Resolved weight in grams
    pub grams: f64,
    /// Registry key or fallback category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Data origin
    pub data_source: DataSource,
    /// Dry-matter grams contributed
    pub dry_matter_grams: f64,
    /// Calcium milligrams contributed
    pub calcium_mg: f64,
    /// Phosphorus milligrams contributed
    pub phosphorus_mg: f64,
}

/// Dry-matter nutrient summary of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedNutrition {
    /// Protein, percent of dry matter
    pub protein_pct: f64,
    /// Fat, percent of dry matter
    pub fat_pct: f64,
    /// Fiber, percent of dry matter
    pub fiber_pct: f64,
    /// Calcium, percent of dry matter
    pub calcium_pct: f64,
    /// Phosphorus, percent of dry matter
    pub phosphorus_pct: f64,
    /// Energy per 100 g as fed
    pub calories_per_100g: f64,
    /// Total wet weight in grams
    pub total_grams: f64,
    /// Dry-matter grams used as the denominator
    pub dry_matter_grams: f64,
    /// Curated or estimated
    pub source: NutritionSource,
    /// Any ingredient fell back to a category estimate
    pub uses_fallback_nutrition: bool,
    /// Ingredient names that fell back
    pub fallback_ingredients: Vec<String>,
    /// Share of named ingredients resolved from the registry, 0..=1
    pub data_coverage: f64,
    /// Per-ingredient contributions
    pub breakdown: Vec<IngredientContribution>,
    /// Data quality warnings
    pub warnings: Vec<String>,
}

impl AggregatedNutrition {
    /// Calcium to phosphorus ratio, `None` when either is zero
    #[must_use]
    pub fn ca_p_ratio(&self) -> Option<f64> {
        (self.calcium_pct > 0.0 && self.phosphorus_pct > 0.0)
            .then(|| self.calcium_pct / self.phosphorus_pct)
    }

    /// Empty aggregate for recipes with no usable ingredients
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            protein_pct: 0.0,
            fat_pct: 0.0,
            fiber_pct: 0.0,
            calcium_pct: 0.0,
            phosphorus_pct: 0.0,
            calories_per_100g: 0.0,
            total_grams: 0.0,
            dry_matter_grams: 0.0,
            source: NutritionSource::Estimated,
            uses_fallback_nutrition: false,
            fallback_ingredients: Vec::new(),
            data_coverage: 0.0,
            breakdown: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
