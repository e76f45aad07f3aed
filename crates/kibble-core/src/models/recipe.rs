// ABOUTME: Recipe input models consumed by the scoring pipeline
// ABOUTME: Recipe, IngredientReference, Supplement, Amount, and precomputed NutrientTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::animal::SpeciesType;
use crate::errors::{AppError, AppResult};

/// Ingredient quantity as supplied by the recipe source
///
/// Either a gram value or free text ("1 1/2 cups", "2-3 tbsp", "a pinch").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    /// Quantity already expressed in grams
    Grams(f64),
    /// Free-text quantity to be parsed
    Text(String),
}

impl From<f64> for Amount {
    fn from(grams: f64) -> Self {
        Self::Grams(grams)
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Wire shape accepted for ingredients: a bare name or a full object
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIngredient {
    Name(String),
    Full {
        #[serde(alias = "ingredient")]
        name: String,
        #[serde(default)]
        amount: Option<Amount>,
        #[serde(default)]
        category: Option<String>,
    },
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawIngredient")]
pub struct IngredientReference {
    /// Free-text ingredient name
    pub name: String,
    /// Quantity, when given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Category hint ("fat", "supplement", "protein", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<RawIngredient> for IngredientReference {
    fn from(raw: RawIngredient) -> Self {
        match raw {
            RawIngredient::Name(name) => Self {
                name,
                amount: None,
                category: None,
            },
            RawIngredient::Full {
                name,
                amount,
                category,
            } => Self {
                name,
                amount,
                category,
            },
        }
    }
}

impl IngredientReference {
    /// Build an ingredient with an amount
    #[must_use]
    pub fn new(name: impl Into<String>, amount: impl Into<Amount>) -> Self {
        Self {
            name: name.into(),
            amount: Some(amount.into()),
            category: None,
        }
    }

    /// Attach a category hint
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSupplement {
    Name(String),
    Full {
        #[serde(alias = "product_name")]
        name: String,
        #[serde(default)]
        amount: Option<Amount>,
        #[serde(default)]
        dosage: Option<String>,
    },
}

/// Supplement added on top of the ingredient list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawSupplement")]
pub struct Supplement {
    /// Product or nutrient name
    pub name: String,
    /// Quantity, when given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Free-text dosage ("500mg daily")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
}

impl From<RawSupplement> for Supplement {
    fn from(raw: RawSupplement) -> Self {
        match raw {
            RawSupplement::Name(name) => Self {
                name,
                amount: None,
                dosage: None,
            },
            RawSupplement::Full {
                name,
                amount,
                dosage,
            } => Self {
                name,
                amount,
                dosage,
            },
        }
    }
}

impl Supplement {
    /// Supplement with a dosage string
    #[must_use]
    pub fn new(name: impl Into<String>, dosage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: None,
            dosage: Some(dosage.into()),
        }
    }
}

/// Precomputed absolute nutrient totals for a whole recipe batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NutrientTotals {
    /// Protein in grams
    pub protein_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams
    #[serde(default)]
    pub fiber_g: f64,
    /// Calcium in milligrams
    #[serde(default, alias = "ca_mg")]
    pub calcium_mg: f64,
    /// Phosphorus in milligrams
    #[serde(default, alias = "p_mg")]
    pub phosphorus_mg: f64,
    /// Energy in kilocalories
    #[serde(default, alias = "kcal")]
    pub calories_kcal: f64,
    /// Wet batch weight in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_grams: Option<f64>,
    /// Dry-matter grams when the source computed them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_matter_grams: Option<f64>,
}

/// Candidate recipe to be scored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Stable recipe identifier (seeds the tie-breaker)
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Species the recipe was written for
    #[serde(alias = "category")]
    pub species: SpeciesType,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<IngredientReference>,
    /// Supplements
    #[serde(default)]
    pub supplements: Vec<Supplement>,
    /// Age-group tags ("adult", "puppy", "all")
    #[serde(default, alias = "age_group")]
    pub age_groups: Vec<String>,
    /// Health concerns the recipe targets
    #[serde(default)]
    pub health_concerns: Vec<String>,
    /// Health concerns the recipe is unsuitable for
    #[serde(default)]
    pub not_suitable_for: Vec<String>,
    /// Precomputed absolute totals, when the source supplies them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrient_totals: Option<NutrientTotals>,
}

impl Recipe {
    /// Empty recipe for a species
    #[must_use]
    pub fn new(id: impl Into<String>, species: SpeciesType) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            species,
            ingredients: Vec::new(),
            supplements: Vec::new(),
            age_groups: Vec::new(),
            health_concerns: Vec::new(),
            not_suitable_for: Vec::new(),
            nutrient_totals: None,
        }
    }

    /// Append an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: IngredientReference) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Append a supplement
    #[must_use]
    pub fn with_supplement(mut self, supplement: Supplement) -> Self {
        self.supplements.push(supplement);
        self
    }

    /// Lowercased ingredient and supplement names
    #[must_use]
    pub fn lowercase_names(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|i| i.name.to_lowercase())
            .chain(self.supplements.iter().map(|s| s.name.to_lowercase()))
            .collect()
    }

    /// Reject structurally invalid recipes
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` when the id is blank or an ingredient has no name.
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::invalid_input("recipe id must not be empty"));
        }
        if let Some(pos) = self.ingredients.iter().position(|i| i.name.trim().is_empty()) {
            return Err(AppError::invalid_input(format!(
                "recipe {} has an unnamed ingredient at position {pos}",
                self.id
            )));
        }
        Ok(())
    }
}
