// ABOUTME: Animal profile models describing the pet a recipe is scored for
// ABOUTME: SpeciesType, ActivityLevel, LifeStage, and AnimalProfile with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::life_stage::{
    ADULT_MAX_AGE_YEARS, BABY_MAX_AGE_YEARS, GROWTH_MAX_AGE_YEARS, YOUNG_MAX_AGE_YEARS,
};
use crate::errors::{AppError, AppResult};

/// Closed set of supported species
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SpeciesType {
    /// Domestic dog
    #[serde(alias = "dogs", alias = "canine")]
    Dog,
    /// Domestic cat
    #[serde(alias = "cats", alias = "feline")]
    Cat,
    /// Companion bird (parrots, finches, canaries)
    #[serde(alias = "birds", alias = "avian")]
    Bird,
    /// Reptile (lizards, tortoises, snakes)
    #[serde(alias = "reptiles")]
    Reptile,
    /// Small mammal (rabbit, guinea pig, hamster, rat, ...)
    #[serde(alias = "pocket_pet", alias = "pocket-pets", alias = "pocket_pets")]
    PocketPet,
}

impl SpeciesType {
    /// Every supported species in declaration order
    pub const ALL: [Self; 5] = [
        Self::Dog,
        Self::Cat,
        Self::Bird,
        Self::Reptile,
        Self::PocketPet,
    ];

    /// Parse a species from loosely formatted text, returning `None` when unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "dog" | "dogs" | "canine" => Some(Self::Dog),
            "cat" | "cats" | "feline" => Some(Self::Cat),
            "bird" | "birds" | "avian" => Some(Self::Bird),
            "reptile" | "reptiles" => Some(Self::Reptile),
            "pocket-pet" | "pocket-pets" => Some(Self::PocketPet),
            _ => None,
        }
    }

    /// Canonical kebab-case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
            Self::Reptile => "reptile",
            Self::PocketPet => "pocket-pet",
        }
    }
}

impl fmt::Display for SpeciesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared activity level of the pet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Mostly resting
    Sedentary,
    /// Regular daily exercise
    Moderate,
    /// Working or sporting pet
    Active,
    /// Endurance or high-drive working pet
    #[serde(alias = "very_active")]
    VeryActive,
}

impl ActivityLevel {
    /// Daily energy need in kcal per kg of body weight
    #[must_use]
    pub const fn kcal_per_kg(self) -> f64 {
        match self {
            Self::Sedentary => 80.0,
            Self::Moderate => 100.0,
            Self::Active => 120.0,
            Self::VeryActive => 150.0,
        }
    }
}

/// Age bucket used for life-stage matching
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// Under one year
    Baby,
    /// One to two years
    Young,
    /// Two to seven years
    Adult,
    /// Seven years and older
    Senior,
}

impl LifeStage {
    /// Bucket an age in years
    #[must_use]
    pub fn from_age_years(age_years: f64) -> Self {
        if age_years < BABY_MAX_AGE_YEARS {
            Self::Baby
        } else if age_years < YOUNG_MAX_AGE_YEARS {
            Self::Young
        } else if age_years < ADULT_MAX_AGE_YEARS {
            Self::Adult
        } else {
            Self::Senior
        }
    }

    /// Position on the age axis, used to grade near-miss life-stage tags
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Baby => 0,
            Self::Young => 1,
            Self::Adult => 2,
            Self::Senior => 3,
        }
    }

    /// Recognize a recipe age-group tag, including common synonyms
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "baby" | "puppy" | "kitten" | "puppies" | "kittens" => Some(Self::Baby),
            "young" | "juvenile" => Some(Self::Young),
            "adult" => Some(Self::Adult),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }

    /// Tag spelling used in recipe age groups
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baby => "baby",
            Self::Young => "young",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }
}

/// The animal a recipe is being scored for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimalProfile {
    /// Caller-side identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Species
    #[serde(alias = "type")]
    pub species: SpeciesType,
    /// Breed, free text (drives bird and pocket-pet standards)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// Age in years
    #[serde(alias = "age")]
    pub age_years: f64,
    /// Body weight in kilograms
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    /// Activity level, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Declared health concerns (kebab-case tags such as `kidney-disease`)
    #[serde(default)]
    pub health_concerns: Vec<String>,
    /// Dietary restriction terms
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Declared allergies
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Ingredients this pet must never receive
    #[serde(default)]
    pub banned_ingredients: Vec<String>,
}

impl AnimalProfile {
    /// Minimal profile with no concerns, allergies or restrictions
    #[must_use]
    pub fn new(species: SpeciesType, age_years: f64, weight_kg: f64) -> Self {
        Self {
            id: None,
            name: None,
            species,
            breed: None,
            age_years,
            weight_kg,
            activity_level: None,
            health_concerns: Vec::new(),
            dietary_restrictions: Vec::new(),
            allergies: Vec::new(),
            banned_ingredients: Vec::new(),
        }
    }

    /// Set the breed
    #[must_use]
    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    /// Set the activity level
    #[must_use]
    pub const fn with_activity(mut self, level: ActivityLevel) -> Self {
        self.activity_level = Some(level);
        self
    }

    /// Reject structurally invalid profiles
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` when age or weight is negative or not finite.
    pub fn validate(&self) -> AppResult<()> {
        if !self.age_years.is_finite() || self.age_years < 0.0 {
            return Err(AppError::invalid_input(format!(
                "age_years must be a non-negative number, got {}",
                self.age_years
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg < 0.0 {
            return Err(AppError::invalid_input(format!(
                "weight_kg must be a non-negative number, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }

    /// Life-stage bucket for this pet's age
    #[must_use]
    pub fn life_stage(&self) -> LifeStage {
        LifeStage::from_age_years(self.age_years)
    }

    /// Whether growth nutrient targets apply
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.age_years < GROWTH_MAX_AGE_YEARS
    }

    /// Lowercased breed, empty when unknown
    #[must_use]
    pub fn breed_key(&self) -> String {
        self.breed
            .as_deref()
            .map(|b| b.trim().to_lowercase())
            .unwrap_or_default()
    }

    /// True when the pet declares any concern, allergy or restriction
    #[must_use]
    pub fn has_declared_sensitivities(&self) -> bool {
        !self.health_concerns.is_empty()
            || !self.allergies.is_empty()
            || !self.dietary_restrictions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_lossy_parsing() {
        assert_eq!(SpeciesType::from_str_lossy("Dogs"), Some(SpeciesType::Dog));
        assert_eq!(
            SpeciesType::from_str_lossy("pocket_pet"),
            Some(SpeciesType::PocketPet)
        );
        assert_eq!(SpeciesType::from_str_lossy("fish"), None);
    }

    #[test]
    fn test_species_serde_kebab_case() {
        let json = serde_json::to_string(&SpeciesType::PocketPet).unwrap();
        assert_eq!(json, "\"pocket-pet\"");
        let parsed: SpeciesType = serde_json::from_str("\"feline\"").unwrap();
        assert_eq!(parsed, SpeciesType::Cat);
    }

    #[test]
    fn test_life_stage_buckets() {
        assert_eq!(LifeStage::from_age_years(0.5), LifeStage::Baby);
        assert_eq!(LifeStage::from_age_years(1.0), LifeStage::Young);
        assert_eq!(LifeStage::from_age_years(4.0), LifeStage::Adult);
        assert_eq!(LifeStage::from_age_years(7.0), LifeStage::Senior);
        assert_eq!(LifeStage::from_tag("Puppy"), Some(LifeStage::Baby));
        assert_eq!(LifeStage::from_tag("juvenile"), Some(LifeStage::Young));
        assert_eq!(LifeStage::from_tag("all"), None);
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let pet = AnimalProfile::new(SpeciesType::Dog, 3.0, -1.0);
        assert!(pet.validate().is_err());
        let pet = AnimalProfile::new(SpeciesType::Dog, f64::NAN, 10.0);
        assert!(pet.validate().is_err());
        assert!(AnimalProfile::new(SpeciesType::Dog, 3.0, 10.0).validate().is_ok());
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let pet: AnimalProfile = serde_json::from_str(
            r#"{"species":"dog","age_years":3,"weight_kg":20,"activity_level":"very-active"}"#,
        )
        .unwrap();
        assert_eq!(pet.activity_level, Some(ActivityLevel::VeryActive));
        assert!(pet.allergies.is_empty());
        assert!(!pet.has_declared_sensitivities());
    }
}
