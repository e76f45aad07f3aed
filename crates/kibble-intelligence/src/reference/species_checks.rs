// ABOUTME: Species-specific ingredient checks shared by the species adjustment engine
// ABOUTME: Bird toxins, pellet and hay shares, taurine, vitamin C and calcium support, breed standards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::{AggregatedNutrition, DataSource, Recipe};

use super::targets::NutrientRange;

const BIRD_TOXIC: &[&str] = &[
    "avocado", "chocolate", "cocoa", "caffeine", "coffee", "alcohol", "onion", "garlic",
    "mushroom", "apple seed", "cherry pit", "peach pit", "apricot pit", "rhubarb",
    "tomato leaves", "eggplant leaves", "salt", "sugar", "artificial sweetener", "xylitol",
    "persimmon", "raw bean", "moldy",
];

const PELLET_TERMS: &[&str] = &["pellet", "kibble", "fortified diet", "formulated diet"];

const HAY_TERMS: &[&str] = &["hay", "timothy", "orchard grass", "meadow grass", "alfalfa"];

/// Dedicated calcium sources only; leafy greens do not count
const CALCIUM_SUPPORT_TERMS: &[&str] =
    &["calcium", "cuttlebone", "mineral block", "eggshell", "egg shell"];

const TAURINE_TERMS: &[&str] = &[
    "taurine", "heart", "organ", "liver", "kidney", "giblet", "muscle", "chicken", "turkey",
    "beef", "fish", "salmon", "tuna", "sardine", "mackerel", "lamb", "pork", "duck", "venison",
    "rabbit", "meat", "mussel", "clam", "shellfish", "krill", "mouse", "mice",
];

const VITAMIN_C_TERMS: &[&str] = &[
    "bell pepper", "red pepper", "kale", "broccoli", "brussels sprout", "parsley",
    "mustard green", "collard green", "guinea pig pellet", "vitamin c", "ascorbic acid",
];

fn any_mentions<'r>(recipe: &'r Recipe, terms: &[&str]) -> Vec<&'r str> {
    recipe
        .ingredients
        .iter()
        .map(|i| i.name.as_str())
        .chain(recipe.supplements.iter().map(|s| s.name.as_str()))
        .filter(|name| {
            let lowered = name.to_lowercase().replace(['-', '_'], " ");
            terms.iter().any(|t| lowered.contains(t))
        })
        .collect()
}

/// Ingredient and supplement names that are toxic to birds
#[must_use]
pub fn bird_toxic_ingredients(recipe: &Recipe) -> Vec<&str> {
    any_mentions(recipe, BIRD_TOXIC)
}

/// Whether the recipe carries a taurine source (supplement, organ, muscle meat or fish)
#[must_use]
pub fn has_taurine_source(recipe: &Recipe) -> bool {
    !any_mentions(recipe, TAURINE_TERMS).is_empty()
}

/// Whether a single ingredient name is a taurine source
#[must_use]
pub fn is_taurine_bearing(name: &str) -> bool {
    let lowered = name.to_lowercase().replace(['-', '_'], " ");
    TAURINE_TERMS.iter().any(|t| lowered.contains(t))
}

/// Whether the recipe carries a calcium-support ingredient or supplement
#[must_use]
pub fn has_calcium_support(recipe: &Recipe) -> bool {
    !any_mentions(recipe, CALCIUM_SUPPORT_TERMS).is_empty()
}

/// Whether the recipe carries a vitamin C source
#[must_use]
pub fn has_vitamin_c_source(recipe: &Recipe) -> bool {
    !any_mentions(recipe, VITAMIN_C_TERMS).is_empty()
}

/// Weight share (percent) of ingredients matching any term
///
/// Uses resolved grams from the aggregate; falls back to an ingredient count share
/// when no amounts could be resolved.
#[must_use]
pub fn share_pct(recipe: &Recipe, nutrition: &AggregatedNutrition, terms: &[&str]) -> f64 {
    let matches = |name: &str| {
        let lowered = name.to_lowercase().replace(['-', '_'], " ");
        terms.iter().any(|t| lowered.contains(t))
    };

    let ingredients = nutrition
        .breakdown
        .iter()
        .filter(|c| c.data_source != DataSource::Supplement);
    let total: f64 = ingredients.clone().map(|c| c.grams).sum();
    if total > 0.0 {
        let matched: f64 = ingredients.filter(|c| matches(&c.name)).map(|c| c.grams).sum();
        return matched / total * 100.0;
    }

    let named: Vec<&str> = recipe
        .ingredients
        .iter()
        .map(|i| i.name.as_str())
        .filter(|n| !n.trim().is_empty())
        .collect();
    if named.is_empty() {
        return 0.0;
    }
    named.iter().filter(|n| matches(n)).count() as f64 / named.len() as f64 * 100.0
}

/// Pellet share of the recipe, percent
#[must_use]
pub fn pellet_pct(recipe: &Recipe, nutrition: &AggregatedNutrition) -> f64 {
    share_pct(recipe, nutrition, PELLET_TERMS)
}

/// Hay share of the recipe, percent
#[must_use]
pub fn hay_pct(recipe: &Recipe, nutrition: &AggregatedNutrition) -> f64 {
    share_pct(recipe, nutrition, HAY_TERMS)
}

fn breed_has_word(breed: &str, words: &[&str]) -> bool {
    breed
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| words.contains(&w))
}

/// Pellet and Ca:P standard for a bird breed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdStandard {
    /// Minimum pellet share, percent
    pub pellet_min_pct: f64,
    /// Acceptable Ca:P band
    pub ca_p: NutrientRange,
}

/// Standard for a lowercased bird breed; budgie defaults apply when unknown
#[must_use]
pub fn bird_standard(breed: &str) -> BirdStandard {
    let small_finch = breed_has_word(breed, &["canary", "canaries", "finch", "finches"]);
    let (pellet_min_pct, min, max) = if small_finch {
        (60.0, 1.3, 2.3)
    } else if breed.contains("african grey") || breed.contains("african gray") {
        (75.0, 1.5, 2.5)
    } else if breed_has_word(breed, &["macaw", "macaws"]) {
        (70.0, 1.7, 2.7)
    } else {
        (70.0, 1.5, 2.5)
    };
    BirdStandard {
        pellet_min_pct,
        ca_p: NutrientRange { min, max },
    }
}

/// Hay and vitamin C standard for a pocket-pet breed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PocketPetStandard {
    /// Minimum hay share, percent
    pub hay_min_pct: f64,
    /// Whether dietary vitamin C is essential
    pub vitamin_c_critical: bool,
}

impl PocketPetStandard {
    /// Hay-obligate herbivore (rabbit, guinea pig, chinchilla)
    #[must_use]
    pub fn is_hay_eater(&self) -> bool {
        self.hay_min_pct >= 70.0
    }
}

/// Standard for a lowercased pocket-pet breed; hamster defaults apply when unknown
#[must_use]
pub fn pocket_pet_standard(breed: &str) -> PocketPetStandard {
    let guinea_pig = breed.contains("guinea pig") || breed.contains("cavy");
    let (hay_min_pct, vitamin_c_critical) = if guinea_pig {
        (70.0, true)
    } else if breed_has_word(breed, &["rabbit", "rabbits", "bunny"]) {
        (80.0, false)
    } else if breed_has_word(breed, &["chinchilla", "chinchillas"]) {
        (70.0, false)
    } else if breed_has_word(breed, &["ferret", "hedgehog"]) || breed.contains("sugar glider") {
        (0.0, false)
    } else if breed_has_word(breed, &["gerbil", "gerbils"]) {
        (25.0, false)
    } else if breed_has_word(breed, &["mouse", "mice", "rat", "rats"]) {
        (20.0, false)
    } else {
        (30.0, false)
    };
    PocketPetStandard {
        hay_min_pct,
        vitamin_c_critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kibble_core::models::{
        IngredientContribution, IngredientReference, SpeciesType, Supplement,
    };

    fn contribution(name: &str, grams: f64) -> IngredientContribution {
        IngredientContribution {
            name: name.to_owned(),
            grams,
            key: None,
            data_source: DataSource::Registry,
            dry_matter_grams: 0.0,
            calcium_mg: 0.0,
            phosphorus_mg: 0.0,
        }
    }

    #[test]
    fn test_bird_toxins_detected_in_supplements_too() {
        let recipe = Recipe::new("b", SpeciesType::Bird)
            .with_ingredient(IngredientReference::new("millet spray", 10.0))
            .with_supplement(Supplement::new("Garlic powder", "1g"));
        assert_eq!(bird_toxic_ingredients(&recipe), vec!["Garlic powder"]);
    }

    #[test]
    fn test_hay_share_uses_grams() {
        let recipe = Recipe::new("p", SpeciesType::PocketPet);
        let mut nutrition = AggregatedNutrition::empty();
        nutrition.breakdown = vec![contribution("Timothy hay", 80.0), contribution("kale", 20.0)];
        assert!((hay_pct(&recipe, &nutrition) - 80.0).abs() < 1e-9);
        assert!(pellet_pct(&recipe, &nutrition).abs() < 1e-9);
    }

    #[test]
    fn test_breed_standards() {
        assert!(pocket_pet_standard("guinea pig").vitamin_c_critical);
        assert!(pocket_pet_standard("holland lop rabbit").is_hay_eater());
        assert!(!pocket_pet_standard("pirate hamster").is_hay_eater());
        assert!((pocket_pet_standard("fancy rat").hay_min_pct - 20.0).abs() < 1e-9);
        assert!((bird_standard("canary").pellet_min_pct - 60.0).abs() < 1e-9);
        assert!((bird_standard("").ca_p.min - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_taurine_sources() {
        let veg = Recipe::new("v", SpeciesType::Cat)
            .with_ingredient(IngredientReference::new("sweet potato", 50.0));
        assert!(!has_taurine_source(&veg));
        let with_heart = veg.with_ingredient(IngredientReference::new("chicken hearts", 10.0));
        assert!(has_taurine_source(&with_heart));
        assert!(is_taurine_bearing("Beef-Heart"));
        assert!(!is_taurine_bearing("pumpkin"));
    }
}
