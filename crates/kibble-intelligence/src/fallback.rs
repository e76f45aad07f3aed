// ABOUTME: Category-average nutrition for ingredients missing from the registry
// ABOUTME: Lexical pattern table mapping ingredient names to fallback nutrient estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::NutrientProfile;
use serde::{Deserialize, Serialize};

/// Category used when an ingredient has no curated entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackCategory {
    /// Chicken or turkey breast and fillet
    LeanProtein,
    /// Thigh, dark meat and organs
    FattyProtein,
    /// Other poultry
    Poultry,
    /// Beef, pork, lamb and game
    RedMeat,
    /// Fish and seafood
    Fish,
    /// Feeder insects
    Insect,
    /// Leafy greens
    LeafyGreen,
    /// Potatoes, squash and pumpkin
    StarchyVeg,
    /// Other vegetables
    Vegetable,
    /// Fruit
    Fruit,
    /// Vitamin and mineral supplements
    Supplement,
    /// Grains and flours
    Grain,
    /// Seeds and nuts
    Seed,
    /// Hay and grasses
    Hay,
}

/// Lexical patterns, first match wins; a space marks a word boundary
const CATEGORY_PATTERNS: &[(FallbackCategory, &[&str])] = &[
    (FallbackCategory::FattyProtein, &[
        "thigh", "dark meat", "liver", "heart", "kidney", "giblet", "organ", "gizzard",
    ]),
    (FallbackCategory::Poultry, &[
        "chicken", "turkey", "duck", "quail", "goose", "poultry", " hen ",
    ]),
    (FallbackCategory::RedMeat, &[
        "beef", "pork", "lamb", "venison", "bison", "goat", "rabbit", "veal", "mutton", "meat",
    ]),
    (FallbackCategory::Fish, &[
        "fish", "salmon", "tuna", "sardine", " cod", "mackerel", "trout", "herring", "anchov",
        "pollock", "tilapia", "shrimp",
    ]),
    (FallbackCategory::Insect, &[
        "cricket", "mealworm", "insect", "roach", "soldier fly", "larva", "grub", "silkworm",
        "superworm", "waxworm",
    ]),
    (FallbackCategory::LeafyGreen, &[
        "kale", "spinach", "lettuce", "collard", "swiss chard", "arugula", "green", "dandelion",
        "parsley", "cilantro", "bok choy", "romaine", "endive",
    ]),
    (FallbackCategory::StarchyVeg, &["potato", "yam", "squash", "pumpkin", "parsnip"]),
    (FallbackCategory::Vegetable, &[
        "carrot", "broccoli", " pea ", "bean", "pepper", "zucchini", "cucumber", "celery",
        "cabbage", "cauliflower", "asparagu", "beet", "sprout", "okra", "vegetable", "veggie",
    ]),
    (FallbackCategory::Fruit, &[
        "apple", "berry", "banana", "melon", "mango", "papaya", " pear", " fig", "kiwi", "peach",
        "plum", "orange", "cherry", "fruit",
    ]),
    (FallbackCategory::Supplement, &[
        "supplement", "powder", "calcium", "vitamin", "mineral", "eggshell", "kelp", "taurine",
        "probiotic",
    ]),
    (FallbackCategory::Grain, &[
        " rice", " oat", "quinoa", "barley", "millet", "wheat", "corn", "grain", "flour", "pasta",
        "bread", "buckwheat", "sorghum",
    ]),
    (FallbackCategory::Seed, &["seed", "sunflower", "flax", "chia", "hemp", "sesame", "nut "]),
    (FallbackCategory::Hay, &["hay", "timothy", "orchard grass", "alfalfa", "grass", "straw"]),
];

impl FallbackCategory {
    /// Category for an ingredient name, `None` when nothing matches
    #[must_use]
    pub fn classify(name: &str) -> Option<Self> {
        let text = format!(" {} ", name.to_lowercase().replace('_', " "));
        if (text.contains("chicken") || text.contains("turkey"))
            && (text.contains("breast") || text.contains("fillet") || text.contains("filet"))
        {
            return Some(Self::LeanProtein);
        }
        CATEGORY_PATTERNS
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| text.contains(p)))
            .map(|(category, _)| *category)
    }

    /// Category-average nutrients per 100 g as fed, with moisture
    #[must_use]
    pub const fn profile(self) -> NutrientProfile {
        // (protein, fat, fiber, moisture, calcium mg, phosphorus mg, kcal)
        let (protein, fat, fiber, moisture, calcium, phosphorus, kcal) = match self {
            Self::Poultry => (20.0, 8.0, 0.0, 70.0, 10.0, 180.0, 145.0),
            Self::RedMeat => (22.0, 12.0, 0.0, 65.0, 12.0, 190.0, 180.0),
            Self::Fish => (19.0, 6.0, 0.0, 75.0, 25.0, 220.0, 130.0),
            Self::Insect => (15.0, 8.0, 2.0, 70.0, 30.0, 200.0, 140.0),
            Self::LeafyGreen => (2.5, 0.4, 2.5, 92.0, 100.0, 50.0, 20.0),
            Self::StarchyVeg => (2.0, 0.2, 3.0, 75.0, 30.0, 50.0, 85.0),
            Self::Vegetable => (2.0, 0.5, 3.0, 85.0, 30.0, 40.0, 50.0),
            Self::Fruit => (1.0, 0.3, 2.0, 80.0, 10.0, 20.0, 60.0),
            Self::Supplement => (0.0, 0.0, 0.0, 5.0, 500.0, 300.0, 0.0),
            Self::Grain => (8.0, 2.0, 5.0, 10.0, 20.0, 150.0, 350.0),
            Self::Seed => (15.0, 10.0, 8.0, 8.0, 50.0, 400.0, 500.0),
            Self::Hay => (8.0, 2.0, 30.0, 10.0, 40.0, 30.0, 200.0),
            Self::LeanProtein => (28.0, 3.0, 0.0, 68.0, 10.0, 200.0, 140.0),
            Self::FattyProtein => (18.0, 15.0, 0.0, 65.0, 15.0, 200.0, 220.0),
        };
        NutrientProfile::per_100g(protein, fat, fiber, calcium, phosphorus, kcal)
            .moisture(moisture)
            .estimated()
    }

    /// Stable identifier used in contribution breakdowns
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeanProtein => "lean_protein",
            Self::FattyProtein => "fatty_protein",
            Self::Poultry => "poultry",
            Self::RedMeat => "red_meat",
            Self::Fish => "fish",
            Self::Insect => "insect",
            Self::LeafyGreen => "leafy_green",
            Self::StarchyVeg => "starchy_veg",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Supplement => "supplement",
            Self::Grain => "grain",
            Self::Seed => "seed",
            Self::Hay => "hay",
        }
    }
}
