// ABOUTME: Coarse ingredient categories (supplement, fat, protein, vegetable, fruit, grain)
// ABOUTME: First-match keyword classification used for diversity bonuses and perfect matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Coarse category of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoarseCategory {
    /// Vitamin and mineral additions
    Supplement,
    /// Oils and rendered fats
    Fat,
    /// Meat, fish, eggs and insects
    Protein,
    /// Vegetables
    Vegetable,
    /// Fruit
    Fruit,
    /// Grains
    Grain,
}

/// Keywords per category, checked in declaration order
const CATEGORY_KEYWORDS: &[(CoarseCategory, &[&str])] = &[
    (CoarseCategory::Supplement, &[
        "supplement", "powder", "calcium", "taurine", "vitamin", "mineral", "eggshell", "kelp",
    ]),
    (CoarseCategory::Fat, &["oil", "butter", "lard", "tallow", "fat"]),
    (CoarseCategory::Protein, &[
        "chicken", "turkey", "beef", "pork", "lamb", "fish", "salmon", "tuna", "sardine", "egg",
        "duck", "venison", "rabbit", "liver", "heart", "cricket", "mealworm", "insect", "bison",
        "quail",
    ]),
    (CoarseCategory::Vegetable, &[
        "carrot", "broccoli", "spinach", "kale", "pea", "bean", "potato", "pumpkin", "squash",
        "zucchini", "celery", "pepper", "lettuce", "cabbage", "green",
    ]),
    (CoarseCategory::Fruit, &[
        "apple", "berry", "berries", "banana", "melon", "mango", "papaya", "pear",
    ]),
    (CoarseCategory::Grain, &["rice", "oat", "quinoa", "barley", "millet", "wheat", "corn"]),
];

impl CoarseCategory {
    /// Category of an ingredient name, `None` when unrecognized
    #[must_use]
    pub fn classify(name: &str) -> Option<Self> {
        let text = name.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(category, _)| *category)
    }
}

/// Distinct coarse categories across a set of ingredient names
#[must_use]
pub fn distinct_categories<'a, I>(names: I) -> BTreeSet<CoarseCategory>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().filter_map(CoarseCategory::classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        assert_eq!(CoarseCategory::classify("Fish Oil"), Some(CoarseCategory::Fat));
        assert_eq!(
            CoarseCategory::classify("calcium powder"),
            Some(CoarseCategory::Supplement)
        );
        assert_eq!(
            CoarseCategory::classify("Sweet Potato"),
            Some(CoarseCategory::Vegetable)
        );
        assert_eq!(CoarseCategory::classify("tofu"), None);
    }

    #[test]
    fn test_distinct_categories() {
        let names = ["chicken breast", "sweet potato", "carrots", "fish oil"];
        let distinct = distinct_categories(names.iter().copied());
        assert_eq!(distinct.len(), 3);
    }
}
