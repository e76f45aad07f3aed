// ABOUTME: Moisture inference for ingredients without a measured water content
// ABOUTME: Priority-ordered lexical heuristics from oils (0%) to fresh produce (~92%)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Moisture used when no heuristic matches
pub const DEFAULT_MOISTURE_PCT: f64 = 75.0;

/// Heuristic rules in priority order: (moisture percent, patterns); a space marks a word boundary
const MOISTURE_RULES: &[(f64, &[&str])] = &[
    // oils and mineral supplements
    (0.0, &[
        "oil", "lard", "tallow", "ghee", "butter ", "calcium", "eggshell", "bone meal",
        "mineral", "taurine", "vitamin", "kelp",
    ]),
    // dry goods
    (10.0, &[
        "pellet", "hay", "flour", "powder", "kibble", "dried", "dehydrated", "seed", "flake",
        "rolled oat", " meal ",
    ]),
    // cooked grains and legumes
    (70.0, &[
        "rice", "quinoa", "barley", "oat", "lentil", "chickpea", "millet", "pasta", "black bean",
        "kidney bean", "pinto",
    ]),
    // high-water produce
    (92.0, &[
        "lettuce", "cucumber", "celery", "zucchini", "spinach", "tomato", "watermelon", "pepper",
        "cabbage", "bok choy", "radish", "squash",
    ]),
    // general produce
    (90.0, &[
        "kale", "broccoli", "carrot", "green bean", "pea", "brussels", "cauliflower",
        "asparagu", "beet", "pumpkin", "greens", "vegetable", "sprout", "potato",
    ]),
    // soft fruit
    (88.0, &[
        "apple", "berry", "berries", "banana", "melon", "mango", "papaya", "pear", "peach",
        "fruit",
    ]),
    // raw meat, fish and poultry
    (70.0, &[
        "chicken", "turkey", "beef", "pork", "lamb", "fish", "salmon", "tuna", "sardine",
        "liver", "heart", "duck", "venison", "rabbit", "meat", "cricket", "mealworm",
    ]),
    (75.0, &["egg"]),
];

/// Inferred moisture percentage of an ingredient from its name or key
#[must_use]
pub fn infer_moisture_pct(name: &str) -> f64 {
    let text = format!(" {} ", name.to_lowercase().replace('_', " "));
    MOISTURE_RULES
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| text.contains(p)))
        .map_or(DEFAULT_MOISTURE_PCT, |(pct, _)| *pct)
}
