// ABOUTME: Ingredient quality tiering into premium, standard and basic classes
// ABOUTME: Produces a 0-100 quality score from premium, basic and fresh ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::Recipe;
use serde::{Deserialize, Serialize};

const PREMIUM_KEYWORDS: &[&str] = &[
    "breast", "fillet", "filet", "salmon", "sardine", "heart", "turkey", "venison", "duck",
    "rabbit", "lamb", "bison", "kale", "spinach", "blueberr", "sweet potato", "quinoa",
    "broccoli", "pumpkin", "egg", "fish oil", "organic", "wild", "grass fed", "free range",
    "timothy",
];

const BASIC_KEYWORDS: &[&str] = &[
    "by product", "byproduct", "meal", "corn", "wheat", "soy", "gluten", "filler", "rendered",
    "digest", "animal fat", "sugar", "salt", "white rice", "flour", "syrup", "artificial",
    "bha", "bht",
];

const FRESH_KEYWORDS: &[&str] = &[
    "fresh", "raw", "whole", "breast", "thigh", "fillet", "kale", "spinach", "carrot",
    "broccoli", "sweet potato", "pumpkin", "blueberr", "apple", "celery", "green bean", "pea",
    "zucchini", "egg",
];

/// Quality class of one ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    /// Whole, named, minimally processed
    Premium,
    /// Unremarkable
    Standard,
    /// Fillers, by-products and additives
    Basic,
}

/// Quality assessment of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// Score in `[0, 100]`
    pub score: f64,
    /// Share of premium ingredients
    pub premium_ratio: f64,
    /// Share of basic ingredients
    pub basic_ratio: f64,
    /// Share of fresh ingredients
    pub fresh_ratio: f64,
    /// Premium ingredient names
    pub premium: Vec<String>,
    /// Basic ingredient names
    pub basic: Vec<String>,
}

fn mentions(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

/// Tier of a single ingredient name; basic markers outrank premium ones
#[must_use]
pub fn tier_of(name: &str) -> QualityTier {
    let text = name.to_lowercase().replace(['-', '_'], " ");
    if mentions(&text, BASIC_KEYWORDS) {
        QualityTier::Basic
    } else if mentions(&text, PREMIUM_KEYWORDS) {
        QualityTier::Premium
    } else {
        QualityTier::Standard
    }
}

/// Score a recipe's ingredient quality
#[must_use]
pub fn assess_quality(recipe: &Recipe) -> QualityAssessment {
    let names: Vec<&str> = recipe
        .ingredients
        .iter()
        .map(|i| i.name.trim())
        .filter(|n| !n.is_empty())
        .collect();
    if names.is_empty() {
        return QualityAssessment {
            score: 50.0,
            premium_ratio: 0.0,
            basic_ratio: 0.0,
            fresh_ratio: 0.0,
            premium: Vec::new(),
            basic: Vec::new(),
        };
    }

    let mut premium = Vec::new();
    let mut basic = Vec::new();
    let mut fresh = 0_usize;
    for name in &names {
        match tier_of(name) {
            QualityTier::Premium => premium.push((*name).to_owned()),
            QualityTier::Basic => basic.push((*name).to_owned()),
            QualityTier::Standard => {}
        }
        if mentions(&name.to_lowercase(), FRESH_KEYWORDS) {
            fresh += 1;
        }
    }

    let total = names.len() as f64;
    let premium_ratio = premium.len() as f64 / total;
    let basic_ratio = basic.len() as f64 / total;
    let fresh_ratio = fresh as f64 / total;

    let mut score: f64 = 50.0;
    score += if premium_ratio > 0.5 {
        20.0
    } else if premium_ratio > 0.3 {
        10.0
    } else if premium_ratio > 0.1 {
        5.0
    } else {
        0.0
    };
    score -= if basic_ratio > 0.3 {
        15.0
    } else if basic_ratio > 0.2 {
        10.0
    } else if basic_ratio > 0.1 {
        5.0
    } else {
        0.0
    };
    if fresh_ratio > 0.5 {
        score += 2.0;
    }

    QualityAssessment {
        score: score.round().clamp(0.0, 100.0),
        premium_ratio,
        basic_ratio,
        fresh_ratio,
        premium,
        basic,
    }
}
