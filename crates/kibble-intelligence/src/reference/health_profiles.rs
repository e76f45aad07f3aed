// ABOUTME: Health concern benefit profiles: beneficial ingredients, avoid lists, macro targets
// ABOUTME: Drives the five-tier health alignment classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::AggregatedNutrition;

use super::normalize_tag;

/// Coarse band of a dry-matter macro percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroBand {
    /// Very low (fat only)
    VeryLow,
    /// Low
    Low,
    /// Moderate
    Moderate,
    /// High
    High,
}

/// Macro tracked by benefit profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
    /// Protein, percent of dry matter
    Protein,
    /// Fat, percent of dry matter
    Fat,
    /// Fiber, percent of dry matter
    Fiber,
    /// Phosphorus, percent of dry matter
    Phosphorus,
}

impl Macro {
    /// Band of this macro in an aggregate
    #[must_use]
    pub fn band(self, nutrition: &AggregatedNutrition) -> MacroBand {
        match self {
            Self::Protein => three_band(nutrition.protein_pct, 20.0, 30.0),
            Self::Fiber => three_band(nutrition.fiber_pct, 5.0, 10.0),
            Self::Phosphorus => three_band(nutrition.phosphorus_pct, 0.6, 1.0),
            Self::Fat => {
                let fat = nutrition.fat_pct;
                if fat < 8.0 {
                    MacroBand::VeryLow
                } else if fat < 12.0 {
                    MacroBand::Low
                } else if fat <= 18.0 {
                    MacroBand::Moderate
                } else {
                    MacroBand::High
                }
            }
        }
    }
}

fn three_band(value: f64, low_below: f64, high_above: f64) -> MacroBand {
    if value < low_below {
        MacroBand::Low
    } else if value <= high_above {
        MacroBand::Moderate
    } else {
        MacroBand::High
    }
}

/// Desired direction for one macro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroTarget {
    /// Macro
    pub nutrient: Macro,
    /// Desired band
    pub band: MacroBand,
}

impl MacroTarget {
    const fn new(nutrient: Macro, band: MacroBand) -> Self {
        Self { nutrient, band }
    }

    /// Whether the aggregate meets this target; a low target is also met by very low
    #[must_use]
    pub fn is_met(&self, nutrition: &AggregatedNutrition) -> bool {
        let actual = self.nutrient.band(nutrition);
        actual == self.band || (self.band == MacroBand::Low && actual == MacroBand::VeryLow)
    }
}

/// What helps and what hurts one health concern
#[derive(Debug, Clone, Copy)]
pub struct HealthProfile {
    /// Concern tag (kebab-case)
    pub concern: &'static str,
    /// Ingredients that help
    pub beneficial: &'static [&'static str],
    /// Ingredients to avoid
    pub avoid: &'static [&'static str],
    /// Desired macro directions
    pub targets: &'static [MacroTarget],
}

impl HealthProfile {
    /// Fraction in `[0, 1]` of macro targets met, 0.5 when the profile has none
    #[must_use]
    pub fn macro_fraction(&self, nutrition: &AggregatedNutrition) -> f64 {
        if self.targets.is_empty() {
            return 0.5;
        }
        let alignment = self
            .targets
            .iter()
            .map(|t| if t.is_met(nutrition) { 30.0 } else { 10.0 })
            .sum::<f64>()
            / self.targets.len() as f64;
        (alignment - 10.0) / 20.0
    }
}

use Macro::{Fat, Fiber, Phosphorus, Protein};
use MacroBand::{High, Low, Moderate, VeryLow};

const HEALTH_PROFILES: &[HealthProfile] = &[
    HealthProfile {
        concern: "kidney-disease",
        beneficial: &["fish oil", "omega", "egg white", "blueberr", "cranberr", "pumpkin"],
        avoid: &["liver", "organ", "sardine", "salt", "bone meal", "phosphorus"],
        targets: &[
            MacroTarget::new(Protein, Moderate),
            MacroTarget::new(Phosphorus, Low),
        ],
    },
    HealthProfile {
        concern: "pancreatitis",
        beneficial: &[
            "turkey breast", "chicken breast", "white fish", "cod", "rice", "pumpkin",
            "sweet potato",
        ],
        avoid: &["butter", "lard", "bacon", "tallow", "pork belly", "cheese", "coconut oil"],
        targets: &[MacroTarget::new(Fat, VeryLow)],
    },
    HealthProfile {
        concern: "allergies",
        beneficial: &[
            "salmon", "fish oil", "venison", "duck", "rabbit", "kangaroo", "sweet potato",
            "pumpkin",
        ],
        avoid: &["wheat", "corn", "soy", "dairy", "milk", "cheese"],
        targets: &[],
    },
    HealthProfile {
        concern: "weight-management",
        beneficial: &[
            "green bean", "pumpkin", "carrot", "broccoli", "celery", "turkey breast",
            "chicken breast", "cod", "white fish",
        ],
        avoid: &["butter", "lard", "cheese", "bacon", "peanut butter"],
        targets: &[
            MacroTarget::new(Fat, Low),
            MacroTarget::new(Fiber, High),
            MacroTarget::new(Protein, High),
        ],
    },
    HealthProfile {
        concern: "digestive-health",
        beneficial: &[
            "pumpkin", "sweet potato", "rice", "oat", "yogurt", "kefir", "ginger", "bone broth",
            "psyllium",
        ],
        avoid: &["onion", "garlic", "fried", "lard", "spicy"],
        targets: &[MacroTarget::new(Fiber, Moderate), MacroTarget::new(Fat, Low)],
    },
    HealthProfile {
        concern: "joint-mobility",
        beneficial: &[
            "fish oil", "salmon", "sardine", "green lipped mussel", "turmeric", "glucosamine",
            "chondroitin", "bone broth", "krill", "omega",
        ],
        avoid: &["corn", "wheat", "sugar"],
        targets: &[MacroTarget::new(Protein, High)],
    },
    HealthProfile {
        concern: "skin-coat",
        beneficial: &[
            "fish oil", "salmon", "sardine", "flax", "egg", "sweet potato", "omega", "krill",
        ],
        avoid: &["corn", "wheat", "soy"],
        targets: &[MacroTarget::new(Fat, Moderate)],
    },
    HealthProfile {
        concern: "dental-health",
        beneficial: &["carrot", "apple", "celery", "raw bone"],
        avoid: &["sugar", "molasses", "honey", "raisin"],
        targets: &[],
    },
    HealthProfile {
        concern: "urinary-support",
        beneficial: &["cranberr", "blueberr", "bone broth", "pumpkin"],
        avoid: &["spinach", "beet", "rhubarb", "swiss chard", "salt"],
        targets: &[
            MacroTarget::new(Phosphorus, Low),
            MacroTarget::new(Protein, Moderate),
        ],
    },
    HealthProfile {
        concern: "diabetes",
        beneficial: &[
            "green bean", "broccoli", "chicken breast", "turkey", "white fish", "psyllium",
        ],
        avoid: &["sugar", "honey", "molasses", "white rice", "corn syrup", "white potato"],
        targets: &[
            MacroTarget::new(Fiber, High),
            MacroTarget::new(Fat, Low),
            MacroTarget::new(Protein, High),
        ],
    },
    HealthProfile {
        concern: "heart-disease",
        beneficial: &[
            "fish oil", "salmon", "taurine", "heart", "sardine", "omega", "carnitine",
        ],
        avoid: &["salt", "sodium", "bacon", "ham", "jerky", "cured"],
        targets: &[MacroTarget::new(Fat, Moderate), MacroTarget::new(Protein, High)],
    },
];

/// Aliases accepted for profile concerns
const CONCERN_ALIASES: &[(&str, &str)] = &[
    ("kidney", "kidney-disease"),
    ("renal", "kidney-disease"),
    ("ckd", "kidney-disease"),
    ("allergy", "allergies"),
    ("food-allergies", "allergies"),
    ("obesity", "weight-management"),
    ("weight-loss", "weight-management"),
    ("overweight", "weight-management"),
    ("digestive", "digestive-health"),
    ("sensitive-stomach", "digestive-health"),
    ("joint", "joint-mobility"),
    ("joints", "joint-mobility"),
    ("arthritis", "joint-mobility"),
    ("skin", "skin-coat"),
    ("skin-and-coat", "skin-coat"),
    ("dental", "dental-health"),
    ("urinary", "urinary-support"),
    ("urinary-health", "urinary-support"),
    ("heart", "heart-disease"),
    ("cardiac", "heart-disease"),
];

/// Canonical concern tag, resolving aliases
#[must_use]
pub fn canonical_concern(concern: &str) -> String {
    let tag = normalize_tag(concern);
    CONCERN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == tag)
        .map_or(tag, |(_, canonical)| (*canonical).to_owned())
}

/// Benefit profile for a concern, `None` when unknown
#[must_use]
pub fn profile_for(concern: &str) -> Option<&'static HealthProfile> {
    let tag = canonical_concern(concern);
    HEALTH_PROFILES.iter().find(|p| p.concern == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_with_aliases() {
        assert_eq!(profile_for("Kidney Disease").map(|p| p.concern), Some("kidney-disease"));
        assert_eq!(profile_for("arthritis").map(|p| p.concern), Some("joint-mobility"));
        assert!(profile_for("hiccups").is_none());
    }

    #[test]
    fn test_macro_fraction() {
        let mut nutrition = AggregatedNutrition::empty();
        nutrition.fat_pct = 5.0;
        nutrition.fiber_pct = 12.0;
        nutrition.protein_pct = 40.0;
        let weight = profile_for("weight-management");
        assert_eq!(weight.map(|p| p.macro_fraction(&nutrition)), Some(1.0));

        nutrition.fat_pct = 25.0;
        let fraction = weight.map_or(0.0, |p| p.macro_fraction(&nutrition));
        assert!((fraction - 2.0 / 3.0).abs() < 1e-9);

        let dental = profile_for("dental-health");
        assert_eq!(dental.map(|p| p.macro_fraction(&nutrition)), Some(0.5));
    }
}
