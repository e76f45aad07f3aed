// ABOUTME: Dry-matter nutrient target ranges, Ca:P standards and critical nutrient floors
// ABOUTME: Per species with separate growth targets for dogs and cats under one year
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::SpeciesType;
use serde::{Deserialize, Serialize};

/// Relative weights of the tracked nutrients in the adequacy score
pub const NUTRIENT_WEIGHTS: NutrientWeights = NutrientWeights {
    protein: 0.35,
    fat: 0.25,
    fiber: 0.15,
    calcium: 0.125,
    phosphorus: 0.125,
};

/// Weight per tracked nutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientWeights {
    /// Protein weight
    pub protein: f64,
    /// Fat weight
    pub fat: f64,
    /// Fiber weight
    pub fiber: f64,
    /// Calcium weight
    pub calcium: f64,
    /// Phosphorus weight
    pub phosphorus: f64,
}

/// Closed target range, percent of dry matter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl NutrientRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Width of the range
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Whether a value lies inside the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// `100 − 100·|actual − midpoint| / width`, clamped at 0
    #[must_use]
    pub fn score(&self, actual: f64) -> f64 {
        let width = self.width();
        if width <= 0.0 {
            return if (actual - self.min).abs() < f64::EPSILON { 100.0 } else { 0.0 };
        }
        (100.0 - 100.0 * (actual - self.midpoint()).abs() / width).max(0.0)
    }

    /// Whether a value sits within `fraction × width` of the midpoint
    #[must_use]
    pub fn within_inner_band(&self, actual: f64, fraction: f64) -> bool {
        (actual - self.midpoint()).abs() <= fraction * self.width()
    }
}

/// Tracked nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Crude protein
    Protein,
    /// Crude fat
    Fat,
    /// Crude fiber
    Fiber,
    /// Calcium
    Calcium,
    /// Phosphorus
    Phosphorus,
}

impl Nutrient {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::Fat => "Fat",
            Self::Fiber => "Fiber",
            Self::Calcium => "Calcium",
            Self::Phosphorus => "Phosphorus",
        }
    }
}

/// Target ranges for one species and life phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientTargets {
    /// Protein range
    pub protein: NutrientRange,
    /// Fat range
    pub fat: NutrientRange,
    /// Fiber range
    pub fiber: NutrientRange,
    /// Calcium range
    pub calcium: NutrientRange,
    /// Phosphorus range
    pub phosphorus: NutrientRange,
}

impl NutrientTargets {
    const fn new(
        protein: (f64, f64),
        fat: (f64, f64),
        fiber: (f64, f64),
        calcium: (f64, f64),
        phosphorus: (f64, f64),
    ) -> Self {
        Self {
            protein: NutrientRange::new(protein.0, protein.1),
            fat: NutrientRange::new(fat.0, fat.1),
            fiber: NutrientRange::new(fiber.0, fiber.1),
            calcium: NutrientRange::new(calcium.0, calcium.1),
            phosphorus: NutrientRange::new(phosphorus.0, phosphorus.1),
        }
    }

    /// Ranges paired with their nutrient, in weight order
    #[must_use]
    pub const fn ranges(&self) -> [(Nutrient, NutrientRange, f64); 5] {
        [
            (Nutrient::Protein, self.protein, NUTRIENT_WEIGHTS.protein),
            (Nutrient::Fat, self.fat, NUTRIENT_WEIGHTS.fat),
            (Nutrient::Fiber, self.fiber, NUTRIENT_WEIGHTS.fiber),
            (Nutrient::Calcium, self.calcium, NUTRIENT_WEIGHTS.calcium),
            (Nutrient::Phosphorus, self.phosphorus, NUTRIENT_WEIGHTS.phosphorus),
        ]
    }
}

const DOG_ADULT: NutrientTargets =
    NutrientTargets::new((35.0, 85.0), (8.0, 24.0), (0.0, 8.0), (0.4, 2.0), (0.3, 1.6));
const DOG_GROWTH: NutrientTargets =
    NutrientTargets::new((40.0, 85.0), (10.0, 28.0), (0.0, 6.0), (0.8, 2.2), (0.6, 1.8));
const CAT_ADULT: NutrientTargets =
    NutrientTargets::new((45.0, 90.0), (10.0, 35.0), (0.0, 5.0), (0.4, 1.8), (0.4, 1.4));
const CAT_GROWTH: NutrientTargets =
    NutrientTargets::new((50.0, 90.0), (12.0, 35.0), (0.0, 5.0), (0.8, 2.0), (0.6, 1.6));
const BIRD: NutrientTargets =
    NutrientTargets::new((12.0, 25.0), (4.0, 15.0), (3.0, 12.0), (0.5, 1.5), (0.3, 0.8));
const REPTILE: NutrientTargets =
    NutrientTargets::new((15.0, 45.0), (3.0, 15.0), (5.0, 25.0), (1.0, 3.0), (0.4, 1.2));
const POCKET_PET: NutrientTargets =
    NutrientTargets::new((12.0, 20.0), (2.0, 6.0), (15.0, 30.0), (0.5, 1.2), (0.3, 0.8));

/// Target ranges for a species; `growing` selects growth targets for dogs and cats
#[must_use]
pub const fn targets_for(species: SpeciesType, growing: bool) -> &'static NutrientTargets {
    match (species, growing) {
        (SpeciesType::Dog, false) => &DOG_ADULT,
        (SpeciesType::Dog, true) => &DOG_GROWTH,
        (SpeciesType::Cat, false) => &CAT_ADULT,
        (SpeciesType::Cat, true) => &CAT_GROWTH,
        (SpeciesType::Bird, _) => &BIRD,
        (SpeciesType::Reptile, _) => &REPTILE,
        (SpeciesType::PocketPet, _) => &POCKET_PET,
    }
}

/// Calcium to phosphorus ratio standard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaPStandard {
    /// Ideal ratio
    pub ideal: f64,
    /// Safe band
    pub safe: NutrientRange,
    /// Narrow optimal band used by the perfect-match predicate
    pub optimal: NutrientRange,
}

impl CaPStandard {
    /// Graduated penalty: small inside the safe band, steeper outside it
    #[must_use]
    pub fn penalty(&self, ratio: f64) -> f64 {
        if self.safe.contains(ratio) {
            ((ratio - self.ideal).abs() * 5.0).min(5.0)
        } else {
            let distance = if ratio < self.safe.min {
                self.safe.min - ratio
            } else {
                ratio - self.safe.max
            };
            5.0 + (distance * 15.0).min(20.0)
        }
    }
}

/// Ca:P standard for a species
#[must_use]
pub const fn ca_p_standard(species: SpeciesType) -> CaPStandard {
    match species {
        SpeciesType::Dog => CaPStandard {
            ideal: 1.2,
            safe: NutrientRange::new(1.0, 2.0),
            optimal: NutrientRange::new(1.1, 1.4),
        },
        SpeciesType::Cat => CaPStandard {
            ideal: 1.1,
            safe: NutrientRange::new(0.9, 1.5),
            optimal: NutrientRange::new(1.0, 1.3),
        },
        SpeciesType::Bird | SpeciesType::Reptile | SpeciesType::PocketPet => CaPStandard {
            ideal: 2.0,
            safe: NutrientRange::new(1.5, 2.5),
            optimal: NutrientRange::new(1.8, 2.2),
        },
    }
}

/// Minimum below which a species-critical nutrient is penalized quadratically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalFloor {
    /// Nutrient the floor applies to
    pub nutrient: Nutrient,
    /// Minimum, percent of dry matter
    pub minimum: f64,
}

/// Critical floor for a species, life phase and pocket-pet archetype
#[must_use]
pub const fn critical_floor(
    species: SpeciesType,
    growing: bool,
    hay_eater: bool,
) -> Option<CriticalFloor> {
    let (nutrient, minimum) = match species {
        SpeciesType::Dog => (Nutrient::Protein, if growing { 22.0 } else { 18.0 }),
        SpeciesType::Cat => (Nutrient::Protein, if growing { 30.0 } else { 26.0 }),
        SpeciesType::Bird => (Nutrient::Protein, 12.0),
        SpeciesType::PocketPet if hay_eater => (Nutrient::Fiber, 15.0),
        SpeciesType::PocketPet => (Nutrient::Protein, 12.0),
        SpeciesType::Reptile => return None,
    };
    Some(CriticalFloor { nutrient, minimum })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_score_is_uncapped_at_edges() {
        let range = NutrientRange::new(35.0, 85.0);
        assert!((range.score(60.0) - 100.0).abs() < 1e-9);
        assert!((range.score(35.0) - 50.0).abs() < 1e-9);
        assert!((range.score(85.0) - 50.0).abs() < 1e-9);
        assert!(range.score(0.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_targets_for_dogs_and_cats_only() {
        assert!((targets_for(SpeciesType::Dog, true).protein.min - 40.0).abs() < 1e-9);
        assert_eq!(
            targets_for(SpeciesType::Bird, true),
            targets_for(SpeciesType::Bird, false)
        );
    }

    #[test]
    fn test_ca_p_penalty_bands() {
        let dog = ca_p_standard(SpeciesType::Dog);
        assert!(dog.penalty(1.2).abs() < 1e-9);
        assert!((dog.penalty(1.6) - 2.0).abs() < 1e-9);
        assert!((dog.penalty(0.5) - 12.5).abs() < 1e-9);
        assert!((dog.penalty(0.0) - 20.0).abs() < 1e-9);
        assert!((dog.penalty(10.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_critical_floors() {
        assert_eq!(
            critical_floor(SpeciesType::Cat, true, false).map(|f| f.minimum),
            Some(30.0)
        );
        assert_eq!(
            critical_floor(SpeciesType::PocketPet, false, true).map(|f| f.nutrient),
            Some(Nutrient::Fiber)
        );
        assert!(critical_floor(SpeciesType::Reptile, false, false).is_none());
    }
}
