// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Score bounds, letter grade thresholds, and life stage age boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared by the models and the scoring crates.

/// Score bounds shared by every factor and the overall score
pub mod scores {
    /// Lowest possible score
    pub const MIN_SCORE: f64 = 0.0;
    /// Highest possible score
    pub const MAX_SCORE: f64 = 100.0;
    /// Neutral score used when a factor has no signal either way
    pub const NEUTRAL_SCORE: f64 = 50.0;
}

/// Letter grade lower bounds (inclusive)
pub mod grades {
    /// A+ lower bound
    pub const A_PLUS: f64 = 95.0;
    /// A lower bound
    pub const A: f64 = 90.0;
    /// B+ lower bound
    pub const B_PLUS: f64 = 85.0;
    /// B lower bound
    pub const B: f64 = 80.0;
    /// C+ lower bound
    pub const C_PLUS: f64 = 75.0;
    /// C lower bound
    pub const C: f64 = 70.0;
    /// D lower bound; anything lower is F
    pub const D: f64 = 60.0;
}

/// Age boundaries (years, exclusive upper bounds) for life stage buckets
pub mod life_stage {
    /// Younger than this is a baby
    pub const BABY_MAX_AGE_YEARS: f64 = 1.0;
    /// Younger than this is young
    pub const YOUNG_MAX_AGE_YEARS: f64 = 2.0;
    /// Younger than this is adult; older is senior
    pub const ADULT_MAX_AGE_YEARS: f64 = 7.0;
    /// Younger than this uses growth nutrient targets
    pub const GROWTH_MAX_AGE_YEARS: f64 = 1.0;
}
