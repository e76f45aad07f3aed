// ABOUTME: Scoring context carrying the nutrient registry and scoring configuration
// ABOUTME: Passed explicitly to every entry point so tests can swap in fixture registries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use crate::config::ScoringConfig;
use crate::registry::NutrientRegistry;

static DEFAULT_CONFIG: LazyLock<ScoringConfig> = LazyLock::new(ScoringConfig::default);

/// Shared, read-only inputs of the scoring pipeline
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// Nutrient registry used for resolution and species tiers
    pub registry: &'a NutrientRegistry,
    /// Scoring constants
    pub config: &'a ScoringConfig,
}

impl<'a> ScoringContext<'a> {
    /// Context over an explicit registry and configuration
    #[must_use]
    pub const fn new(registry: &'a NutrientRegistry, config: &'a ScoringConfig) -> Self {
        Self { registry, config }
    }
}

impl ScoringContext<'static> {
    /// Built-in registry with default configuration
    #[must_use]
    pub fn global() -> Self {
        Self::new(NutrientRegistry::builtin(), &DEFAULT_CONFIG)
    }
}

impl Default for ScoringContext<'static> {
    fn default() -> Self {
        Self::global()
    }
}
