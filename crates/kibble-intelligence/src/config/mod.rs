// ABOUTME: Scoring configuration module with validation and environment overrides
// ABOUTME: Re-exports ScoringConfig, its sections, and ConfigError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod error;
mod scoring;

pub use error::ConfigError;
pub use scoring::{
    BonusConfig, CalibrationConfig, OptimalityWeights, PerfectMatchConfig, SafetyGateConfig,
    ScoringConfig,
};
