// ABOUTME: Configuration module bundling logging and scoring settings for the scorer
// ABOUTME: Re-exports the environment-driven ScorerConfig and its building blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the kibble scorer
//!
//! - **Environment**: `ScorerConfig` loaded from environment variables
//! - **Scoring**: gate, blend, bonus and calibration constants, re-exported
//!   from `kibble-intelligence`

/// Environment-driven configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ScorerConfig};
pub use kibble_intelligence::config::{ConfigError, ScoringConfig};
