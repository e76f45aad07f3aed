// ABOUTME: Environment configuration management for the scorer and its CLI
// ABOUTME: Loads logging and scoring settings from environment variables with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;

use kibble_core::errors::{AppError, AppResult};
use kibble_intelligence::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::logging::LoggingConfig;

/// Strongly typed log level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        })
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Automated tests
    Testing,
    /// Production
    Production,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
        })
    }
}

/// Complete scorer configuration
#[derive(Debug, Clone, Default)]
pub struct ScorerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Subscriber configuration
    pub logging: LoggingConfig,
    /// Scoring constants
    pub scoring: ScoringConfig,
}

impl ScorerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a scoring override is malformed or
    /// the resulting scoring configuration fails validation.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment =
            Environment::from_str_or_default(&env::var("ENVIRONMENT").unwrap_or_default());
        let logging = LoggingConfig::from_env();
        let log_level = LogLevel::from_str_or_default(&logging.level);
        let scoring = ScoringConfig::from_env()
            .map_err(|e| AppError::config(format!("Invalid scoring configuration: {e}")))?;

        let config = Self {
            environment,
            log_level,
            logging,
            scoring,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the bundled configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the scoring constants are invalid
    pub fn validate(&self) -> AppResult<()> {
        self.scoring
            .validate()
            .map_err(|e| AppError::config(e.to_string()))?;

        if self.environment.is_production() && matches!(self.log_level, LogLevel::Trace) {
            warn!("Trace logging enabled in production");
        }
        Ok(())
    }

    /// Same configuration with a different log level
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self.logging = self.logging.with_level(level.to_string());
        self
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        let gate = &self.scoring.gate;
        let calibration = &self.scoring.calibration;
        format!(
            "Kibble Scorer Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Log Format: {}\n\
             - Safety Gate Threshold: {}\n\
             - Unsafe Score Cap: {}\n\
             - Perfect Match Bonus: {}\n\
             - Calibration Targets: {} (perfect) / {} (no perfect)",
            self.environment,
            self.log_level,
            self.logging.format,
            gate.threshold,
            gate.unsafe_score_cap,
            self.scoring.bonuses.perfect_match_bonus,
            calibration.perfect_target,
            calibration.no_perfect_target,
        )
    }
}
