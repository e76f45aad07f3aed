// ABOUTME: Core types and constants for the kibble recipe compatibility scorer
// ABOUTME: Foundation crate with domain models, error handling, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Kibble Core
//!
//! Foundation crate providing the shared vocabulary of the kibble scoring
//! pipeline. Everything here is plain data: the algorithms that fill these
//! types in live in `kibble-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Score bounds, grade thresholds, and life stage ages
//! - **models**: Recipes, animal profiles, nutrient profiles, and scoring results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `AnimalProfile`, `NutrientProfile`, `CompatibilityResult`, etc.)
pub mod models;
