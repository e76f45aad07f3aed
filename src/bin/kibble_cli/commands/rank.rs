// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Rank command for kibble-cli
// ABOUTME: Scores a recipe set for one pet and prints the calibrated ranking

use std::path::Path;

use anyhow::Result;
use kibble_scorer::errors::AppError;
use kibble_scorer::io::{load_pet, load_recipes};
use kibble_scorer::scoring::ScoringService;
use tracing::info;

use crate::helpers::display::{display_report, print_json};

/// Rank recipes for a pet
pub fn run(
    service: &ScoringService,
    pet: &Path,
    recipes: &Path,
    top: Option<usize>,
    json: bool,
) -> Result<()> {
    if top == Some(0) {
        return Err(AppError::invalid_input("--top must be at least 1").into());
    }

    let pet = load_pet(pet)?;
    let recipes = load_recipes(recipes)?;
    info!(count = recipes.len(), "Ranking recipes");

    let mut report = service.score_cohort(&pet, &recipes);
    if json {
        if let Some(n) = top {
            report.results.truncate(n);
        }
        print_json(&report)?;
    } else {
        display_report(&report, top);
    }
    Ok(())
}
