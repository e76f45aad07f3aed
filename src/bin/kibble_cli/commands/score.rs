// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Score command for kibble-cli
// ABOUTME: Loads one pet and one recipe and prints the compatibility result

use std::path::Path;

use anyhow::Result;
use kibble_scorer::io::{load_pet, load_recipe};
use kibble_scorer::scoring::ScoringService;

use crate::helpers::display::{display_result, print_json};

/// Score one recipe for one pet
pub fn run(service: &ScoringService, pet: &Path, recipe: &Path, json: bool) -> Result<()> {
    let pet = load_pet(pet)?;
    let recipe = load_recipe(recipe)?;
    let result = service.score_recipe(&pet, &recipe);

    if json {
        print_json(&result)?;
    } else {
        display_result(&result);
    }
    Ok(())
}
