// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Nutrition command for kibble-cli
// ABOUTME: Prints the dry-matter aggregate and per-ingredient contributions of a recipe

use std::path::Path;

use anyhow::Result;
use kibble_scorer::intelligence::aggregator::aggregate;
use kibble_scorer::io::load_recipe;
use kibble_scorer::scoring::ScoringService;

use crate::helpers::display::{display_nutrition, print_json};

/// Show aggregated nutrition of a recipe
pub fn run(service: &ScoringService, recipe: &Path, json: bool) -> Result<()> {
    let recipe = load_recipe(recipe)?;
    let nutrition = aggregate(&recipe, service.registry());

    if json {
        print_json(&nutrition)?;
    } else {
        display_nutrition(&recipe.id, &nutrition);
    }
    Ok(())
}
