// ABOUTME: JSON input loading for pet profiles and recipes with structural validation
// ABOUTME: Maps file and decode failures onto AppError codes for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use kibble_core::errors::{AppError, AppResult};
use kibble_core::models::{AnimalProfile, Recipe};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Recipe files hold either a bare array or `{"recipes": [...]}`
#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeFile {
    List(Vec<Recipe>),
    Wrapped { recipes: Vec<Recipe> },
}

/// Read and decode a JSON file
///
/// # Errors
///
/// `ResourceNotFound` when the file is missing, `InvalidFormat` when it is
/// not valid JSON of the expected shape.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_context(&path.display().to_string()))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::from(e).with_context(&path.display().to_string()))
}

/// Load and validate a pet profile
///
/// # Errors
///
/// Any [`load_json`] error, or `InvalidInput` when the profile fails validation.
pub fn load_pet(path: &Path) -> AppResult<AnimalProfile> {
    let pet: AnimalProfile = load_json(path)?;
    pet.validate()?;
    debug!(path = %path.display(), species = %pet.species, "Loaded pet profile");
    Ok(pet)
}

/// Load and validate a single recipe
///
/// # Errors
///
/// Any [`load_json`] error, or `InvalidInput` when the recipe fails validation.
pub fn load_recipe(path: &Path) -> AppResult<Recipe> {
    let recipe: Recipe = load_json(path)?;
    recipe.validate()?;
    debug!(path = %path.display(), recipe = %recipe.id, "Loaded recipe");
    Ok(recipe)
}

/// Load and validate a list of recipes
///
/// # Errors
///
/// Any [`load_json`] error, or `InvalidInput` when any recipe fails validation.
pub fn load_recipes(path: &Path) -> AppResult<Vec<Recipe>> {
    let recipes = match load_json::<RecipeFile>(path)? {
        RecipeFile::List(recipes) | RecipeFile::Wrapped { recipes } => recipes,
    };
    for recipe in &recipes {
        recipe.validate()?;
    }
    debug!(path = %path.display(), count = recipes.len(), "Loaded recipes");
    Ok(recipes)
}
