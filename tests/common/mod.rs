// ABOUTME: Shared test utilities and fixtures for kibble integration tests
// ABOUTME: Provides quiet logging setup plus reference pets and recipes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `kibble_scorer`
//!
//! Fixtures mirror the shapes the scorer sees in practice: a healthy adult
//! dog, a cat, a rabbit and a budgie, plus a handful of recipes whose
//! expected behavior is easy to reason about.

use std::env;
use std::sync::Once;

use kibble_scorer::models::{
    ActivityLevel, AnimalProfile, IngredientReference, Recipe, SpeciesType, Supplement,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default is WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Healthy four-year-old, 20 kg dog with no declared sensitivities
pub fn healthy_adult_dog() -> AnimalProfile {
    let mut dog = AnimalProfile::new(SpeciesType::Dog, 4.0, 20.0).with_breed("Labrador Retriever");
    dog.id = Some("dog-rex".to_owned());
    dog.name = Some("Rex".to_owned());
    dog
}

/// Very active working dog
pub fn working_dog() -> AnimalProfile {
    AnimalProfile::new(SpeciesType::Dog, 3.0, 28.0)
        .with_breed("Border Collie")
        .with_activity(ActivityLevel::VeryActive)
}

/// Dog allergic to chicken
pub fn chicken_allergic_dog() -> AnimalProfile {
    let mut dog = healthy_adult_dog();
    dog.allergies = vec!["chicken".to_owned()];
    dog
}

/// Five-year-old domestic shorthair
pub fn adult_cat() -> AnimalProfile {
    AnimalProfile::new(SpeciesType::Cat, 5.0, 4.5).with_breed("Domestic Shorthair")
}

/// Adult rabbit (hay obligate)
pub fn adult_rabbit() -> AnimalProfile {
    AnimalProfile::new(SpeciesType::PocketPet, 2.0, 2.0).with_breed("Rabbit")
}

/// Adult budgie
pub fn adult_budgie() -> AnimalProfile {
    AnimalProfile::new(SpeciesType::Bird, 2.0, 0.04).with_breed("Budgie")
}

/// Bearded dragon
pub fn adult_dragon() -> AnimalProfile {
    AnimalProfile::new(SpeciesType::Reptile, 3.0, 0.45).with_breed("Bearded Dragon")
}

/// Chicken breast 70 %, sweet potato 20 %, carrots 8 %, fish oil 2 %
pub fn reference_dog_recipe(id: &str) -> Recipe {
    Recipe::new(id, SpeciesType::Dog)
        .with_ingredient(IngredientReference::new("chicken breast", "70%"))
        .with_ingredient(IngredientReference::new("sweet potato", "20%"))
        .with_ingredient(IngredientReference::new("carrots", "8%"))
        .with_ingredient(IngredientReference::new("fish oil", "2%").with_category("fat"))
}

/// Turkey-based dog recipe written with kitchen measures
pub fn turkey_dog_recipe(id: &str) -> Recipe {
    Recipe::new(id, SpeciesType::Dog)
        .with_ingredient(IngredientReference::new("ground turkey", "1 1/2 lbs"))
        .with_ingredient(IngredientReference::new("brown rice", "1 cup"))
        .with_ingredient(IngredientReference::new("green beans", "1/2 cup"))
        .with_ingredient(IngredientReference::new("olive oil", "1 tbsp").with_category("oil"))
        .with_supplement(Supplement::new("eggshell calcium", "1g"))
}

/// Egg-based recipe with no meat, organ or fish
pub fn meatless_recipe(id: &str, species: SpeciesType) -> Recipe {
    Recipe::new(id, species)
        .with_ingredient(IngredientReference::new("eggs", "400g"))
        .with_ingredient(IngredientReference::new("peas", "80g"))
        .with_ingredient(IngredientReference::new("pumpkin", "40g"))
}

/// Rabbit recipe dominated by hay
pub fn hay_recipe(id: &str) -> Recipe {
    Recipe::new(id, SpeciesType::PocketPet)
        .with_ingredient(IngredientReference::new("timothy hay", "850g"))
        .with_ingredient(IngredientReference::new("kale", "100g"))
        .with_ingredient(IngredientReference::new("bell pepper", "50g"))
}

/// Every fixture recipe, for property sweeps
pub fn all_recipes() -> Vec<Recipe> {
    vec![
        reference_dog_recipe("reference"),
        turkey_dog_recipe("turkey"),
        meatless_recipe("meatless-dog", SpeciesType::Dog),
        meatless_recipe("meatless-cat", SpeciesType::Cat),
        hay_recipe("hay"),
        Recipe::new("empty", SpeciesType::Dog),
        reference_dog_recipe("with-grapes")
            .with_ingredient(IngredientReference::new("grapes", "10g")),
        Recipe::new("vague", SpeciesType::Dog)
            .with_ingredient(IngredientReference::new("mystery meat", "a handful"))
            .with_ingredient(IngredientReference::new("duck gizzards", "200g")),
    ]
}

/// Every fixture pet, for property sweeps
pub fn all_pets() -> Vec<AnimalProfile> {
    let mut senior = healthy_adult_dog();
    senior.age_years = 11.0;
    senior.health_concerns = vec!["kidney disease".to_owned(), "arthritis".to_owned()];
    let mut puppy = healthy_adult_dog();
    puppy.age_years = 0.4;

    vec![
        healthy_adult_dog(),
        working_dog(),
        chicken_allergic_dog(),
        senior,
        puppy,
        adult_cat(),
        adult_rabbit(),
        adult_budgie(),
        adult_dragon(),
    ]
}
