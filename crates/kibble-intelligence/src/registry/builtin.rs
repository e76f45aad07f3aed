// ABOUTME: Built-in nutrient table for common companion-animal recipe ingredients
// ABOUTME: USDA-derived per-100g values with per-species compatibility tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::{CompatibilityTier, NutrientProfile, SpeciesCompatibility, SpeciesType};

use CompatibilityTier::{Avoid, Caution, Limit};
use SpeciesType::{Bird, Cat, Dog, PocketPet, Reptile};

/// Muscle meat and fish: carnivore staples, occasional for everyone else
const MEAT: SpeciesCompatibility = SpeciesCompatibility::uniform(CompatibilityTier::Ok)
    .with(Bird, Caution)
    .with(Reptile, Limit)
    .with(PocketPet, Caution);

/// Organ meat: nutrient dense, capped share
const ORGAN: SpeciesCompatibility = SpeciesCompatibility::uniform(Limit)
    .with(Bird, Caution)
    .with(PocketPet, Caution);

const EGG: SpeciesCompatibility =
    SpeciesCompatibility::uniform(CompatibilityTier::Ok).with(PocketPet, Caution);

const PRODUCE: SpeciesCompatibility = SpeciesCompatibility::uniform(CompatibilityTier::Ok);

/// Oxalate-rich greens bind calcium
const OXALATE_GREEN: SpeciesCompatibility =
    SpeciesCompatibility::uniform(Limit).with(Dog, CompatibilityTier::Ok);

const FRUIT: SpeciesCompatibility = SpeciesCompatibility::uniform(Limit)
    .with(Dog, CompatibilityTier::Ok)
    .with(Bird, CompatibilityTier::Ok);

const GRAIN: SpeciesCompatibility = SpeciesCompatibility::uniform(CompatibilityTier::Ok)
    .with(Cat, Limit)
    .with(Reptile, Caution)
    .with(PocketPet, Limit);

const FISH_OIL: SpeciesCompatibility = SpeciesCompatibility::uniform(CompatibilityTier::Ok)
    .with(Bird, Limit)
    .with(Reptile, Caution)
    .with(PocketPet, Caution);

const HAY: SpeciesCompatibility = SpeciesCompatibility::uniform(CompatibilityTier::Ok)
    .with(Dog, Caution)
    .with(Cat, Caution)
    .with(Bird, Limit);

const PELLET: SpeciesCompatibility = SpeciesCompatibility::uniform(CompatibilityTier::Ok)
    .with(Dog, Caution)
    .with(Cat, Caution);

const INSECT: SpeciesCompatibility =
    SpeciesCompatibility::uniform(CompatibilityTier::Ok).with(PocketPet, Limit);

const TOXIC: SpeciesCompatibility = SpeciesCompatibility::uniform(Avoid);

/// Persin is lethal to birds and small herbivores, irritating to dogs and cats
const AVOCADO: SpeciesCompatibility = SpeciesCompatibility::uniform(Avoid)
    .with(Dog, Caution)
    .with(Cat, Caution);

/// Every built-in entry
pub(super) fn entries() -> Vec<(&'static str, NutrientProfile)> {
    vec![
        // === Poultry ===
        (
            "chicken_breast",
            NutrientProfile::per_100g(31.0, 3.6, 0.0, 11.0, 196.0, 165.0)
                .moisture(65.0)
                .tiers(MEAT),
        ),
        (
            "chicken_thighs",
            NutrientProfile::per_100g(20.6, 14.1, 0.0, 9.0, 170.0, 209.0).tiers(MEAT),
        ),
        (
            "chicken_liver",
            NutrientProfile::per_100g(16.9, 4.8, 0.0, 8.0, 241.0, 119.0)
                .tiers(ORGAN)
                .max_inclusion(10.0),
        ),
        (
            "chicken_hearts",
            NutrientProfile::per_100g(15.9, 9.3, 0.0, 7.0, 204.0, 153.0).tiers(ORGAN),
        ),
        (
            "chicken_necks",
            NutrientProfile::per_100g(17.6, 11.9, 0.0, 1200.0, 900.0, 185.0)
                .moisture(60.0)
                .tiers(MEAT)
                .curated(),
        ),
        (
            "turkey_breast",
            NutrientProfile::per_100g(30.1, 1.0, 0.0, 6.0, 223.0, 135.0)
                .moisture(70.0)
                .tiers(MEAT),
        ),
        (
            "ground_turkey",
            NutrientProfile::per_100g(28.6, 10.4, 0.0, 14.0, 206.0, 189.0).tiers(MEAT),
        ),
        (
            "turkey_necks",
            NutrientProfile::per_100g(17.2, 10.3, 0.0, 1000.0, 700.0, 170.0)
                .moisture(60.0)
                .tiers(MEAT)
                .curated(),
        ),
        // === Red meat ===
        (
            "ground_beef_lean",
            NutrientProfile::per_100g(25.6, 16.0, 0.0, 6.0, 179.0, 230.0).tiers(MEAT),
        ),
        (
            "ground_pork_lean",
            NutrientProfile::per_100g(20.0, 13.0, 0.0, 16.0, 194.0, 212.0).tiers(MEAT),
        ),
        (
            "beef_liver",
            NutrientProfile::per_100g(20.4, 3.6, 0.0, 6.0, 387.0, 135.0)
                .tiers(ORGAN)
                .max_inclusion(10.0),
        ),
        // === Fish ===
        (
            "salmon_atlantic",
            NutrientProfile::per_100g(20.4, 13.4, 0.0, 12.0, 200.0, 208.0)
                .omega3(2.26)
                .tiers(MEAT),
        ),
        (
            "salmon_boneless",
            NutrientProfile::per_100g(22.1, 12.4, 0.0, 9.0, 252.0, 206.0)
                .omega3(2.0)
                .tiers(MEAT),
        ),
        (
            "sardines_water",
            NutrientProfile::per_100g(24.6, 13.9, 0.0, 382.0, 490.0, 208.0)
                .omega3(1.48)
                .tiers(MEAT),
        ),
        (
            "tuna_water",
            NutrientProfile::per_100g(25.5, 1.0, 0.0, 11.0, 208.0, 86.0)
                .tiers(MEAT)
                .max_inclusion(15.0),
        ),
        // === Eggs ===
        (
            "eggs_whole",
            NutrientProfile::per_100g(12.6, 9.5, 0.0, 56.0, 198.0, 143.0).tiers(EGG),
        ),
        // === Leafy greens ===
        (
            "kale_raw",
            NutrientProfile::per_100g(2.9, 0.4, 3.6, 254.0, 55.0, 35.0)
                .vitamin_c(93.4)
                .tiers(PRODUCE),
        ),
        (
            "spinach_raw",
            NutrientProfile::per_100g(2.9, 0.4, 2.2, 99.0, 49.0, 23.0)
                .vitamin_c(28.1)
                .tiers(OXALATE_GREEN),
        ),
        // === Vegetables ===
        (
            "carrots_raw",
            NutrientProfile::per_100g(0.9, 0.2, 2.8, 33.0, 35.0, 41.0)
                .moisture(88.0)
                .tiers(PRODUCE),
        ),
        (
            "sweet_potato",
            NutrientProfile::per_100g(1.6, 0.1, 3.0, 30.0, 47.0, 86.0)
                .moisture(77.0)
                .tiers(PRODUCE),
        ),
        (
            "broccoli_raw",
            NutrientProfile::per_100g(2.8, 0.4, 2.6, 47.0, 66.0, 34.0)
                .vitamin_c(89.2)
                .tiers(PRODUCE),
        ),
        (
            "celery_raw",
            NutrientProfile::per_100g(0.7, 0.2, 1.6, 40.0, 24.0, 16.0).tiers(PRODUCE),
        ),
        (
            "green_beans",
            NutrientProfile::per_100g(1.8, 0.2, 2.7, 37.0, 38.0, 31.0)
                .vitamin_c(12.2)
                .tiers(PRODUCE),
        ),
        (
            "bell_pepper",
            NutrientProfile::per_100g(1.0, 0.3, 2.1, 7.0, 26.0, 31.0)
                .vitamin_c(127.7)
                .tiers(PRODUCE),
        ),
        (
            "brussels_sprouts",
            NutrientProfile::per_100g(3.4, 0.3, 3.8, 42.0, 69.0, 43.0)
                .vitamin_c(85.0)
                .tiers(PRODUCE),
        ),
        (
            "pumpkin",
            NutrientProfile::per_100g(1.0, 0.1, 0.5, 21.0, 44.0, 26.0).tiers(PRODUCE),
        ),
        (
            "peas",
            NutrientProfile::per_100g(5.4, 0.4, 5.1, 25.0, 108.0, 81.0).tiers(PRODUCE),
        ),
        // === Fruit ===
        (
            "blueberries_raw",
            NutrientProfile::per_100g(0.7, 0.3, 2.4, 6.0, 12.0, 57.0).tiers(FRUIT),
        ),
        (
            "bananas_raw",
            NutrientProfile::per_100g(1.1, 0.3, 2.6, 5.0, 22.0, 89.0).tiers(FRUIT),
        ),
        (
            "apples_raw",
            NutrientProfile::per_100g(0.3, 0.2, 2.4, 6.0, 11.0, 52.0).tiers(FRUIT),
        ),
        // === Grains ===
        (
            "brown_rice_cooked",
            NutrientProfile::per_100g(2.7, 0.9, 1.8, 10.0, 83.0, 123.0).tiers(GRAIN),
        ),
        (
            "oats",
            NutrientProfile::per_100g(16.9, 6.9, 10.6, 54.0, 523.0, 379.0)
                .moisture(8.0)
                .tiers(GRAIN),
        ),
        (
            "quinoa_cooked",
            NutrientProfile::per_100g(4.4, 1.9, 2.8, 17.0, 152.0, 120.0).tiers(GRAIN),
        ),
        // === Supplements ===
        (
            "calcium_carbonate",
            NutrientProfile::per_100g(0.0, 0.0, 0.0, 40_000.0, 0.0, 0.0)
                .moisture(0.0)
                .tiers(PRODUCE)
                .curated(),
        ),
        (
            "fish_oil",
            NutrientProfile::per_100g(0.0, 100.0, 0.0, 0.0, 0.0, 902.0)
                .moisture(0.0)
                .omega3(30.0)
                .tiers(FISH_OIL),
        ),
        (
            "taurine_powder",
            NutrientProfile::per_100g(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
                .moisture(0.0)
                .tiers(PRODUCE)
                .curated(),
        ),
        // === Hay and pellets ===
        (
            "timothy_hay",
            NutrientProfile::per_100g(8.0, 2.0, 32.0, 400.0, 200.0, 200.0)
                .moisture(12.0)
                .tiers(HAY)
                .curated(),
        ),
        (
            "pellets",
            NutrientProfile::per_100g(16.0, 4.0, 18.0, 900.0, 500.0, 300.0)
                .moisture(10.0)
                .tiers(PELLET)
                .curated(),
        ),
        // === Insects ===
        (
            "mealworms",
            NutrientProfile::per_100g(18.7, 13.4, 0.0, 14.0, 285.0, 206.0)
                .tiers(INSECT)
                .curated(),
        ),
        (
            "crickets",
            NutrientProfile::per_100g(20.5, 6.8, 0.0, 76.0, 295.0, 121.0)
                .tiers(INSECT)
                .curated(),
        ),
        // === Toxic ===
        (
            "onion_raw",
            NutrientProfile::per_100g(1.1, 0.1, 1.7, 23.0, 29.0, 40.0).tiers(TOXIC),
        ),
        (
            "garlic_raw",
            NutrientProfile::per_100g(6.4, 0.5, 2.1, 181.0, 153.0, 149.0).tiers(TOXIC),
        ),
        (
            "grapes",
            NutrientProfile::per_100g(0.7, 0.2, 0.9, 10.0, 20.0, 69.0).tiers(TOXIC),
        ),
        (
            "raisins",
            NutrientProfile::per_100g(3.1, 0.5, 3.7, 50.0, 101.0, 299.0)
                .moisture(15.0)
                .tiers(TOXIC),
        ),
        (
            "chocolate",
            NutrientProfile::per_100g(4.9, 31.0, 7.0, 73.0, 308.0, 546.0)
                .moisture(1.0)
                .tiers(TOXIC),
        ),
        (
            "rhubarb",
            NutrientProfile::per_100g(0.9, 0.2, 1.8, 86.0, 14.0, 21.0).tiers(TOXIC),
        ),
        (
            "avocado",
            NutrientProfile::per_100g(2.0, 14.7, 6.7, 12.0, 52.0, 160.0).tiers(AVOCADO),
        ),
    ]
}
