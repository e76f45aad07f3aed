// ABOUTME: Criterion benchmarks for the recipe scoring pipeline
// ABOUTME: Measures amount parsing, aggregation, single-recipe scoring, and cohort ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for recipe scoring.
//!
//! Cohorts are built from a rotating set of proteins and sides so every
//! recipe resolves against the built-in registry.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kibble_scorer::intelligence::aggregator::aggregate;
use kibble_scorer::intelligence::amount_parser::{parse_amount_text, VolumeProfile};
use kibble_scorer::intelligence::NutrientRegistry;
use kibble_scorer::models::{AnimalProfile, IngredientReference, Recipe, SpeciesType};
use kibble_scorer::scoring::ScoringService;

const PROTEINS: &[&str] = &[
    "chicken breast",
    "ground turkey",
    "lean ground beef",
    "salmon fillet",
    "sardines",
    "chicken thighs",
];

const SIDES: &[&str] = &["sweet potato", "brown rice", "pumpkin", "green beans", "peas"];

fn generate_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|index| {
            Recipe::new(format!("bench_recipe_{index}"), SpeciesType::Dog)
                .with_ingredient(IngredientReference::new(
                    PROTEINS[index % PROTEINS.len()],
                    "1 1/2 lbs",
                ))
                .with_ingredient(IngredientReference::new(SIDES[index % SIDES.len()], "1 cup"))
                .with_ingredient(IngredientReference::new("carrots", "1/2 cup"))
                .with_ingredient(IngredientReference::new("fish oil", "1 tsp").with_category("oil"))
        })
        .collect()
}

fn bench_pet() -> AnimalProfile {
    AnimalProfile::new(SpeciesType::Dog, 4.0, 20.0).with_breed("Labrador Retriever")
}

fn bench_amount_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_parser");
    let inputs = ["200g", "1 1/2 cups", "2-3 tbsp", "½ lb", "a pinch", "1 to 2 cups"];

    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("mixed_quantities", |b| {
        b.iter(|| {
            for text in black_box(&inputs) {
                let _ = parse_amount_text(text, VolumeProfile::Generic);
            }
        });
    });

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let registry = NutrientRegistry::builtin();
    let recipe = generate_recipes(1).remove(0);

    group.bench_function("single_recipe", |b| {
        b.iter(|| aggregate(black_box(&recipe), registry));
    });

    group.finish();
}

fn bench_single_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");
    let service = ScoringService::default();
    let pet = bench_pet();
    let recipe = generate_recipes(1).remove(0);

    group.bench_function("single_recipe", |b| {
        b.iter(|| service.score_recipe(black_box(&pet), black_box(&recipe)));
    });

    group.finish();
}

fn bench_cohort(c: &mut Criterion) {
    let mut group = c.benchmark_group("cohort");
    group.sample_size(30);
    let service = ScoringService::default();
    let pet = bench_pet();

    for count in [10_usize, 100, 500] {
        let recipes = generate_recipes(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &recipes, |b, recipes| {
            b.iter(|| service.score_cohort(black_box(&pet), black_box(recipes)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_amount_parsing,
    bench_aggregation,
    bench_single_score,
    bench_cohort
);
criterion_main!(benches);
