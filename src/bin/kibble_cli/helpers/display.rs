// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for kibble-cli
// ABOUTME: Human-readable tables for results, cohort reports, and nutrition, plus JSON output

use anyhow::Result;
use kibble_scorer::models::{AggregatedNutrition, CompatibilityResult, FactorKind};
use kibble_scorer::scoring::CohortReport;
use serde::Serialize;

const RULE_WIDTH: usize = 72;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{title}:");
    for item in items {
        println!("  • {item}");
    }
}

/// Display one compatibility result
pub fn display_result(result: &CompatibilityResult) {
    println!("\nRecipe {} for {}", result.recipe_id, result.species);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "   Overall: {} ({}){}",
        result.overall_score,
        result.grade,
        if result.is_perfect_match {
            "  perfect match"
        } else {
            ""
        }
    );
    let breakdown = &result.breakdown;
    println!(
        "   Safety gate: {:.0}   Optimality: {:.1}   Tie-breaker: {:+}",
        breakdown.safety_score, breakdown.optimality_score, breakdown.tie_breaker
    );

    println!("\nFactors:");
    for kind in FactorKind::ALL {
        if let Some(factor) = result.factors.get(&kind) {
            println!("   {:<22} {:>5.1}  {}", kind.label(), factor.score, factor.reasoning);
        }
    }

    println!("\nIngredients:");
    for row in &result.ingredient_analysis {
        println!(
            "   {:<28} {:>7.1} g  {:?} ({:?})",
            row.ingredient, row.grams, row.verdict, row.species_tier
        );
    }

    print_list("Critical violations", &result.critical_violations);
    print_list("Warnings", &result.warnings);
    print_list("Nutritional gaps", &result.nutritional_gaps);
    print_list("Strengths", &result.nutritional_strengths);
    print_list("Recommendations", &result.recommendations);
}

/// Display a ranked cohort, limited to `top` rows when given
pub fn display_report(report: &CohortReport, top: Option<usize>) {
    let rows = top.map_or(report.results.as_slice(), |n| report.top(n));

    println!("\nRanking for {} ({} recipes)", report.species, report.results.len());
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   Run: {}", report.run_id);
    println!("   Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M UTC"));
    println!("   Calibration: {} (scale {:.3})", report.mode.as_str(), report.scale);
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("   {:>4}  {:<30} {:>5} {:>5}  Grade", "Rank", "Recipe", "Raw", "Cal");
    for row in rows {
        println!(
            "   {:>4}  {:<30} {:>5} {:>5}  {}{}",
            row.rank,
            row.recipe_name,
            row.raw_score,
            row.calibrated_score,
            row.grade,
            if row.is_perfect_match { " *" } else { "" }
        );
    }
    if rows.iter().any(|r| r.is_perfect_match) {
        println!("\n   * perfect match");
    }
}

/// Display aggregated nutrition
pub fn display_nutrition(recipe_id: &str, nutrition: &AggregatedNutrition) {
    println!("\nNutrition for {recipe_id} (dry-matter basis)");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   Protein:    {:>6.2} %", nutrition.protein_pct);
    println!("   Fat:        {:>6.2} %", nutrition.fat_pct);
    println!("   Fiber:      {:>6.2} %", nutrition.fiber_pct);
    println!("   Calcium:    {:>6.2} %", nutrition.calcium_pct);
    println!("   Phosphorus: {:>6.2} %", nutrition.phosphorus_pct);
    match nutrition.ca_p_ratio() {
        Some(ratio) => println!("   Ca:P ratio: {ratio:>6.2}"),
        None => println!("   Ca:P ratio:    n/a"),
    }
    println!("   Energy:     {:>6.1} kcal/100 g as fed", nutrition.calories_per_100g);
    println!(
        "   Weight:     {:>6.1} g ({:.1} g dry matter)",
        nutrition.total_grams, nutrition.dry_matter_grams
    );
    println!("   Coverage:   {:>6.0} %", nutrition.data_coverage * 100.0);

    println!("\nContributions:");
    for row in &nutrition.breakdown {
        println!(
            "   {:<28} {:>7.1} g  {:<10?} {}",
            row.name,
            row.grams,
            row.data_source,
            row.key.as_deref().unwrap_or("-")
        );
    }

    print_list("Fallback ingredients", &nutrition.fallback_ingredients);
    print_list("Warnings", &nutrition.warnings);
}
