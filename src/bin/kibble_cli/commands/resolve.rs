// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Resolve command for kibble-cli
// ABOUTME: Shows the normalized key, registry match, or category fallback for an ingredient name

use anyhow::Result;
use kibble_scorer::intelligence::fallback::FallbackCategory;
use kibble_scorer::intelligence::key_resolver::{normalize_key, resolve_normalized};
use kibble_scorer::scoring::ScoringService;
use serde_json::json;

use crate::helpers::display::print_json;

/// Resolve an ingredient name
pub fn run(service: &ScoringService, name: &str, json: bool) -> Result<()> {
    let key = normalize_key(name);
    let resolved = resolve_normalized(&key, service.registry());
    let fallback = if resolved.is_none() {
        FallbackCategory::classify(&key)
    } else {
        None
    };

    if json {
        print_json(&json!({
            "name": name,
            "normalized_key": key,
            "registry_key": resolved.as_ref().map(|r| r.key),
            "profile": resolved.as_ref().map(|r| r.profile),
            "fallback_category": fallback.map(FallbackCategory::as_str),
        }))?;
        return Ok(());
    }

    println!("Name:           {name}");
    println!("Normalized key: {key}");
    match (&resolved, fallback) {
        (Some(hit), _) => {
            let p = hit.profile;
            println!("Registry key:   {}", hit.key);
            println!(
                "Per 100 g:      protein {:.1} g, fat {:.1} g, fiber {:.1} g, Ca {:.0} mg, P {:.0} mg, {:.0} kcal",
                p.protein_g, p.fat_g, p.fiber_g, p.calcium_mg, p.phosphorus_mg, p.kcal
            );
        }
        (None, Some(category)) => {
            println!("Fallback:       {} (category estimate)", category.as_str());
        }
        (None, None) => println!("Unresolved:     no registry entry or fallback category"),
    }
    Ok(())
}
