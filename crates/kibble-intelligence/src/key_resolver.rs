// ABOUTME: Ingredient name normalization and registry key resolution
// ABOUTME: Morphology, alias routing, and a suffix/plural search chain over the nutrient registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient Key Resolver
//!
//! `"Chicken Breasts (boneless)"` becomes `chicken_breast_boneless`-style keys;
//! the registry search then walks plural and preparation-suffix variants
//! until it hits a curated entry.

use super::registry::NutrientRegistry;
use kibble_core::models::NutrientProfile;

/// Preparation suffixes tried, in order, for every candidate base key
const KEY_SUFFIXES: &[&str] = &["", "_raw", "_cooked", "_fresh", "_water", "_in_water", "_lean"];

/// A successful registry lookup
#[derive(Debug, Clone, Copy)]
pub struct ResolvedKey<'r> {
    /// Registry key that matched
    pub key: &'r str,
    /// Profile stored under that key
    pub profile: &'r NutrientProfile,
}

/// Lowercase, strip punctuation, collapse whitespace and singularize each word
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned
        .split_whitespace()
        .map(singularize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn singularize(word: &str) -> String {
    if word.len() > 4 && word.ends_with("ies") {
        format!("{}y", &word[..word.len() - 3])
    } else if word.len() > 4 && word.ends_with("oes") {
        word[..word.len() - 2].to_owned()
    } else if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        word[..word.len() - 1].to_owned()
    } else {
        word.to_owned()
    }
}

/// Route known multi-word and prefix patterns to a single canonical key
fn apply_aliases(normalized: &str) -> Option<&'static str> {
    let words: Vec<&str> = normalized.split(' ').collect();
    let has_word = |w: &str| words.contains(&w);

    if has_word("egg") && !has_word("shell") && !has_word("white") && !has_word("yolk") {
        return Some("eggs_whole");
    }
    if normalized.contains("ground beef") {
        return Some("ground_beef");
    }
    if normalized.contains("ground turkey") {
        return Some("ground_turkey");
    }
    if normalized.contains("ground pork") {
        return Some("ground_pork_lean");
    }
    if normalized.contains("turkey neck") {
        return Some("turkey_necks");
    }
    if normalized.contains("chicken neck") {
        return Some("chicken_necks");
    }
    if normalized.contains("chicken thigh") {
        return Some("chicken_thighs");
    }
    if has_word("sardine") {
        return Some("sardines_water");
    }
    if has_word("salmon") && !has_word("oil") {
        return if has_word("boneless") || has_word("fillet") || has_word("filet") {
            Some("salmon_boneless")
        } else {
            Some("salmon_atlantic")
        };
    }
    if normalized.contains("green bean") {
        return Some("green_beans");
    }
    if has_word("brussel") || has_word("brussels") {
        return Some("brussels_sprouts");
    }
    if normalized.starts_with("bell pepper") {
        return Some("bell_pepper");
    }
    match normalized {
        "kale raw" => Some("kale"),
        "carrot raw" => Some("carrot"),
        _ => None,
    }
}

/// Canonical underscore-joined key for a free-text ingredient name
#[must_use]
pub fn normalize_key(name: &str) -> String {
    let normalized = normalize_name(name);
    apply_aliases(&normalized).map_or_else(|| normalized.replace(' ', "_"), str::to_owned)
}

/// Ordered registry keys to try for a normalized key
#[must_use]
pub fn candidate_keys(key: &str) -> Vec<String> {
    let mut bases = vec![key.to_owned()];
    if !key.ends_with('s') {
        bases.push(format!("{key}s"));
    }
    if let Some(stem) = key.strip_suffix('y') {
        bases.push(format!("{stem}ies"));
    }
    if let Some(rest) = key.strip_prefix("lean_") {
        bases.push(rest.to_owned());
        bases.push(format!("{rest}_lean"));
    }

    let mut candidates: Vec<String> = Vec::with_capacity(bases.len() * KEY_SUFFIXES.len());
    for base in &bases {
        for suffix in KEY_SUFFIXES {
            let candidate = format!("{base}{suffix}");
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

/// First registry entry matching any candidate of the normalized key
#[must_use]
pub fn resolve<'r>(name: &str, registry: &'r NutrientRegistry) -> Option<ResolvedKey<'r>> {
    resolve_normalized(&normalize_key(name), registry)
}

/// Resolution for an already-normalized key
#[must_use]
pub fn resolve_normalized<'r>(
    key: &str,
    registry: &'r NutrientRegistry,
) -> Option<ResolvedKey<'r>> {
    candidate_keys(key)
        .iter()
        .find_map(|candidate| registry.get_entry(candidate))
        .map(|(key, profile)| ResolvedKey { key, profile })
}
