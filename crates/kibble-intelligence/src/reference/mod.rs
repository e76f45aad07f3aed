// ABOUTME: Static reference tables consumed by the factor scorers and species engine
// ABOUTME: Target ranges, coarse categories, health benefit profiles, quality tiers, species checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Coarse ingredient categories for diversity and perfect-match checks
pub mod categories;
/// Health concern benefit profiles
pub mod health_profiles;
/// Ingredient quality tiering
pub mod quality_tiers;
/// Species ingredient checks (toxins, pellets, hay, taurine, vitamin C, calcium)
pub mod species_checks;
/// Dry-matter nutrient targets, Ca:P standards and critical floors
pub mod targets;

/// Whether `term` appears in `text`, or `text` in `term`, ignoring case and hyphens
///
/// Either side must be at least three characters long to match.
#[must_use]
pub fn loose_match(text: &str, term: &str) -> bool {
    let text = text.to_lowercase().replace(['-', '_'], " ");
    let term = term.to_lowercase().replace(['-', '_'], " ");
    let (text, term) = (text.trim(), term.trim());
    if text.len() < 3 || term.len() < 3 {
        return false;
    }
    text.contains(term) || term.contains(text)
}

/// Normalize a concern or tag: lowercase, trimmed, spaces and underscores as hyphens
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_match_is_bidirectional() {
        assert!(loose_match("Chicken Hearts", "heart"));
        assert!(loose_match("heart", "chicken heart"));
        assert!(loose_match("sweet-potato", "sweet potato"));
        assert!(!loose_match("ox", "ox tail"));
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag(" Kidney Disease "), "kidney-disease");
        assert_eq!(normalize_tag("joint_mobility"), "joint-mobility");
    }
}
