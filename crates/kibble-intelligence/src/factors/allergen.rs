// ABOUTME: Allergen safety factor matching declared allergies and restrictions against ingredients
// ABOUTME: Any declared allergen zeroes the factor; severity steps rank the explanation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kibble_core::models::{AnimalProfile, FactorKind, FactorScore};

use super::{searchable_names, FactorInput};

/// Common allergens and the ingredient words that carry them
const ALLERGEN_KEYWORDS: &[(&str, &[&str])] = &[
    ("chicken", &["chicken"]),
    ("beef", &["beef"]),
    ("dairy", &["dairy", "milk", "cheese", "yogurt", "whey"]),
    ("wheat", &["wheat"]),
    ("egg", &["egg"]),
    ("fish", &["fish", "salmon", "sardine", "tuna", "cod", "mackerel"]),
    ("pork", &["pork"]),
    ("soy", &["soy"]),
    ("corn", &["corn"]),
    ("lamb", &["lamb"]),
];

/// Allergen safety factor with the allergens found
#[derive(Debug, Clone, PartialEq)]
pub struct AllergenAssessment {
    /// Factor score
    pub factor: FactorScore,
    /// Distinct allergens found in the recipe
    pub matched: Vec<String>,
    /// Ingredient and supplement names that carry an allergen
    pub offending: Vec<String>,
}

impl AllergenAssessment {
    /// Whether any declared allergen was found
    #[must_use]
    pub fn has_match(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Severity of a number of distinct matched allergens
///
/// The factor itself is zero on any match; this only ranks how bad the match is.
#[must_use]
pub const fn step_penalty(matches: usize) -> f64 {
    match matches {
        0 => 0.0,
        1 => 60.0,
        2 => 80.0,
        3 => 90.0,
        _ => 98.0,
    }
}

/// Allergen terms for a pet: every allergy, plus restrictions naming a common allergen
///
/// Each term is paired with the ingredient words that reveal it.
#[must_use]
pub fn allergen_terms(pet: &AnimalProfile) -> Vec<(String, Vec<String>)> {
    let keyword_group = |term: &str| {
        ALLERGEN_KEYWORDS
            .iter()
            .find(|(keyword, synonyms)| term.contains(keyword) || synonyms.contains(&term))
    };

    let mut terms: Vec<(String, Vec<String>)> = Vec::new();
    let restrictions = pet
        .dietary_restrictions
        .iter()
        .map(|r| (r.trim().to_lowercase(), false));
    let allergies = pet.allergies.iter().map(|a| (a.trim().to_lowercase(), true));
    for (term, is_allergy) in allergies.chain(restrictions) {
        if term.is_empty() {
            continue;
        }
        let entry = match keyword_group(&term) {
            Some((keyword, synonyms)) => (
                (*keyword).to_owned(),
                synonyms.iter().map(|s| (*s).to_owned()).collect(),
            ),
            None if is_allergy => (term.clone(), vec![term.clone()]),
            None => continue,
        };
        if !terms.iter().any(|(name, _)| *name == entry.0) {
            terms.push(entry);
        }
    }
    terms
}

/// Score the recipe against the pet's declared allergies
#[must_use]
pub fn score(input: &FactorInput<'_>) -> AllergenAssessment {
    let terms = allergen_terms(input.pet);
    if terms.is_empty() {
        return AllergenAssessment {
            factor: FactorScore::new(FactorKind::AllergenSafety, 100.0, "No allergies declared"),
            matched: Vec::new(),
            offending: Vec::new(),
        };
    }

    let names = searchable_names(input.recipe);
    let mut matched = Vec::new();
    let mut offending: Vec<String> = Vec::new();
    for (allergen, words) in &terms {
        let carriers: Vec<&String> = names
            .iter()
            .filter(|name| words.iter().any(|w| name.contains(w.as_str())))
            .collect();
        if carriers.is_empty() {
            continue;
        }
        matched.push(allergen.clone());
        for carrier in carriers {
            if !offending.contains(carrier) {
                offending.push(carrier.clone());
            }
        }
    }

    if matched.is_empty() {
        return AllergenAssessment {
            factor: FactorScore::new(
                FactorKind::AllergenSafety,
                100.0,
                format!("None of {} declared allergens found", terms.len()),
            )
            .with_strengths(vec!["Free of declared allergens".to_owned()]),
            matched,
            offending,
        };
    }

    let issues = offending
        .iter()
        .map(|name| format!("{name} contains a declared allergen"))
        .collect();
    AllergenAssessment {
        factor: FactorScore::new(
            FactorKind::AllergenSafety,
            0.0,
            format!(
                "Declared allergens found: {} (severity {:.0})",
                matched.join(", "),
                step_penalty(matched.len())
            ),
        )
        .with_issues(issues),
        matched,
        offending,
    }
}
