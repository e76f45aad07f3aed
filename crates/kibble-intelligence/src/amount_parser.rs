// ABOUTME: Free-text ingredient quantity parsing into grams
// ABOUTME: Handles fractions, mixed numbers, ranges, volume and mass units, and vague qualifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Amount Parser
//!
//! Converts recipe quantities such as `"1 1/2 cups"`, `"2-3 tbsp"`, `"½ lb"` or
//! `"200g"` into grams. The result is always a finite, non-negative number;
//! anything vague ("a pinch", "to taste") or unparsable yields `0.0`.

use std::sync::LazyLock;

use kibble_core::models::Amount;
use regex::Regex;

/// Volume conversion constants for the generic profile (grams per unit)
const GENERIC_GRAMS_PER_TSP: f64 = 5.0;
const GENERIC_GRAMS_PER_TBSP: f64 = 15.0;
const GENERIC_GRAMS_PER_CUP: f64 = 240.0;

/// Fats are denser per spoon than water
const FAT_GRAMS_PER_TSP: f64 = 4.5;
const FAT_GRAMS_PER_TBSP: f64 = 13.5;
const FAT_GRAMS_PER_CUP: f64 = 218.0;

/// Powders are lighter per spoon than water
const SUPPLEMENT_GRAMS_PER_TSP: f64 = 3.0;
const SUPPLEMENT_GRAMS_PER_TBSP: f64 = 9.0;
const SUPPLEMENT_GRAMS_PER_CUP: f64 = 120.0;

/// Weight conversion constants (to grams)
const GRAMS_PER_KG: f64 = 1000.0;
const GRAMS_PER_MG: f64 = 0.001;
const GRAMS_PER_OZ: f64 = 28.3495;
const GRAMS_PER_LB: f64 = 453.592;

/// Mass unit spellings and their gram multipliers
const MASS_UNITS: &[(&str, f64)] = &[
    ("kilograms", GRAMS_PER_KG),
    ("kilogram", GRAMS_PER_KG),
    ("kg", GRAMS_PER_KG),
    ("milligrams", GRAMS_PER_MG),
    ("milligram", GRAMS_PER_MG),
    ("mg", GRAMS_PER_MG),
    ("grams", 1.0),
    ("gram", 1.0),
    ("g", 1.0),
    ("ounces", GRAMS_PER_OZ),
    ("ounce", GRAMS_PER_OZ),
    ("oz", GRAMS_PER_OZ),
    ("pounds", GRAMS_PER_LB),
    ("pound", GRAMS_PER_LB),
    ("lbs", GRAMS_PER_LB),
    ("lb", GRAMS_PER_LB),
];

/// Unicode vulgar fractions and their decimal values
const UNICODE_FRACTIONS: &[(char, &str)] = &[
    ('½', "0.5"),
    ('⅓', "0.3333333333"),
    ('⅔', "0.6666666667"),
    ('¼', "0.25"),
    ('¾', "0.75"),
    ('⅕', "0.2"),
    ('⅖', "0.4"),
    ('⅗', "0.6"),
    ('⅘', "0.8"),
    ('⅙', "0.1666666667"),
    ('⅚', "0.8333333333"),
    ('⅛', "0.125"),
    ('⅜', "0.375"),
    ('⅝', "0.625"),
    ('⅞', "0.875"),
];

static VAGUE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(to taste|pinch(es)?|dash(es)?|some|handfuls?|few|several|as needed)\b").ok()
});

static PERCENT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s*%$").ok());

static WHITESPACE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

static MIXED_NUMBER_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1-1/2, 2 - 3/4 (but not the "2-3" of a range)
    Regex::new(r"(^|\s)(\d+)\s*-\s*(\d+\s*/\s*\d+)").ok()
});

static VOLUME_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(tsps?|teaspoons?|tbsps?|tbs|tablespoons?|cups?)\b").ok()
});

/// Mass units, longest spelling first so "lb" never shadows "lbs"
static MASS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let mut keys: Vec<&str> = MASS_UNITS.iter().map(|(k, _)| *k).collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    Regex::new(&format!(r"(\d[^a-z]*?)\s*({})\b", keys.join("|"))).ok()
});

static RANGE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(.+?)\s*(?:\bto\b|-|–)\s*(.+?)\s*$").ok());

/// Spoon-and-cup density profile, picked from the ingredient's category hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeProfile {
    /// Water-like density
    #[default]
    Generic,
    /// Oils and fats
    Fat,
    /// Powdered supplements
    Supplement,
}

impl VolumeProfile {
    /// Profile for an optional category hint
    #[must_use]
    pub fn from_category(category: Option<&str>) -> Self {
        let Some(category) = category else {
            return Self::Generic;
        };
        let category = category.to_lowercase();
        if category.contains("fat") || category.contains("oil") {
            Self::Fat
        } else if category.contains("supplement") {
            Self::Supplement
        } else {
            Self::Generic
        }
    }

    /// Grams per teaspoon, tablespoon and cup
    const fn grams_per_unit(self) -> (f64, f64, f64) {
        match self {
            Self::Generic => (
                GENERIC_GRAMS_PER_TSP,
                GENERIC_GRAMS_PER_TBSP,
                GENERIC_GRAMS_PER_CUP,
            ),
            Self::Fat => (FAT_GRAMS_PER_TSP, FAT_GRAMS_PER_TBSP, FAT_GRAMS_PER_CUP),
            Self::Supplement => (
                SUPPLEMENT_GRAMS_PER_TSP,
                SUPPLEMENT_GRAMS_PER_TBSP,
                SUPPLEMENT_GRAMS_PER_CUP,
            ),
        }
    }

    fn volume_multiplier(self, unit: &str) -> f64 {
        let (tsp, tbsp, cup) = self.grams_per_unit();
        if unit.starts_with("cup") {
            cup
        } else if unit.starts_with("tb") || unit.starts_with("tablespoon") {
            tbsp
        } else {
            tsp
        }
    }
}

/// Grams for an optional recipe amount
#[must_use]
pub fn parse_amount(amount: Option<&Amount>, category: Option<&str>) -> f64 {
    match amount {
        Some(Amount::Grams(grams)) => sanitize(*grams),
        Some(Amount::Text(text)) => parse_amount_text(text, VolumeProfile::from_category(category)),
        None => 0.0,
    }
}

/// Grams for a free-text quantity
#[must_use]
pub fn parse_amount_text(text: &str, profile: VolumeProfile) -> f64 {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() || is_vague(&lowered) {
        return 0.0;
    }

    if let Some(pct) = percent_value(&lowered) {
        return sanitize(pct);
    }

    let mut normalized = replace_unicode_fractions(&lowered);
    if let Some(re) = WHITESPACE_PATTERN.as_ref() {
        normalized = re.replace_all(normalized.trim(), " ").into_owned();
    }
    if let Some(re) = MIXED_NUMBER_PATTERN.as_ref() {
        normalized = re.replace_all(&normalized, "$1$2 $3").into_owned();
    }

    let (quantity_text, multiplier) = if normalized.chars().any(|c| c.is_ascii_digit()) {
        strip_unit(&normalized, profile)
    } else {
        (normalized, 1.0)
    };

    if let Some((low, high)) = split_range(&quantity_text) {
        return sanitize((low + high) / 2.0 * multiplier);
    }

    sanitize(sum_numeric_tokens(&quantity_text) * multiplier)
}

fn sanitize(grams: f64) -> f64 {
    if grams.is_finite() && grams > 0.0 {
        grams
    } else {
        0.0
    }
}

fn is_vague(text: &str) -> bool {
    VAGUE_PATTERN.as_ref().is_some_and(|re| re.is_match(text))
}

fn percent_value(text: &str) -> Option<f64> {
    let caps = PERCENT_PATTERN.as_ref()?.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

fn replace_unicode_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        if let Some((_, decimal)) = UNICODE_FRACTIONS.iter().find(|(f, _)| *f == ch) {
            out.push(' ');
            out.push_str(decimal);
            out.push(' ');
        } else if ch == '⁄' {
            out.push('/');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Remove the unit token and return the remaining text with its gram multiplier
fn strip_unit(text: &str, profile: VolumeProfile) -> (String, f64) {
    if let Some(m) = VOLUME_PATTERN.as_ref().and_then(|re| re.find(text)) {
        let multiplier = profile.volume_multiplier(m.as_str());
        let remaining = format!("{} {}", &text[..m.start()], &text[m.end()..]);
        return (remaining, multiplier);
    }

    if let Some(re) = MASS_PATTERN.as_ref() {
        if let Some(caps) = re.captures(text) {
            let unit = caps.get(2).map_or("", |u| u.as_str());
            let multiplier = MASS_UNITS
                .iter()
                .find(|(k, _)| *k == unit)
                .map_or(1.0, |(_, grams)| *grams);
            let remaining = re.replace(text, "$1 ").into_owned();
            return (remaining, multiplier);
        }
    }

    (text.to_owned(), 1.0)
}

fn split_range(text: &str) -> Option<(f64, f64)> {
    let caps = RANGE_PATTERN.as_ref()?.captures(text)?;
    let low = parse_quantity(caps.get(1)?.as_str())?;
    let high = parse_quantity(caps.get(2)?.as_str())?;
    Some((low, high))
}

/// Sum of a sequence made only of numeric tokens ("1 1/2"), `None` otherwise
fn parse_quantity(text: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut seen = false;
    for token in text.split_whitespace() {
        total += parse_number_token(token)?;
        seen = true;
    }
    seen.then_some(total)
}

/// Sum of every numeric token, ignoring descriptive words ("2 large" → 2)
fn sum_numeric_tokens(text: &str) -> f64 {
    text.split_whitespace().filter_map(parse_number_token).sum()
}

fn parse_number_token(token: &str) -> Option<f64> {
    let token = token.trim_matches(|c: char| !(c.is_ascii_digit() || c == '.' || c == '/'));
    if token.is_empty() {
        return None;
    }
    let value = if let Some((num, den)) = token.split_once('/') {
        let num: f64 = num.parse().ok()?;
        let den: f64 = den.parse().ok()?;
        if den.abs() < f64::EPSILON {
            return None;
        }
        num / den
    } else {
        token.parse().ok()?
    };
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-6
    }

    #[test]
    fn test_volume_units_use_profile() {
        assert!(close(parse_amount_text("2 cups", VolumeProfile::Generic), 480.0));
        assert!(close(parse_amount_text("1 tbsp", VolumeProfile::Fat), 13.5));
        assert!(close(parse_amount_text("2 tsp", VolumeProfile::Supplement), 6.0));
    }

    #[test]
    fn test_mass_units_prefer_longest_key() {
        assert!(close(parse_amount_text("1/2 lb", VolumeProfile::Generic), 226.796));
        assert!(close(parse_amount_text("2 lbs", VolumeProfile::Generic), 907.184));
        assert!(close(parse_amount_text("500mg", VolumeProfile::Generic), 0.5));
        assert!(close(parse_amount_text("1.5 kg", VolumeProfile::Generic), 1500.0));
        assert!(close(parse_amount_text("200 g", VolumeProfile::Generic), 200.0));
    }

    #[test]
    fn test_ranges_return_mean() {
        assert!(close(parse_amount_text("2-3 tbsp", VolumeProfile::Generic), 37.5));
        assert!(close(parse_amount_text("1 to 2 cups", VolumeProfile::Generic), 360.0));
        assert!(close(parse_amount_text("100–200g", VolumeProfile::Generic), 150.0));
    }

    #[test]
    fn test_fractions_and_mixed_numbers() {
        assert!(close(parse_amount_text("1 1/2 cups", VolumeProfile::Generic), 360.0));
        assert!(close(parse_amount_text("1-1/2 cups", VolumeProfile::Generic), 360.0));
        assert!(close(parse_amount_text("½ cup", VolumeProfile::Generic), 120.0));
        assert!(close(parse_amount_text("1½ cups", VolumeProfile::Generic), 360.0));
    }

    #[test]
    fn test_vague_and_empty_are_zero() {
        assert!(parse_amount_text("a pinch", VolumeProfile::Generic).abs() < f64::EPSILON);
        assert!(parse_amount_text("salt to taste", VolumeProfile::Generic).abs() < f64::EPSILON);
        assert!(parse_amount_text("", VolumeProfile::Generic).abs() < f64::EPSILON);
        assert!(parse_amount_text("   ", VolumeProfile::Generic).abs() < f64::EPSILON);
        assert!(parse_amount_text("chopped", VolumeProfile::Generic).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_and_numeric_amounts() {
        assert!(close(parse_amount_text("70%", VolumeProfile::Generic), 70.0));
        assert!(close(parse_amount(Some(&Amount::Grams(125.0)), None), 125.0));
        assert!(parse_amount(Some(&Amount::Grams(-3.0)), None).abs() < f64::EPSILON);
        assert!(parse_amount(Some(&Amount::Grams(f64::INFINITY)), None).abs() < f64::EPSILON);
        assert!(parse_amount(None, None).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_hint_selects_profile() {
        assert_eq!(VolumeProfile::from_category(Some("Oil")), VolumeProfile::Fat);
        assert_eq!(
            VolumeProfile::from_category(Some("supplement")),
            VolumeProfile::Supplement
        );
        let oil = Amount::Text("1 tbsp".to_owned());
        assert!(close(parse_amount(Some(&oil), Some("fat")), 13.5));
    }
}
