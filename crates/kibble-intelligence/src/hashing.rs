// ABOUTME: Deterministic 32-bit string hashing for score tie-breakers and supplement boosts
// ABOUTME: Polynomial base-31 hash over UTF-16 code units with wrapping arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The hash must stay byte-reproducible across implementations, so it is
//! defined over UTF-16 code units with wrapping `i32` arithmetic:
//! `h = h * 31 + c`, starting from zero.

/// Base-31 polynomial hash over UTF-16 code units
#[must_use]
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Deterministic jitter in `-2..=2` for a recipe id
#[must_use]
pub fn tie_breaker(recipe_id: &str) -> i32 {
    (string_hash(recipe_id).unsigned_abs() % 5) as i32 - 2
}

/// Deterministic supplement boost in `1..=3`
///
/// Seeded from the recipe id and its supplement names, sorted so that
/// supplement order does not change the boost.
#[must_use]
pub fn supplement_boost<'a, I>(recipe_id: &str, supplement_names: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names: Vec<&str> = supplement_names.into_iter().collect();
    names.sort_unstable();
    let seed = format!("{recipe_id}|{}", names.join(","));
    f64::from(1 + string_hash(&seed).unsigned_abs() % 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hash_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("abc"), 96354);
        assert_eq!(tie_breaker("abc"), 2);
        assert_eq!(tie_breaker(""), -2);
    }

    #[test]
    fn test_hash_wraps_instead_of_overflowing() {
        let long = "z".repeat(64);
        assert_eq!(string_hash(&long), string_hash(&long));
        assert!((-2..=2).contains(&tie_breaker(&long)));
    }

    #[test]
    fn test_supplement_boost_ignores_order() {
        let a = supplement_boost("r1", ["taurine", "fish oil"]);
        let b = supplement_boost("r1", ["fish oil", "taurine"]);
        assert!((a - b).abs() < f64::EPSILON);
        assert!((1.0..=3.0).contains(&a));
    }
}
