// ABOUTME: Nutrient registry mapping canonical ingredient keys to per-100g profiles
// ABOUTME: Built-in table behind an init-once LazyLock plus fixture registries for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient Registry
//!
//! The built-in registry is process-wide state with a single lifecycle: it is
//! built on first use behind a `LazyLock` (concurrent first callers block on
//! the same initialization) and is read-only afterwards. Scoring code never
//! reaches for it implicitly; it receives a `&NutrientRegistry` through
//! [`ScoringContext`](crate::context::ScoringContext), so tests can substitute
//! a registry built with [`NutrientRegistry::from_entries`].

mod builtin;

use std::collections::HashMap;
use std::sync::LazyLock;

use kibble_core::models::NutrientProfile;
use tracing::debug;

use crate::key_resolver::{self, ResolvedKey};

static BUILTIN_REGISTRY: LazyLock<NutrientRegistry> = LazyLock::new(|| {
    let registry = NutrientRegistry::from_entries(builtin::entries());
    debug!(entries = registry.len(), "Built-in nutrient registry initialized");
    registry
});

/// Immutable key to nutrient profile table
#[derive(Debug, Clone, Default)]
pub struct NutrientRegistry {
    entries: HashMap<String, NutrientProfile>,
}

impl NutrientRegistry {
    /// Shared built-in registry, built on first use
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_REGISTRY
    }

    /// Registry from explicit entries; later duplicates replace earlier ones
    #[must_use]
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, NutrientProfile)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, profile)| (key.into(), profile))
                .collect(),
        }
    }

    /// Profile stored under an exact key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&NutrientProfile> {
        self.entries.get(key)
    }

    /// Stored key and profile for an exact key
    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<(&str, &NutrientProfile)> {
        self.entries
            .get_key_value(key)
            .map(|(k, profile)| (k.as_str(), profile))
    }

    /// Resolve a free-text ingredient name through the key search chain
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<ResolvedKey<'_>> {
        key_resolver::resolve(name, self)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
