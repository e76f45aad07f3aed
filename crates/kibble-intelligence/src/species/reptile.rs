// ABOUTME: Reptile overrides: a calcium-support ingredient or supplement is required
// ABOUTME: Without one the recipe risks metabolic bone disease and is flagged critical
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{smooth_penalty, SpeciesInput, SpeciesState};
use crate::reference::species_checks::has_calcium_support;

const CALCIUM_PENALTY_MAX: f64 = 45.0;

pub(super) fn adjust(input: &SpeciesInput<'_>, state: &mut SpeciesState) {
    if has_calcium_support(input.recipe) {
        state.strengths.push("Includes calcium support".to_owned());
        return;
    }
    state.penalize_nutrition(smooth_penalty(1.0, CALCIUM_PENALTY_MAX));
    state.critical_violations.push(
        "No calcium supplement or cuttlebone: risk of metabolic bone disease".to_owned(),
    );
}
