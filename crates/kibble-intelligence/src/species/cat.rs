// ABOUTME: Cat overrides: taurine must come from a supplement, organ, muscle meat or fish
// ABOUTME: A missing source is a critical violation with a large nutrition penalty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{smooth_penalty, SpeciesInput, SpeciesState};
use crate::reference::species_checks::has_taurine_source;

const TAURINE_PENALTY_MAX: f64 = 40.0;

pub(super) fn adjust(input: &SpeciesInput<'_>, state: &mut SpeciesState) {
    if has_taurine_source(input.recipe) {
        state
            .strengths
            .push("Contains a natural or supplemental taurine source".to_owned());
        return;
    }
    state.penalize_nutrition(smooth_penalty(1.0, TAURINE_PENALTY_MAX));
    state.critical_violations.push(
        "No taurine source: cats cannot synthesize enough taurine and need meat, organ, fish or a supplement"
            .to_owned(),
    );
}
