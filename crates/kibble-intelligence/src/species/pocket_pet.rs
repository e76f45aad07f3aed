// ABOUTME: Pocket-pet overrides: breed hay minimum and dietary vitamin C for guinea pigs
// ABOUTME: Hay shortfalls are critical for hay-obligate breeds, warnings otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{relative_deficit, smooth_penalty, SpeciesInput, SpeciesState};
use crate::reference::species_checks::{has_vitamin_c_source, hay_pct, pocket_pet_standard};

const HAY_PENALTY_MAX: f64 = 45.0;
const VITAMIN_C_PENALTY_MAX: f64 = 40.0;

pub(super) fn adjust(input: &SpeciesInput<'_>, state: &mut SpeciesState) {
    let standard = pocket_pet_standard(&input.pet.breed_key());

    let hay = hay_pct(input.recipe, input.nutrition);
    let deficit = relative_deficit(hay, standard.hay_min_pct);
    if deficit > 0.0 {
        state.penalize_nutrition(smooth_penalty(deficit, HAY_PENALTY_MAX));
        let message = format!(
            "Hay is {hay:.0}% of the diet, below the {:.0}% minimum",
            standard.hay_min_pct
        );
        if standard.is_hay_eater() {
            state.critical_violations.push(message);
        } else {
            state.warnings.push(message);
        }
    } else if standard.hay_min_pct > 0.0 {
        state.strengths.push("Meets the hay requirement".to_owned());
    }

    if standard.vitamin_c_critical && !has_vitamin_c_source(input.recipe) {
        state.penalize_nutrition(smooth_penalty(1.0, VITAMIN_C_PENALTY_MAX));
        state
            .critical_violations
            .push("No vitamin C source for a species that cannot synthesize it".to_owned());
    }
}
