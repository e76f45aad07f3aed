// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Parse-amount command for kibble-cli
// ABOUTME: Converts a free-text quantity to grams using the category density profile

use anyhow::Result;
use kibble_scorer::intelligence::amount_parser::{parse_amount_text, VolumeProfile};
use serde_json::json;

use crate::helpers::display::print_json;

/// Convert an amount to grams
pub fn run(text: &str, category: Option<&str>, json: bool) -> Result<()> {
    let profile = VolumeProfile::from_category(category);
    let grams = parse_amount_text(text, profile);

    if json {
        print_json(&json!({
            "text": text,
            "category": category,
            "profile": format!("{profile:?}").to_lowercase(),
            "grams": grams,
        }))?;
    } else if grams > 0.0 {
        println!("{text:?} = {grams:.2} g ({profile:?} profile)");
    } else {
        println!("{text:?} = 0 g (vague or unparsable)");
    }
    Ok(())
}
