// ABOUTME: Kibble CLI - command-line front end for the recipe compatibility scorer
// ABOUTME: Scores and ranks recipes, inspects nutrition, parses amounts, and resolves ingredient keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score one recipe for one pet
//! kibble-cli score --pet rex.json --recipe chicken-dinner.json
//!
//! # Rank a recipe set for a pet and show the best five
//! kibble-cli rank --pet rex.json --recipes recipes.json --top 5
//!
//! # Show dry-matter nutrition of a recipe
//! kibble-cli nutrition --recipe chicken-dinner.json
//!
//! # Convert a free-text amount to grams
//! kibble-cli parse-amount "1 1/2 tbsp" --category fat
//!
//! # Show how an ingredient name resolves
//! kibble-cli resolve "Boneless salmon fillet"
//!
//! # Machine-readable output
//! kibble-cli --json rank --pet rex.json --recipes recipes.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kibble_scorer::config::{LogLevel, ScorerConfig};
use kibble_scorer::errors::AppError;
use kibble_scorer::scoring::ScoringService;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "kibble-cli",
    about = "Kibble recipe compatibility scorer",
    long_about = "Score pet recipes for compatibility, rank recipe sets with cohort calibration, and inspect the nutrition pipeline."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score one recipe for one pet
    Score {
        /// Pet profile JSON file
        #[arg(long)]
        pet: PathBuf,

        /// Recipe JSON file
        #[arg(long)]
        recipe: PathBuf,
    },

    /// Score and calibrate a recipe set for one pet
    Rank {
        /// Pet profile JSON file
        #[arg(long)]
        pet: PathBuf,

        /// JSON file with an array of recipes (or {"recipes": [...]})
        #[arg(long)]
        recipes: PathBuf,

        /// Only show the best N recipes
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show dry-matter nutrition of a recipe
    Nutrition {
        /// Recipe JSON file
        #[arg(long)]
        recipe: PathBuf,
    },

    /// Convert a free-text amount to grams
    ParseAmount {
        /// Amount text, e.g. "2 cups" or "1/2 lb"
        text: String,

        /// Category hint selecting the volume density profile (fat, oil, supplement)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show how an ingredient name resolves against the nutrient registry
    Resolve {
        /// Ingredient name
        name: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<AppError>()
                .map_or(1, |app| app.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let config = ScorerConfig::from_env()?.with_log_level(level);
    config.logging.init()?;
    debug!("{}", config.summary());

    let service = ScoringService::new(config.scoring);
    let json = cli.json;

    match cli.command {
        Command::Score { pet, recipe } => commands::score::run(&service, &pet, &recipe, json)?,
        Command::Rank { pet, recipes, top } => {
            commands::rank::run(&service, &pet, &recipes, top, json)?;
        }
        Command::Nutrition { recipe } => commands::nutrition::run(&service, &recipe, json)?,
        Command::ParseAmount { text, category } => {
            commands::parse_amount::run(&text, category.as_deref(), json)?;
        }
        Command::Resolve { name } => commands::resolve::run(&service, &name, json)?,
    }

    Ok(())
}
