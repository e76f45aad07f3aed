// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for kibble-cli
// ABOUTME: One module per subcommand: score, rank, nutrition, parse-amount, resolve

pub mod nutrition;
pub mod parse_amount;
pub mod rank;
pub mod resolve;
pub mod score;
