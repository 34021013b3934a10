// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;
use hh_core::JobCategory;

use super::{non_empty_string, non_negative_amount, OutputFormat};

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Fields of a job posting.
#[derive(Args, Clone, Debug)]
pub struct JobArgs {
    /// Job category (shopping, delivery, survey)
    #[arg(long, short = 'c')]
    pub category: JobCategory,

    /// Offered pay in KES
    #[arg(long, short = 'b', value_parser = non_negative_amount)]
    pub budget: f64,

    /// Heaviest load the worker may carry, in kg
    #[arg(long, short = 'w', value_parser = non_negative_amount)]
    pub weight: Option<f64>,

    /// Deadline (RFC 3339 or YYYY-MM-DD); defaults to 24 hours from now
    #[arg(long, short = 'd')]
    pub due: Option<String>,

    /// Details for the worker
    #[arg(long)]
    pub description: Option<String>,

    /// Where to buy or collect goods
    #[arg(long, value_parser = non_empty_string)]
    pub store: Option<String>,

    /// Where to drop goods off
    #[arg(long = "deliver-to", value_parser = non_empty_string)]
    pub deliver_to: Option<String>,
}
