// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use hh_core::{BudgetOption, JobCategory, Timeframe, WeightOption};

pub use args::{JobArgs, OutputArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a finite, non-negative amount.
fn non_negative_amount(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err("must be a non-negative number".to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "hh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Post HustleHub jobs, with offline drafts that sync when you reconnect")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Use the config file at <path> instead of the default
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Jobs
    // ─────────────────────────────────────────────────────────────────────────
    /// Post a job, or keep it as a draft when the backend is unreachable
    #[command(after_help = colors::examples("\
Examples:
  hh post \"Buy groceries\" -c shopping -b 1500 -w 12     Post a shopping job
  hh post \"Parcel\" -c delivery -b 800 --due 2026-06-01  Post with a due date
  hh post \"Survey\" -c survey -b 300 --draft             Save as draft only
  hh post \"Parcel\" -c delivery -b 5 --strict            Refuse if rules are broken"))]
    Post {
        /// Job title
        #[arg(value_parser = non_empty_string)]
        title: String,

        #[command(flatten)]
        job: JobArgs,

        /// Save as a draft without trying to submit
        #[arg(long, conflicts_with = "offline")]
        draft: bool,

        /// Treat the backend as unreachable for this command
        #[arg(long)]
        offline: bool,

        /// Refuse to post when a validation rule is broken
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage queued drafts
    #[command(subcommand)]
    Drafts(DraftsCommand),

    /// Send queued drafts to the backend
    #[command(after_help = colors::examples("\
Examples:
  hh sync            Replay drafts once if the backend is reachable
  hh sync --watch    Keep replaying whenever connectivity returns (Ctrl-C to stop)"))]
    Sync {
        /// Keep running and replay every time connectivity returns
        #[arg(long)]
        watch: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Checks
    // ─────────────────────────────────────────────────────────────────────────
    /// Check a budget and weight against the posting rules
    Validate {
        /// Offered pay in KES
        #[arg(long, short = 'b', value_parser = non_negative_amount)]
        budget: f64,

        /// Heaviest load in kg
        #[arg(long, short = 'w', value_parser = non_negative_amount)]
        weight: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Walk through the posting checks with fixed answers
    #[command(after_help = colors::examples("\
Examples:
  hh guide -c delivery -w 10-25 -b 25k -t same-day    Answer every question
  hh guide -c shopping -w over-50 -b 50k -t flexible  Weight is clamped to 50kg
  hh guide -c shopping -w over-50 -b 50k -t flexible --keep   Keep the weight
  hh guide -c survey -b 5 -t within-week              Surveys skip the weight question

Options:
  Weight: under-10, 10-25, 25-50, over-50, not-sure
  Budget: minimum, 25k, 50k, 100k, or an amount in KES
  Timeframe: same-day, within-24-hours, within-3-days, within-week, flexible"))]
    Guide {
        /// Job category (shopping, delivery, survey)
        #[arg(long, short = 'c')]
        category: JobCategory,

        /// Weight band (not asked for surveys)
        #[arg(long, short = 'w')]
        weight: Option<WeightOption>,

        /// Budget option or amount in KES
        #[arg(long, short = 'b')]
        budget: BudgetOption,

        /// How soon the job must be done
        #[arg(long, short = 't')]
        timeframe: Timeframe,

        /// Keep values that break a rule instead of adjusting them
        #[arg(long)]
        keep: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the penalties for cancelling or finishing a job late
    Penalty {
        /// Job budget in KES
        #[arg(long, short = 'b', value_parser = non_negative_amount)]
        budget: f64,

        /// A worker has already accepted the job
        #[arg(long)]
        accepted: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum DraftsCommand {
    /// List drafts, oldest first
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show one draft
    #[command(arg_required_else_help = true)]
    Show {
        /// Draft ID
        id: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delete a draft without sending it
    #[command(arg_required_else_help = true)]
    Remove {
        /// Draft ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the path of the config file in use
    Path,
}

#[cfg(test)]
#[path = "../cli_tests.rs"]
mod tests;
