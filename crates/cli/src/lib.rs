// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hhrs - the HustleHub job posting client library.
//!
//! This crate provides the functionality behind the `hh` CLI: posting jobs to
//! the HustleHub backend, keeping them as drafts while the backend is
//! unreachable, and replaying those drafts once it is reachable again.
//!
//! # Main Components
//!
//! - [`sync`] - Submitter, connectivity tracking and the sync coordinator
//! - [`Config`] - Client configuration (backend URL, probes, drafts file)
//! - [`Error`] - Error types for all operations
//!
//! The domain model, validation rules and draft store live in `hh_core`.
//!
//! ```rust,ignore
//! use hh_core::{JsonlDraftStore, JobPosting};
//! use hhrs::sync::{Connectivity, HttpSubmitter, SyncCoordinator};
//!
//! let mut coordinator = SyncCoordinator::new(
//!     HttpSubmitter::new(&config.api)?,
//!     JsonlDraftStore::open(&config.drafts_path())?,
//!     Connectivity::new(false),
//! );
//! let outcome = coordinator.submit_or_draft(job).await?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, ConfigCommand, DraftsCommand, JobArgs, OutputArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;
use commands::guide::GuideAnswers;
use commands::Context;
use hh_core::Confirmation;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = env::vars::HH_LOG;

/// Install the stderr log subscriber.
///
/// The filter comes from `HH_LOG`, then `RUST_LOG`, then `debug` when
/// `verbose` is set and `warn` otherwise.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    // Tests may install a subscriber first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    let load = || Context::load(config_path.as_deref());

    match cli.command {
        Command::Post {
            title,
            job,
            draft,
            offline,
            strict,
            output,
        } => commands::post::run(&load()?, title, job, draft, offline, strict, output.output),
        Command::Drafts(cmd) => commands::drafts::run(&load()?, cmd),
        Command::Sync { watch, output } => commands::sync::run(&load()?, watch, output.output),
        Command::Validate {
            budget,
            weight,
            output,
        } => commands::validate::run(budget, weight, output.output),
        Command::Guide {
            category,
            weight,
            budget,
            timeframe,
            keep,
            output,
        } => {
            let answers = GuideAnswers {
                weight,
                budget,
                timeframe,
                confirmation: if keep {
                    Confirmation::Keep
                } else {
                    Confirmation::Adjust
                },
            };
            commands::guide::run(category, answers, output.output)
        }
        Command::Penalty {
            budget,
            accepted,
            output,
        } => commands::penalty::run(budget, accepted, output.output),
        Command::Config(cmd) => commands::config::run(&load()?, cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "hh", &mut std::io::stdout());
            Ok(())
        }
    }
}
