// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use super::{print_json, Context};
use crate::cli::{ConfigCommand, OutputFormat};
use crate::config::Config;
use crate::error::Result;

#[derive(Serialize)]
struct ShowOutput<'a> {
    path: String,
    exists: bool,
    drafts_path: String,
    config: &'a Config,
}

/// Execute a config subcommand.
pub fn run(ctx: &Context, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { output } => show(ctx, output.output),
        ConfigCommand::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show(ctx: &Context, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => println!("{}", render(ctx)?),
        OutputFormat::Json => print_json(&ShowOutput {
            path: ctx.config_path.display().to_string(),
            exists: ctx.config_path.exists(),
            drafts_path: ctx.config.drafts_path().display().to_string(),
            config: &ctx.config,
        })?,
    }
    Ok(())
}

/// Effective configuration as TOML, with the drafts path filled in.
pub(crate) fn render(ctx: &Context) -> Result<String> {
    let mut effective = ctx.config.clone();
    effective.drafts.path = Some(ctx.config.drafts_path());
    if effective.api.token.is_some() {
        effective.api.token = Some("********".to_string());
    }

    let source = if ctx.config_path.exists() {
        format!("# {}", ctx.config_path.display())
    } else {
        format!("# {} (not found, using defaults)", ctx.config_path.display())
    };
    Ok(format!("{source}\n{}", toml::to_string_pretty(&effective)?))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
