// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hh_core::{DraftStore, JobPosting};

use super::{print_json, Context};
use crate::cli::{DraftsCommand, OutputFormat};
use crate::display::{format_job_detail, format_job_line};
use crate::error::{Error, Result};

/// Execute a drafts subcommand.
pub fn run(ctx: &Context, cmd: DraftsCommand) -> Result<()> {
    let mut store = ctx.open_drafts()?;
    match cmd {
        DraftsCommand::List { output } => list(&store, output.output),
        DraftsCommand::Show { id, output } => show(&store, &id, output.output),
        DraftsCommand::Remove { id } => {
            remove(&mut store, &id)?;
            println!("Removed draft {id}");
            Ok(())
        }
    }
}

fn list(store: &impl DraftStore, output: OutputFormat) -> Result<()> {
    let drafts = store.list_drafts()?;
    match output {
        OutputFormat::Text => {
            if drafts.is_empty() {
                println!("No drafts waiting to sync.");
            }
            for draft in &drafts {
                println!("{}", format_job_line(draft));
            }
        }
        OutputFormat::Json => print_json(&drafts)?,
    }
    Ok(())
}

fn show(store: &impl DraftStore, id: &str, output: OutputFormat) -> Result<()> {
    let draft = find(store, id)?;
    match output {
        OutputFormat::Text => println!("{}", format_job_detail(&draft)),
        OutputFormat::Json => print_json(&draft)?,
    }
    Ok(())
}

/// The oldest draft with `id`.
pub(crate) fn find(store: &impl DraftStore, id: &str) -> Result<JobPosting> {
    store
        .list_drafts()?
        .into_iter()
        .find(|d| d.id == id)
        .ok_or_else(|| Error::DraftNotFound(id.to_string()))
}

/// Remove the oldest draft with `id`, failing if there is none.
pub(crate) fn remove(store: &mut impl DraftStore, id: &str) -> Result<()> {
    if store.remove_draft(id)? {
        tracing::info!("removed draft {}", id);
        Ok(())
    } else {
        Err(Error::DraftNotFound(id.to_string()))
    }
}

#[cfg(test)]
#[path = "drafts_tests.rs"]
mod tests;
