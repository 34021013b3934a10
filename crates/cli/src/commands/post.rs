// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Duration, NaiveDate, Utc};
use hh_core::{validate_all, DraftStore, JobPosting, JsonlDraftStore, ValidationResult};
use serde::Serialize;

use super::{print_json, runtime, Context};
use crate::cli::{JobArgs, OutputFormat};
use crate::display::{format_queued, format_submitted, format_violations};
use crate::error::{Error, Result};
use crate::sync::{Connectivity, SubmitOutcome, SyncCoordinator};

/// How long a posting stays open when no due date is given.
const DEFAULT_DUE_HOURS: i64 = 24;

#[derive(Serialize)]
struct PostOutput<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    server_id: Option<&'a str>,
    job: &'a JobPosting,
    violations: &'a [String],
}

pub fn run(
    ctx: &Context,
    title: String,
    args: JobArgs,
    draft: bool,
    offline: bool,
    strict: bool,
    output: OutputFormat,
) -> Result<()> {
    let job = build_job(title, args, Utc::now())?;
    let validation = validate_all(&job);
    check_rules(&validation, strict)?;
    if let Some(warnings) = format_violations(&validation) {
        eprintln!("{warnings}");
    }

    let mut drafts = ctx.open_drafts()?;
    let outcome = if draft {
        SubmitOutcome::Queued(drafts.save_draft(job)?)
    } else {
        let offline = offline || ctx.config.offline;
        runtime()?.block_on(submit(ctx, drafts, job, offline))?
    };

    match output {
        OutputFormat::Text => match &outcome {
            SubmitOutcome::Submitted(submitted) => println!("{}", format_submitted(submitted)),
            SubmitOutcome::Queued(job) => println!("{}", format_queued(job)),
        },
        OutputFormat::Json => {
            let server_id = match &outcome {
                SubmitOutcome::Submitted(submitted) => Some(submitted.server_id.as_str()),
                SubmitOutcome::Queued(_) => None,
            };
            print_json(&PostOutput {
                status: if outcome.is_queued() { "queued" } else { "submitted" },
                server_id,
                job: outcome.job(),
                violations: &validation.violations,
            })?;
        }
    }
    Ok(())
}

async fn submit(
    ctx: &Context,
    drafts: JsonlDraftStore,
    job: JobPosting,
    offline: bool,
) -> Result<SubmitOutcome> {
    let connectivity = Connectivity::new(false);
    if !offline {
        ctx.monitor(connectivity.clone())?.probe_once().await;
    }
    let mut coordinator = SyncCoordinator::new(ctx.submitter()?, drafts, connectivity);
    coordinator.submit_or_draft(job).await
}

/// Refuse the posting in strict mode when any rule is broken.
pub(crate) fn check_rules(validation: &ValidationResult, strict: bool) -> Result<()> {
    if strict && !validation.is_valid() {
        return Err(Error::InvalidInput(format!(
            "posting breaks the posting rules:\n  {}\n  hint: drop --strict to post anyway",
            validation.violations.join("\n  ")
        )));
    }
    Ok(())
}

/// Assemble a posting from command-line fields.
pub(crate) fn build_job(title: String, args: JobArgs, now: DateTime<Utc>) -> Result<JobPosting> {
    let due = parse_due(args.due.as_deref(), now)?;
    let mut job = JobPosting::new(title, args.category, args.budget, due);
    if let Some(kg) = args.weight {
        job = job.with_weight_limit(kg);
    }
    if let Some(description) = args.description {
        job = job.with_description(description);
    }
    if let Some(store) = args.store {
        job = job.with_store_location(store);
    }
    if let Some(deliver_to) = args.deliver_to {
        job = job.with_delivery_location(deliver_to);
    }
    job.check_complete()?;
    Ok(job)
}

/// Parse a due date given as RFC 3339 or `YYYY-MM-DD` (end of that day, UTC).
///
/// Defaults to [`DEFAULT_DUE_HOURS`] from `now`. Dates in the past are refused.
pub(crate) fn parse_due(value: Option<&str>, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let Some(value) = value else {
        return Ok(now + Duration::hours(DEFAULT_DUE_HOURS));
    };

    let due = if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        dt.with_timezone(&Utc)
    } else {
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
            Error::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            }
        })?;
        date.and_hms_opt(23, 59, 59)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| Error::InvalidTimestamp {
                value: value.to_string(),
                reason: "out of range".to_string(),
            })?
    };

    if due <= now {
        return Err(Error::InvalidTimestamp {
            value: value.to_string(),
            reason: "due date is in the past".to_string(),
        });
    }
    Ok(due)
}

#[cfg(test)]
#[path = "post_tests.rs"]
mod tests;
