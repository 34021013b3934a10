// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for command output.

use hh_core::guide::{GuideMessage, Speaker};
use hh_core::{GuideSummary, JobPosting, SubmittedJob, ValidationResult};

use crate::colors;
use crate::sync::{ReplayReport, ReplayStop};

/// Format an amount in KES, dropping the decimals for whole numbers.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("KES {amount:.0}")
    } else {
        format!("KES {amount:.2}")
    }
}

/// Format a weight in kg, dropping the decimals for whole numbers.
pub fn format_weight(kg: f64) -> String {
    if kg.fract() == 0.0 {
        format!("{kg:.0}kg")
    } else {
        format!("{kg:.1}kg")
    }
}

/// One line per posting: id, category, budget, due date, title.
pub fn format_job_line(job: &JobPosting) -> String {
    format!(
        "{}  {:<8}  {:>10}  due {}  {}",
        job.id,
        job.category.as_str(),
        format_amount(job.budget),
        job.due.format("%Y-%m-%d %H:%M"),
        job.title
    )
}

/// Every field of a posting, one per line.
pub fn format_job_detail(job: &JobPosting) -> String {
    let mut lines = vec![
        format!("{}: {}", job.id, job.title),
        format!("Category: {}", job.category),
        format!("Budget: {}", format_amount(job.budget)),
    ];
    if let Some(kg) = job.weight_limit {
        lines.push(format!("Weight limit: {}", format_weight(kg)));
    }
    lines.push(format!("Due: {}", job.due.to_rfc3339()));
    if let Some(store) = &job.store_location {
        lines.push(format!("Store: {store}"));
    }
    if let Some(delivery) = &job.delivery_location {
        lines.push(format!("Deliver to: {delivery}"));
    }
    if let Some(created) = job.draft_created_at {
        lines.push(format!("Drafted: {}", created.to_rfc3339()));
    }
    if !job.description.is_empty() {
        lines.push(String::new());
        lines.push(format!("    {}", job.description));
    }
    lines.join("\n")
}

pub fn format_submitted(submitted: &SubmittedJob) -> String {
    format!(
        "{} {} as task {} ({})",
        colors::success("Posted"),
        submitted.job.id,
        submitted.server_id,
        submitted.status
    )
}

pub fn format_queued(job: &JobPosting) -> String {
    format!(
        "Saved draft {}; it will be sent when the backend is reachable",
        job.id
    )
}

/// Violations as `warning:` lines, or `None` when every rule passed.
pub fn format_violations(result: &ValidationResult) -> Option<String> {
    if result.is_valid() {
        return None;
    }
    let lines: Vec<String> = result
        .violations
        .iter()
        .map(|v| format!("{} {v}", colors::warning("warning:")))
        .collect();
    Some(lines.join("\n"))
}

/// Summary of a replay pass.
pub fn format_report(report: &ReplayReport) -> String {
    let mut lines: Vec<String> = report
        .synced
        .iter()
        .map(|s| format!("Synced {} as task {}", s.job.id, s.server_id))
        .collect();

    let noun = if report.synced_count() == 1 {
        "draft"
    } else {
        "drafts"
    };
    let mut status = format!("Synced {} {noun}, {} remaining", report.synced_count(), report.remaining);
    match &report.stop {
        ReplayStop::Completed => {}
        ReplayStop::Failed { id, error } => {
            status.push_str(&format!("; stopped at {id}: {error}"));
        }
        ReplayStop::Cancelled => status.push_str("; cancelled"),
    }
    lines.push(status);
    lines.join("\n")
}

/// The guide conversation, one message per line.
pub fn format_transcript(messages: &[GuideMessage]) -> String {
    let mut lines = Vec::new();
    for message in messages {
        match message.speaker {
            Speaker::Guide => lines.push(format!("{} {}", colors::header("guide:"), message.text)),
            Speaker::Requester => lines.push(format!("{} {}", colors::literal("you:"), message.text)),
        }
        for option in &message.options {
            lines.push(format!("  - {}", colors::context(option)));
        }
    }
    lines.join("\n")
}

pub fn format_summary(summary: &GuideSummary) -> String {
    let mut lines = vec![format!("Category: {}", summary.category)];
    match (summary.weight_kg, &summary.weight_label) {
        (Some(kg), _) => lines.push(format!("Weight: {}", format_weight(kg))),
        (None, Some(label)) => lines.push(format!("Weight: {label}")),
        (None, None) => {}
    }
    lines.push(format!("Budget: {}", format_amount(summary.budget)));
    lines.push(format!("Timeframe: {}", summary.timeframe.label()));
    for violation in &summary.violations {
        lines.push(format!("{} {violation}", colors::warning("warning:")));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
