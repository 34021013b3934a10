// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hh_core::guide::GuideMessage;
use hh_core::{
    Answer, BudgetOption, Confirmation, GuideStep, GuideSummary, JobCategory, PostingGuide,
    Timeframe, WeightOption,
};
use serde::Serialize;

use super::print_json;
use crate::cli::OutputFormat;
use crate::display::{format_summary, format_transcript};
use crate::error::{Error, Result};

/// Fixed answers for one run of the guide.
#[derive(Debug, Clone, Copy)]
pub struct GuideAnswers {
    pub weight: Option<WeightOption>,
    pub budget: BudgetOption,
    pub timeframe: Timeframe,
    /// Reply to any rule warning.
    pub confirmation: Confirmation,
}

#[derive(Serialize)]
struct GuideOutput<'a> {
    transcript: &'a [GuideMessage],
    summary: Option<&'a GuideSummary>,
}

pub fn run(category: JobCategory, answers: GuideAnswers, output: OutputFormat) -> Result<()> {
    let guide = walk(category, answers)?;
    match output {
        OutputFormat::Text => {
            println!("{}", format_transcript(guide.transcript()));
            if let Some(summary) = guide.summary() {
                println!();
                println!("{}", format_summary(summary));
            }
        }
        OutputFormat::Json => print_json(&GuideOutput {
            transcript: guide.transcript(),
            summary: guide.summary(),
        })?,
    }
    Ok(())
}

/// Drive the guide to completion with `answers`.
pub(crate) fn walk(category: JobCategory, answers: GuideAnswers) -> Result<PostingGuide> {
    let mut guide = PostingGuide::new(category);
    let mut step = guide.begin();

    while step != GuideStep::Complete {
        let answer = if guide.awaiting_confirmation() {
            Answer::Confirm(answers.confirmation)
        } else {
            match step {
                GuideStep::Weight => Answer::Weight(answers.weight.ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "{category} jobs ask about weight\n  hint: pass --weight (under-10, 10-25, 25-50, over-50, not-sure)"
                    ))
                })?),
                GuideStep::Budget => Answer::Budget(answers.budget),
                GuideStep::Timeframe => Answer::Timeframe(answers.timeframe),
                GuideStep::Welcome | GuideStep::Complete => break,
            }
        };
        step = guide.answer(answer)?;
    }

    if answers.weight.is_some() && !category.carries_weight() {
        tracing::debug!("{} jobs skip the weight question, ignoring --weight", category);
    }
    Ok(guide)
}

#[cfg(test)]
#[path = "guide_tests.rs"]
mod tests;
