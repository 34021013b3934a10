// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use hh_core::MAX_WEIGHT_LIMIT;

fn answers(weight: Option<WeightOption>, budget: BudgetOption, keep: bool) -> GuideAnswers {
    GuideAnswers {
        weight,
        budget,
        timeframe: Timeframe::Within3Days,
        confirmation: if keep {
            Confirmation::Keep
        } else {
            Confirmation::Adjust
        },
    }
}

#[test]
fn walk_completes_with_valid_answers() {
    let guide = walk(
        JobCategory::Delivery,
        answers(Some(WeightOption::From10To25), BudgetOption::Kes25k, false),
    )
    .unwrap();

    let summary = guide.summary().unwrap();
    assert_eq!(guide.step(), GuideStep::Complete);
    assert_eq!(summary.weight_kg, Some(17.5));
    assert_eq!(summary.budget, 25_000.0);
    assert!(summary.violations.is_empty());
}

#[test]
fn walk_adjusts_heavy_load_by_default() {
    let guide = walk(
        JobCategory::Shopping,
        answers(Some(WeightOption::Over50), BudgetOption::Kes50k, false),
    )
    .unwrap();

    let summary = guide.summary().unwrap();
    assert_eq!(summary.weight_kg, Some(MAX_WEIGHT_LIMIT));
    assert!(summary.violations.is_empty());
}

#[test]
fn walk_keeps_values_when_asked() {
    let guide = walk(
        JobCategory::Shopping,
        answers(Some(WeightOption::Over50), BudgetOption::Custom(5.0), true),
    )
    .unwrap();

    let summary = guide.summary().unwrap();
    assert_eq!(summary.weight_kg, Some(75.0));
    assert_eq!(summary.budget, 5.0);
    assert_eq!(summary.violations.len(), 2);
}

#[test]
fn survey_needs_no_weight() {
    let guide = walk(JobCategory::Survey, answers(None, BudgetOption::Minimum, false)).unwrap();

    let summary = guide.summary().unwrap();
    assert_eq!(summary.weight_kg, None);
    assert_eq!(summary.weight_label, None);
}

#[test]
fn missing_weight_is_reported_for_weighted_categories() {
    let err = walk(JobCategory::Delivery, answers(None, BudgetOption::Minimum, false)).unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("--weight"));
}
