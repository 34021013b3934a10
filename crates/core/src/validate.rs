// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Weight and budget rules for job postings.
//!
//! Rules never fail a posting outright: they report violations and the caller
//! decides whether to proceed anyway.

use serde::Serialize;

use crate::job::JobPosting;

/// Heaviest load a posting may ask a worker to carry, in kg.
pub const MAX_WEIGHT_LIMIT: f64 = 50.0;
/// Lowest budget a posting may offer, in KES.
pub const MINIMUM_PAY_LIMIT: f64 = 10.0;
/// Fraction of [`MAX_WEIGHT_LIMIT`] above which a posting earns a heads-up.
pub const WEIGHT_WARNING_RATIO: f64 = 0.8;

/// Which rule produced a [`RuleCheck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Weight,
    Budget,
}

/// Outcome of a single rule against a single value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleCheck {
    pub rule: Rule,
    /// The value that was checked, unchanged.
    pub value: f64,
    /// Human-readable message when the rule is broken.
    pub violation: Option<String>,
}

impl RuleCheck {
    pub fn passed(&self) -> bool {
        self.violation.is_none()
    }
}

/// Fails if `weight_kg` is above [`MAX_WEIGHT_LIMIT`].
pub fn check_weight(weight_kg: f64) -> RuleCheck {
    let violation = (weight_kg > MAX_WEIGHT_LIMIT).then(|| {
        format!("Weight limit exceeds recommended maximum of {MAX_WEIGHT_LIMIT}kg")
    });
    RuleCheck {
        rule: Rule::Weight,
        value: weight_kg,
        violation,
    }
}

/// Fails if `amount` is below [`MINIMUM_PAY_LIMIT`].
pub fn check_budget(amount: f64) -> RuleCheck {
    let violation = (amount < MINIMUM_PAY_LIMIT).then(|| {
        format!("Budget is below minimum recommended amount of KES {MINIMUM_PAY_LIMIT}")
    });
    RuleCheck {
        rule: Rule::Budget,
        value: amount,
        violation,
    }
}

/// True when a load is heavy enough to warn about while still within limits.
pub fn needs_weight_warning(weight_kg: f64) -> bool {
    weight_kg > MAX_WEIGHT_LIMIT * WEIGHT_WARNING_RATIO
}

/// Violations found for one posting, with the inputs they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub violations: Vec<String>,
    pub weight_kg: Option<f64>,
    pub budget: f64,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Runs every rule against `job`. The weight rule only applies when the
/// posting declares a weight limit.
pub fn validate_all(job: &JobPosting) -> ValidationResult {
    validate_values(job.weight_limit, job.budget)
}

/// Same as [`validate_all`] for loose values.
pub fn validate_values(weight_kg: Option<f64>, budget: f64) -> ValidationResult {
    let checks = weight_kg
        .map(check_weight)
        .into_iter()
        .chain(std::iter::once(check_budget(budget)));

    ValidationResult {
        violations: checks.filter_map(|c| c.violation).collect(),
        weight_kg,
        budget,
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
