// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hh_core::validate::{needs_weight_warning, validate_values};
use hh_core::ValidationResult;

use super::print_json;
use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{format_amount, format_violations, format_weight};
use crate::error::Result;

/// Check loose values against the posting rules. Broken rules are reported,
/// never treated as a failure.
pub fn run(budget: f64, weight: Option<f64>, output: OutputFormat) -> Result<()> {
    let result = validate_values(weight, budget);
    match output {
        OutputFormat::Text => println!("{}", render(&result)),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}

pub(crate) fn render(result: &ValidationResult) -> String {
    let mut lines = Vec::new();
    if let Some(warnings) = format_violations(result) {
        lines.push(warnings);
    } else {
        let checked = match result.weight_kg {
            Some(kg) => format!("{} and {}", format_amount(result.budget), format_weight(kg)),
            None => format_amount(result.budget),
        };
        lines.push(format!("{} {checked} meets the posting rules", colors::success("ok:")));
    }
    if let Some(kg) = result.weight_kg.filter(|kg| result.is_valid() && needs_weight_warning(*kg)) {
        lines.push(format!(
            "note: {} is close to the limit; consider splitting the load",
            format_weight(kg)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
