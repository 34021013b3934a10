// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hh_core::Penalties;

use super::print_json;
use crate::cli::OutputFormat;
use crate::display::format_amount;
use crate::error::Result;

pub fn run(budget: f64, accepted: bool, output: OutputFormat) -> Result<()> {
    let penalties = Penalties::for_budget(budget, accepted);
    match output {
        OutputFormat::Text => {
            let when = if accepted {
                "after a worker accepted"
            } else {
                "before a worker accepts"
            };
            println!(
                "Cancelling {when}: {}",
                format_amount(penalties.cancellation)
            );
            println!("Finishing late: {}", format_amount(penalties.late));
        }
        OutputFormat::Json => print_json(&penalties)?,
    }
    Ok(())
}
