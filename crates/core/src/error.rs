// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hh-core operations.

use thiserror::Error;

/// All possible errors that can occur in hh-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("draft not found: {0}")]
    DraftNotFound(String),

    #[error("invalid category: '{0}'\n  hint: valid categories are: shopping, delivery, survey")]
    InvalidCategory(String),

    #[error("invalid timeframe: '{0}'\n  hint: valid timeframes are: same-day, within-24-hours, within-3-days, within-week, flexible")]
    InvalidTimeframe(String),

    #[error("invalid weight option: '{0}'\n  hint: valid options are: under-10, 10-25, 25-50, over-50, not-sure")]
    InvalidWeightOption(String),

    #[error("invalid budget option: '{0}'\n  hint: valid options are: minimum, 25k, 50k, 100k, custom")]
    InvalidBudgetOption(String),

    #[error("guide is at step '{current}', cannot answer '{answer}'")]
    GuideOutOfTurn {
        current: &'static str,
        answer: &'static str,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted draft store at line {line}: {reason}")]
    CorruptedStore { line: usize, reason: String },
}

/// A specialized Result type for hh-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
