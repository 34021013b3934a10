// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the hhrs library.
///
/// Submission failures are not listed here: the sync coordinator turns them
/// into queued drafts. What remains is local trouble (config, disk, input).
#[derive(Debug, Error)]
pub enum Error {
    #[error("draft not found: {0}\n  hint: run 'hh drafts list' to see queued drafts")]
    DraftNotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("invalid timestamp '{value}': {reason}\n  hint: use RFC 3339 (2025-06-01T18:00:00Z) or YYYY-MM-DD")]
    InvalidTimestamp { value: String, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid config file {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("http client error: {0}")]
    HttpClient(String),

    #[error("corrupted drafts file: {0}\n  hint: fix or remove the offending line")]
    CorruptedData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for hhrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<hh_core::Error> for Error {
    fn from(e: hh_core::Error) -> Self {
        match e {
            hh_core::Error::DraftNotFound(id) => Error::DraftNotFound(id),
            hh_core::Error::Io(e) => Error::Io(e),
            hh_core::Error::Json(e) => Error::Json(e),
            hh_core::Error::CorruptedStore { line, reason } => {
                Error::CorruptedData(format!("line {line}: {reason}"))
            }
            other => Error::InvalidInput(other.to_string()),
        }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
