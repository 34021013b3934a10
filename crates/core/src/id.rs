// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locally generated posting identifiers.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Prefix for postings created through the normal submission path.
pub const JOB_PREFIX: &str = "job";
/// Prefix for postings saved directly as drafts.
pub const DRAFT_PREFIX: &str = "draft";

/// Generate a posting ID from prefix, title, and timestamp.
/// Format: {prefix}-{hash} where hash is first 8 hex chars of SHA256(title + timestamp)
pub fn generate_id(prefix: &str, title: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", title, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    format!("{}-{}", prefix, hex::encode(&hash[..4]))
}

/// Generate an ID that `exists` does not know about, appending `-2`, `-3`, ...
/// on collision.
pub fn generate_unique_id<F>(
    prefix: &str,
    title: &str,
    created_at: &DateTime<Utc>,
    exists: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(prefix, title, created_at);
    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
