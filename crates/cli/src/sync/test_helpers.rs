// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use hh_core::{JobCategory, JobPosting};

/// Create a delivery posting with a fixed due date.
pub fn make_job(id: &str, title: &str) -> JobPosting {
    JobPosting::new(
        title,
        JobCategory::Delivery,
        500.0,
        Utc.with_ymd_and_hms(2026, 6, 1, 18, 0, 0).unwrap(),
    )
    .with_id(id)
    .with_store_location("Westgate Mall")
    .with_delivery_location("Kilimani")
}

/// Create a posting with no id, for paths that assign one.
pub fn make_unnamed_job(title: &str) -> JobPosting {
    make_job("", title)
}
