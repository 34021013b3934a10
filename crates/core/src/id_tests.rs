// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

#[parameterized(
    job = { JOB_PREFIX, 12 },
    draft = { DRAFT_PREFIX, 14 },
)]
fn generated_id_has_prefix_and_eight_hex_chars(prefix: &str, len: usize) {
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let id = generate_id(prefix, "Buy groceries", &created_at);
    assert!(id.starts_with(&format!("{prefix}-")));
    assert_eq!(id.len(), len);
    assert!(id[prefix.len() + 1..].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn same_title_and_time_give_same_id() {
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    assert_eq!(
        generate_id(JOB_PREFIX, "Deliver parcel", &created_at),
        generate_id(JOB_PREFIX, "Deliver parcel", &created_at)
    );
}

#[test]
fn different_times_give_different_ids() {
    let a = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let b = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 1).unwrap();
    assert_ne!(
        generate_id(JOB_PREFIX, "Deliver parcel", &a),
        generate_id(JOB_PREFIX, "Deliver parcel", &b)
    );
}

#[test]
fn unique_id_without_collision_is_base_id() {
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let base = generate_id(DRAFT_PREFIX, "Survey", &created_at);
    assert_eq!(
        generate_unique_id(DRAFT_PREFIX, "Survey", &created_at, |_| false),
        base
    );
}

#[test]
fn unique_id_appends_suffix_on_collisions() {
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let base = generate_id(DRAFT_PREFIX, "Survey", &created_at);
    let second = format!("{base}-2");

    let id = generate_unique_id(DRAFT_PREFIX, "Survey", &created_at, |id| {
        id == base || id == second
    });
    assert_eq!(id, format!("{base}-3"));
}
