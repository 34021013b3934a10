// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn passing_values_are_confirmed() {
    let text = render(&validate_values(Some(20.0), 500.0));
    assert!(text.contains("KES 500 and 20kg meets the posting rules"));
    assert!(!text.contains("note:"));
}

#[test]
fn budget_only_check_skips_weight() {
    let text = render(&validate_values(None, 10.0));
    assert!(text.contains("KES 10 meets the posting rules"));
}

#[test]
fn heavy_but_valid_load_gets_a_note() {
    let text = render(&validate_values(Some(45.0), 500.0));
    assert!(text.contains("note: 45kg is close to the limit"));
}

#[test]
fn violations_replace_the_ok_line() {
    let text = render(&validate_values(Some(51.0), 9.99));
    assert!(!text.contains("meets the posting rules"));
    assert!(text.contains("Weight limit exceeds"));
    assert!(text.contains("Budget is below"));
    assert!(!text.contains("note:"));
}
