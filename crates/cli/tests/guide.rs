// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn guide_prints_transcript_and_summary() {
    hh().args(["guide", "-c", "delivery", "-w", "10-25", "-b", "25k", "-t", "same-day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("guide: Hi!"))
        .stdout(predicate::str::contains("you: 10-25kg"))
        .stdout(predicate::str::contains("Weight: 17.5kg"))
        .stdout(predicate::str::contains("Budget: KES 25000"))
        .stdout(predicate::str::contains("Timeframe: Same day"));
}

#[test]
fn heavy_load_is_adjusted_unless_kept() {
    hh().args(["guide", "-c", "shopping", "-w", "over-50", "-b", "50k", "-t", "flexible"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight: 50kg"))
        .stdout(predicate::str::contains("warning:").not());

    hh().args([
        "guide", "-c", "shopping", "-w", "over-50", "-b", "50k", "-t", "flexible", "--keep",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Weight: 75kg"))
    .stdout(predicate::str::contains("warning: Weight limit exceeds"));
}

#[test]
fn survey_skips_weight_question() {
    hh().args(["guide", "-c", "survey", "-b", "minimum", "-t", "within-week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("heaviest load").not())
        .stdout(predicate::str::contains("Budget: KES 10"));
}

#[test]
fn weighted_category_requires_weight() {
    hh().args(["guide", "-c", "delivery", "-b", "25k", "-t", "flexible"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains("--weight"));
}

#[test]
fn json_output_has_transcript_and_summary() {
    let output = hh()
        .args(["guide", "-c", "survey", "-b", "5", "-t", "flexible", "--keep", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["transcript"].as_array().unwrap().len() > 3);
    assert_eq!(json["summary"]["budget"], 5.0);
    assert_eq!(json["summary"]["violations"].as_array().unwrap().len(), 1);
}
