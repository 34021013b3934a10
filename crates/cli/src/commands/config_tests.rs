// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn context(dir: &TempDir, config: Config) -> Context {
    Context {
        config,
        config_path: dir.path().join("config.toml"),
    }
}

#[test]
fn render_marks_missing_file() {
    let dir = TempDir::new().unwrap();
    let text = render(&context(&dir, Config::default())).unwrap();

    assert!(text.lines().next().unwrap().ends_with("(not found, using defaults)"));
    assert!(text.contains("base_url = \"http://127.0.0.1:8000\""));
    assert!(text.contains("[drafts]"));
}

#[test]
fn render_masks_token_and_fills_drafts_path() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.api.token = Some("secret-token".to_string());
    config.drafts.path = Some(PathBuf::from("/var/tmp/drafts.jsonl"));

    let text = render(&context(&dir, config)).unwrap();

    assert!(!text.contains("secret-token"));
    assert!(text.contains("********"));
    assert!(text.contains("/var/tmp/drafts.jsonl"));
}
