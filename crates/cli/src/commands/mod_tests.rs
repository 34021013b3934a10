// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use hh_core::DraftStore;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn load_reads_explicit_path() {
    let dir = TempDir::new().unwrap();
    let drafts = dir.path().join("drafts.jsonl");
    let path = write_config(
        &dir,
        &format!("offline = true\n\n[drafts]\npath = {:?}\n", drafts.display().to_string()),
    );

    let ctx = Context::load(Some(&path)).unwrap();

    assert!(ctx.config.offline);
    assert_eq!(ctx.config_path, path);
    assert_eq!(ctx.config.drafts_path(), drafts);
}

#[test]
fn load_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api]\nbase_url = \"ftp://example.com\"\n");

    assert!(Context::load(Some(&path)).is_err());
}

#[test]
fn open_drafts_creates_store_file() {
    let dir = TempDir::new().unwrap();
    let drafts = dir.path().join("nested/drafts.jsonl");
    let path = write_config(
        &dir,
        &format!("[drafts]\npath = {:?}\n", drafts.display().to_string()),
    );

    let ctx = Context::load(Some(&path)).unwrap();
    let store = ctx.open_drafts().unwrap();

    assert!(drafts.exists());
    assert!(store.is_empty().unwrap());
}

#[test]
fn monitor_uses_api_host() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api]\nbase_url = \"http://127.0.0.1:9\"\n");
    let ctx = Context::load(Some(&path)).unwrap();

    assert!(ctx.monitor(Connectivity::default()).is_ok());
    assert_eq!(ctx.submitter().unwrap().endpoint(), "http://127.0.0.1:9/api/tasks/create");
}
