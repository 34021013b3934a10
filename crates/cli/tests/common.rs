// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A temp directory holding a config file and a drafts file.
pub struct TestEnv {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub drafts_path: PathBuf,
}

impl TestEnv {
    /// Config with forced offline mode and a backend nobody listens on.
    pub fn offline() -> Self {
        Self::with_backend("http://127.0.0.1:9", true)
    }

    /// Config pointing at `base_url` with offline mode off.
    pub fn online(base_url: &str) -> Self {
        Self::with_backend(base_url, false)
    }

    fn with_backend(base_url: &str, offline: bool) -> Self {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        let drafts_path = dir.path().join("drafts.jsonl");
        let config = format!(
            "offline = {offline}\n\n\
             [api]\nbase_url = \"{base_url}\"\ntimeout_secs = 5\n\n\
             [connectivity]\nprobe_interval_ms = 100\nprobe_timeout_ms = 500\n\n\
             [drafts]\npath = {:?}\n",
            drafts_path.display().to_string()
        );
        std::fs::write(&config_path, config).unwrap();
        TestEnv {
            dir,
            config_path,
            drafts_path,
        }
    }

    pub fn hh(&self) -> Command {
        let mut cmd = hh();
        cmd.env("HH_CONFIG", &self.config_path);
        cmd
    }

    /// Raw lines of the drafts file.
    pub fn draft_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.drafts_path)
            .unwrap_or_default()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Post a delivery job and return its id. Assumes it will be queued.
    pub fn post_draft(&self, title: &str) -> String {
        self.post(&["post", title, "-c", "delivery", "-b", "500", "-o", "json"])
    }

    /// Same as [`TestEnv::post_draft`] but forces offline for this command.
    pub fn post_draft_offline(&self, title: &str) -> String {
        self.post(&["post", title, "-c", "delivery", "-b", "500", "--offline", "-o", "json"])
    }

    fn post(&self, args: &[&str]) -> String {
        let output = self.hh().args(args).output().unwrap();
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["status"], "queued");
        json["job"]["id"].as_str().unwrap().to_string()
    }
}

/// The `hh` binary with a clean environment.
pub fn hh() -> Command {
    let mut cmd = cargo_bin_cmd!("hh");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("HH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Minimal HTTP backend answering every request with the same response.
pub struct FakeBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    pub fn start(status_line: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    continue;
                };
                // Connectivity probes connect and hang up without a request.
                let Some(request) = read_request(&mut stream) else {
                    continue;
                };
                seen.lock().unwrap().push(request);
                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        FakeBackend { base_url, requests }
    }

    /// Backend that accepts every posting as task 1.
    pub fn accepting() -> Self {
        Self::start(
            "HTTP/1.1 201 Created",
            r#"{"error":false,"message":"Task created","success":true,"data":{"id":1,"status":"open"}}"#,
        )
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(stream: &mut TcpStream) -> Option<String> {
    stream.set_read_timeout(Some(Duration::from_secs(5))).ok()?;
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        if request_complete(&request) {
            break;
        }
    }
    if request.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&request).into_owned())
    }
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    request.len() >= header_end + 4 + content_length
}
