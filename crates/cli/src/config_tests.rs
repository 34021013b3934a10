// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.offline);
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.connectivity.probe_interval_ms, 5_000);
    assert_eq!(config.connectivity.probe_timeout_ms, 2_000);
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "offline = true\n\n[api]\nbase_url = \"https://api.example.com\"\ntoken = \"abc\"\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert!(config.offline);
    assert_eq!(config.api.base_url, "https://api.example.com");
    assert_eq!(config.api.token.as_deref(), Some("abc"));
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.connectivity, ConnectivityConfig::default());
}

#[test]
fn save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.api.timeout_secs = 5;
    config.drafts.path = Some(temp.path().join("drafts.jsonl"));
    config.save(&path).unwrap();

    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn malformed_file_names_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "offline = \n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[parameterized(
    bad_scheme = { "[api]\nbase_url = \"ftp://example.com\"\n" },
    zero_timeout = { "[api]\ntimeout_secs = 0\n" },
    zero_interval = { "[connectivity]\nprobe_interval_ms = 0\n" },
)]
fn invalid_values_rejected(content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, content).unwrap();
    assert!(matches!(Config::load(&path), Err(Error::Config(_))));
}

#[parameterized(
    http_default_port = { "http://api.example.com", "api.example.com", 80 },
    https_default_port = { "https://api.example.com/v1", "api.example.com", 443 },
    explicit_port = { "http://127.0.0.1:8000", "127.0.0.1", 8000 },
    ipv6_loopback = { "http://[::1]:8000", "::1", 8000 },
    ipv6_default_port = { "https://[2001:db8::1]/api", "2001:db8::1", 443 },
)]
fn host_port_from_base_url(base_url: &str, host: &str, port: u16) {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    assert_eq!(api.host_port().unwrap(), (host.to_string(), port));
}

#[test]
fn drafts_path_prefers_configured() {
    let mut config = Config::default();
    assert!(config.drafts_path().ends_with("hustlehub/drafts.jsonl"));

    config.drafts.path = Some(PathBuf::from("/tmp/my-drafts.jsonl"));
    assert_eq!(config.drafts_path(), PathBuf::from("/tmp/my-drafts.jsonl"));
}

#[test]
fn explicit_config_path_wins() {
    let explicit = PathBuf::from("/etc/hh.toml");
    assert_eq!(resolve_config_path(Some(&explicit)), explicit);
}

#[test]
fn ipv6_host_resolves_for_probe() {
    use std::net::ToSocketAddrs;

    let api = ApiConfig {
        base_url: "http://[::1]:8000".to_string(),
        ..ApiConfig::default()
    };
    let (host, port) = api.host_port().unwrap();
    let addr = (host.as_str(), port).to_socket_addrs().unwrap().next().unwrap();
    assert!(addr.is_ipv6());
    assert_eq!(addr.port(), 8000);
}
