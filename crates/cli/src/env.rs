// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by `hh`.
//!
//! The variable names are generated by `build.rs` into [`vars`].

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    flag_is_one(vars::NO_COLOR)
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    flag_is_one(vars::COLOR)
}

/// Config file named by `HH_CONFIG`, ignoring an empty value.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(vars::HH_CONFIG)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

fn flag_is_one(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
