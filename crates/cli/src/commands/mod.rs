// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod drafts;
pub mod guide;
pub mod penalty;
pub mod post;
pub mod sync;
pub mod validate;

use std::path::{Path, PathBuf};

use hh_core::JsonlDraftStore;
use serde::Serialize;

use crate::config::{resolve_config_path, Config};
use crate::error::Result;
use crate::sync::{Connectivity, ConnectivityMonitor, HttpSubmitter, TcpProbe};

/// Configuration for one invocation and where it was loaded from.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
}

impl Context {
    /// Resolve, load and validate the configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = resolve_config_path(explicit);
        let config = Config::load(&config_path)?;
        tracing::debug!("loaded config from {}", config_path.display());
        Ok(Context {
            config,
            config_path,
        })
    }

    pub fn open_drafts(&self) -> Result<JsonlDraftStore> {
        Ok(JsonlDraftStore::open(&self.config.drafts_path())?)
    }

    pub fn submitter(&self) -> Result<HttpSubmitter> {
        HttpSubmitter::new(&self.config.api)
    }

    /// A monitor probing the configured backend.
    pub fn monitor(&self, connectivity: Connectivity) -> Result<ConnectivityMonitor<TcpProbe>> {
        let (host, port) = self.config.api.host_port()?;
        let probe = TcpProbe::new(host, port, self.config.connectivity.probe_timeout());
        Ok(ConnectivityMonitor::new(
            probe,
            connectivity,
            self.config.connectivity.probe_interval(),
        ))
    }
}

/// Runtime for the async commands.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
