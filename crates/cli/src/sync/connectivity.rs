// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Network reachability tracking.
//!
//! [`Connectivity`] holds the latest known state and hands out event streams.
//! [`ConnectivityMonitor`] keeps that state fresh by probing the backend on
//! an interval until cancelled.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures_util::Stream;
use serde::Serialize;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A change in reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityEvent {
    Online,
    Offline,
}

impl From<bool> for ConnectivityEvent {
    fn from(online: bool) -> Self {
        if online {
            ConnectivityEvent::Online
        } else {
            ConnectivityEvent::Offline
        }
    }
}

/// Shared reachability state. Clones observe the same state.
#[derive(Debug, Clone)]
pub struct Connectivity {
    tx: Arc<watch::Sender<bool>>,
}

impl Connectivity {
    pub fn new(online: bool) -> Self {
        let (tx, _rx) = watch::channel(online);
        Connectivity { tx: Arc::new(tx) }
    }

    pub fn is_online(&self) -> bool {
        *self.tx.borrow()
    }

    /// Record the current state. Returns true if it changed.
    pub fn set_online(&self, online: bool) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == online {
                false
            } else {
                *current = online;
                true
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Stream of reachability events, starting with the current state.
    ///
    /// Each call returns an independent stream. Rapid flips may be coalesced
    /// into the latest state.
    pub fn events(&self) -> impl Stream<Item = ConnectivityEvent> + Send + 'static {
        let mut rx = self.tx.subscribe();
        rx.mark_changed();
        futures_util::stream::unfold(rx, |mut rx| async move {
            rx.changed().await.ok()?;
            let online = *rx.borrow_and_update();
            Some((ConnectivityEvent::from(online), rx))
        })
    }
}

impl Default for Connectivity {
    fn default() -> Self {
        Connectivity::new(false)
    }
}

/// A reachability check.
pub trait Probe: Send + Sync {
    fn probe(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>>;
}

/// Probes by opening a TCP connection to the backend.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        TcpProbe {
            host: host.into(),
            port,
            timeout,
        }
    }
}

impl Probe for TcpProbe {
    fn probe(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        Box::pin(async move {
            let connect = TcpStream::connect((self.host.as_str(), self.port));
            match tokio::time::timeout(self.timeout, connect).await {
                Ok(Ok(_)) => true,
                Ok(Err(e)) => {
                    tracing::debug!("probe {}:{} failed: {}", self.host, self.port, e);
                    false
                }
                Err(_) => {
                    tracing::debug!("probe {}:{} timed out", self.host, self.port);
                    false
                }
            }
        })
    }
}

/// Periodically probes and publishes the result to a [`Connectivity`].
pub struct ConnectivityMonitor<P: Probe> {
    probe: P,
    connectivity: Connectivity,
    interval: Duration,
}

impl<P: Probe> ConnectivityMonitor<P> {
    pub fn new(probe: P, connectivity: Connectivity, interval: Duration) -> Self {
        ConnectivityMonitor {
            probe,
            connectivity,
            interval,
        }
    }

    /// Probe once and publish the result.
    pub async fn probe_once(&self) -> bool {
        let online = self.probe.probe().await;
        if self.connectivity.set_online(online) {
            tracing::info!("connectivity changed: {}", if online { "online" } else { "offline" });
        }
        online
    }

    /// Probe on every interval until `cancel` fires.
    pub async fn run(&self, cancel: CancellationToken) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = self.probe_once() => {}
            }
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
        tracing::debug!("connectivity monitor stopped");
    }
}

impl<P: Probe + 'static> ConnectivityMonitor<P> {
    /// Run the monitor on its own task.
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(cancel).await })
    }
}
