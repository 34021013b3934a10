// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hh_core::{DraftStore, SubmittedJob};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::{print_json, runtime, Context};
use crate::cli::OutputFormat;
use crate::display::format_report;
use crate::error::Result;
use crate::sync::{Connectivity, ReplayReport, ReplayStop, SyncCoordinator};

#[derive(Serialize)]
struct SyncOutput<'a> {
    online: bool,
    synced: &'a [SubmittedJob],
    remaining: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a ReplayStop>,
}

impl<'a> SyncOutput<'a> {
    fn offline(remaining: usize) -> Self {
        SyncOutput {
            online: false,
            synced: &[],
            remaining,
            stop: None,
        }
    }

    fn from_report(report: &'a ReplayReport) -> Self {
        SyncOutput {
            online: true,
            synced: &report.synced,
            remaining: report.remaining,
            stop: Some(&report.stop),
        }
    }
}

pub fn run(ctx: &Context, watch: bool, output: OutputFormat) -> Result<()> {
    let drafts = ctx.open_drafts()?;

    if ctx.config.offline {
        return print_offline(drafts.len()?, "offline mode is on", output);
    }

    let rt = runtime()?;
    if watch {
        rt.block_on(watch_loop(ctx, drafts, output))
    } else {
        rt.block_on(sync_once(ctx, drafts, output))
    }
}

async fn sync_once(ctx: &Context, drafts: impl DraftStore, output: OutputFormat) -> Result<()> {
    let connectivity = Connectivity::new(false);
    let online = ctx.monitor(connectivity.clone())?.probe_once().await;
    if !online {
        return print_offline(drafts.len()?, "backend unreachable", output);
    }

    let mut coordinator = SyncCoordinator::new(ctx.submitter()?, drafts, connectivity);
    let report = coordinator
        .on_connectivity_restored(&CancellationToken::new())
        .await?;

    match output {
        OutputFormat::Text => println!("{}", format_report(&report)),
        OutputFormat::Json => print_json(&SyncOutput::from_report(&report))?,
    }
    Ok(())
}

async fn watch_loop(ctx: &Context, drafts: impl DraftStore, output: OutputFormat) -> Result<()> {
    let connectivity = Connectivity::new(false);
    let monitor = ctx.monitor(connectivity.clone())?;
    let mut coordinator = SyncCoordinator::new(ctx.submitter()?, drafts, connectivity);

    let cancel = CancellationToken::new();
    let monitor_task = monitor.spawn(cancel.clone());
    let signal_task = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupted, stopping");
                cancel.cancel();
            }
        })
    };

    if output == OutputFormat::Text {
        eprintln!("Watching for connectivity; press Ctrl-C to stop");
    }
    let synced = coordinator.run(cancel.clone()).await;

    cancel.cancel();
    signal_task.abort();
    if let Err(e) = monitor_task.await {
        tracing::warn!("connectivity monitor ended abnormally: {}", e);
    }

    let synced = synced?;
    let remaining = coordinator.drafts().len()?;
    match output {
        OutputFormat::Text => println!("Synced {synced} drafts, {remaining} remaining"),
        OutputFormat::Json => print_json(&serde_json::json!({
            "synced_count": synced,
            "remaining": remaining,
        }))?,
    }
    Ok(())
}

fn print_offline(remaining: usize, reason: &str, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => println!("Not syncing: {reason}; {remaining} drafts waiting"),
        OutputFormat::Json => print_json(&SyncOutput::offline(remaining))?,
    }
    Ok(())
}
