// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submit-or-draft flow and draft replay.

use futures_util::StreamExt;
use hh_core::id::{generate_unique_id, JOB_PREFIX};
use hh_core::{ClockSource, DraftStore, JobPosting, SubmittedJob, SystemClock};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::connectivity::{Connectivity, ConnectivityEvent};
use super::submitter::{SubmissionError, Submitter};
use crate::error::Result;

/// What happened to a posting handed to [`SyncCoordinator::submit_or_draft`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server accepted it.
    Submitted(SubmittedJob),
    /// It was stored as a draft and will be sent on the next replay.
    Queued(JobPosting),
}

impl SubmitOutcome {
    pub fn is_queued(&self) -> bool {
        matches!(self, SubmitOutcome::Queued(_))
    }

    /// The posting, as submitted or as stored.
    pub fn job(&self) -> &JobPosting {
        match self {
            SubmitOutcome::Submitted(submitted) => &submitted.job,
            SubmitOutcome::Queued(job) => job,
        }
    }
}

/// Why a replay stopped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ReplayStop {
    /// Every draft was sent.
    Completed,
    /// A draft failed; it and everything after it stay queued.
    Failed {
        id: String,
        #[serde(serialize_with = "serialize_display")]
        error: SubmissionError,
    },
    /// Cancelled between drafts.
    Cancelled,
}

fn serialize_display<S: serde::Serializer>(
    error: &SubmissionError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Outcome of one replay pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub synced: Vec<SubmittedJob>,
    /// Drafts left in the store afterwards.
    pub remaining: usize,
    pub stop: ReplayStop,
}

impl ReplayReport {
    pub fn synced_count(&self) -> usize {
        self.synced.len()
    }
}

/// Routes postings to the server when reachable and to the draft store
/// otherwise, and replays drafts once connectivity returns.
pub struct SyncCoordinator<S: Submitter, D: DraftStore, C: ClockSource = SystemClock> {
    submitter: S,
    drafts: D,
    connectivity: Connectivity,
    clock: C,
}

impl<S: Submitter, D: DraftStore> SyncCoordinator<S, D, SystemClock> {
    pub fn new(submitter: S, drafts: D, connectivity: Connectivity) -> Self {
        SyncCoordinator::with_clock(submitter, drafts, connectivity, SystemClock)
    }
}

impl<S: Submitter, D: DraftStore, C: ClockSource> SyncCoordinator<S, D, C> {
    pub fn with_clock(submitter: S, drafts: D, connectivity: Connectivity, clock: C) -> Self {
        SyncCoordinator {
            submitter,
            drafts,
            connectivity,
            clock,
        }
    }

    pub fn drafts(&self) -> &D {
        &self.drafts
    }

    pub fn drafts_mut(&mut self) -> &mut D {
        &mut self.drafts
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    /// Submit `job` if online, otherwise store it as a draft.
    ///
    /// A failed submission also stores the draft. Only draft store failures
    /// are returned as errors.
    pub async fn submit_or_draft(&mut self, job: JobPosting) -> Result<SubmitOutcome> {
        let job = self.assign_id(job)?;

        if !self.connectivity.is_online() {
            tracing::info!("offline, saving {} as draft", job.id);
            return self.queue(job);
        }

        match self.submitter.submit(&job).await {
            Ok(submitted) => {
                tracing::info!("submitted {} as task {}", job.id, submitted.server_id);
                Ok(SubmitOutcome::Submitted(submitted))
            }
            Err(e) => {
                log_failure(&job.id, &e);
                self.queue(job)
            }
        }
    }

    /// Send stored drafts oldest first, stopping at the first failure.
    ///
    /// Each sent draft is removed before the next is attempted. `cancel` is
    /// checked between drafts.
    pub async fn on_connectivity_restored(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<ReplayReport> {
        let drafts = self.drafts.list_drafts()?;
        tracing::debug!("replaying {} drafts", drafts.len());

        let mut synced = Vec::new();
        let mut stop = ReplayStop::Completed;

        for draft in drafts {
            if cancel.is_cancelled() {
                stop = ReplayStop::Cancelled;
                break;
            }
            match self.submitter.submit(&draft).await {
                Ok(submitted) => {
                    self.drafts.remove_draft(&draft.id)?;
                    tracing::info!("synced draft {} as task {}", draft.id, submitted.server_id);
                    synced.push(submitted);
                }
                Err(e) => {
                    log_failure(&draft.id, &e);
                    stop = ReplayStop::Failed {
                        id: draft.id,
                        error: e,
                    };
                    break;
                }
            }
        }

        let remaining = self.drafts.len()?;
        if !synced.is_empty() {
            tracing::info!("Synced {} drafts, {} remaining", synced.len(), remaining);
        }

        Ok(ReplayReport {
            synced,
            remaining,
            stop,
        })
    }

    /// Replay drafts every time connectivity comes back, until cancelled.
    ///
    /// Returns the number of drafts synced over the whole run.
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<usize> {
        let mut events = Box::pin(self.connectivity.events());
        let mut was_online = false;
        let mut total = 0;

        loop {
            let event = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                event = events.next() => match event {
                    Some(event) => event,
                    None => break,
                },
            };

            let online = event == ConnectivityEvent::Online;
            let restored = online && !was_online;
            was_online = online;

            if restored && !self.drafts.is_empty()? {
                let report = self.on_connectivity_restored(&cancel).await?;
                total += report.synced_count();
                if report.stop == ReplayStop::Cancelled {
                    break;
                }
            }
        }

        Ok(total)
    }

    fn assign_id(&self, mut job: JobPosting) -> Result<JobPosting> {
        job.check_complete()?;
        if job.id.is_empty() {
            let existing = self.drafts.list_drafts()?;
            job.id = generate_unique_id(JOB_PREFIX, &job.title, &self.clock.now(), |id| {
                existing.iter().any(|d| d.id == id)
            });
        }
        Ok(job)
    }

    fn queue(&mut self, job: JobPosting) -> Result<SubmitOutcome> {
        let stored = self.drafts.save_draft(job)?;
        Ok(SubmitOutcome::Queued(stored))
    }
}

fn log_failure(id: &str, error: &SubmissionError) {
    match error {
        SubmissionError::ServerRejected { code, .. } => {
            tracing::warn!("server rejected {} with status {}, keeping draft", id, code)
        }
        other => tracing::warn!("submitting {} failed: {}, keeping draft", id, other),
    }
}
