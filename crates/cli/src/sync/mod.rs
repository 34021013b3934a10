// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Job posting sync.
//!
//! Decides between sending a posting now and keeping it as a draft, and
//! replays drafts once the backend is reachable again.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Coordinator    │────►│  Submitter  │────►│   Backend   │
//! │(SyncCoordinator) │◄────│   (trait)   │◄────│    (HTTP)   │
//! └──────────────────┘     └─────────────┘     └─────────────┘
//!     │          ▲
//!     ▼          │ events
//! ┌─────────┐  ┌──────────────┐     ┌─────────────┐
//! │ Drafts  │  │ Connectivity │◄────│   Monitor   │  (TCP probe)
//! │ (JSONL) │  │   (watch)    │     └─────────────┘
//! └─────────┘  └──────────────┘
//! ```
//!
//! # Features
//!
//! - Immediate submission when online, draft when offline or on failure
//! - FIFO replay that stops at the first failing draft
//! - Cancellation between drafts, never mid-request
//! - Injectable submitter, draft store, connectivity and clock for testing

mod connectivity;
mod coordinator;
mod submitter;

pub use connectivity::{Connectivity, ConnectivityEvent, ConnectivityMonitor, Probe, TcpProbe};
pub use coordinator::{ReplayReport, ReplayStop, SubmitOutcome, SyncCoordinator};
pub use submitter::{
    classify_response, HttpSubmitter, SubmissionError, SubmissionResult, Submitter,
    TaskCreateRequest, CREATE_TASK_PATH,
};

#[cfg(test)]
mod test_helpers;
