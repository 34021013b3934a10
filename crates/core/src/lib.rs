// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hh-core: Shared library for the HustleHub job posting client
//!
//! This crate provides the posting model, the validation rules, the guided
//! posting checks and the draft store used by the `hh` CLI. It performs no
//! network I/O.

pub mod clock;
pub mod draft;
pub mod error;
pub mod guide;
pub mod id;
pub mod job;
pub mod validate;

pub use clock::{ClockSource, ManualClock, SystemClock};
pub use draft::{DraftStore, JsonlDraftStore, MemoryDraftStore};
pub use error::{Error, Result};
pub use guide::{
    Answer, BudgetOption, Confirmation, GuideStep, GuideSummary, PostingGuide, Timeframe,
    WeightOption,
};
pub use job::{
    cancellation_penalty, late_penalty, JobCategory, JobPosting, Penalties, SubmittedJob,
};
pub use validate::{
    check_budget, check_weight, validate_all, RuleCheck, ValidationResult, MAX_WEIGHT_LIMIT,
    MINIMUM_PAY_LIMIT,
};
