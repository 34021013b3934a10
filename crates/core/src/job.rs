// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Job posting types.
//!
//! A [`JobPosting`] is either a draft held in a draft store (`needs_sync`
//! set) or has been submitted and carries a server-assigned identifier as a
//! [`SubmittedJob`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Share of the budget charged when a requester cancels a posting.
pub const CANCELLATION_PENALTY_PERCENTAGE: f64 = 10.0;
/// Share of the budget charged for late completion.
pub const LATE_PENALTY_PERCENTAGE: f64 = 5.0;
/// Multiplier applied to the cancellation penalty once a worker accepted.
pub const ACCEPTED_PENALTY_MULTIPLIER: f64 = 1.5;

/// Kind of work requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    /// Buy items and bring them to the requester.
    Shopping,
    /// Carry a parcel from pickup to drop-off.
    Delivery,
    /// Collect answers from people in a target area.
    Survey,
}

impl JobCategory {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::Shopping => "shopping",
            JobCategory::Delivery => "delivery",
            JobCategory::Survey => "survey",
        }
    }

    /// Whether postings of this kind involve carrying goods.
    pub fn carries_weight(&self) -> bool {
        matches!(self, JobCategory::Shopping | JobCategory::Delivery)
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "shopping" => Ok(JobCategory::Shopping),
            "delivery" => Ok(JobCategory::Delivery),
            "survey" => Ok(JobCategory::Survey),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// A job posting being created by a requester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Locally generated identifier. Empty until assigned.
    pub id: String,
    /// Short headline shown to workers.
    pub title: String,
    /// Free-form details.
    #[serde(default)]
    pub description: String,
    /// Kind of work.
    pub category: JobCategory,
    /// Offered pay in KES.
    pub budget: f64,
    /// Heaviest load the worker may have to carry, in kg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_limit: Option<f64>,
    /// Deadline for completion.
    pub due: DateTime<Utc>,
    /// Where goods are bought or collected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_location: Option<String>,
    /// Where goods are dropped off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub needs_sync: bool,
    /// When the posting entered the draft store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_created_at: Option<DateTime<Utc>>,
    /// Set once a worker has taken the job.
    #[serde(default)]
    pub worker_accepted: bool,
}

impl JobPosting {
    /// Creates a posting with no identifier and no optional fields.
    pub fn new(
        title: impl Into<String>,
        category: JobCategory,
        budget: f64,
        due: DateTime<Utc>,
    ) -> Self {
        JobPosting {
            id: String::new(),
            title: title.into(),
            description: String::new(),
            category,
            budget,
            weight_limit: None,
            due,
            store_location: None,
            delivery_location: None,
            is_draft: false,
            needs_sync: false,
            draft_created_at: None,
            worker_accepted: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_weight_limit(mut self, kg: f64) -> Self {
        self.weight_limit = Some(kg);
        self
    }

    pub fn with_store_location(mut self, location: impl Into<String>) -> Self {
        self.store_location = Some(location.into());
        self
    }

    pub fn with_delivery_location(mut self, location: impl Into<String>) -> Self {
        self.delivery_location = Some(location.into());
        self
    }

    /// Marks the posting as a draft awaiting sync, stamped at `now`.
    pub fn into_draft(mut self, now: DateTime<Utc>) -> Self {
        self.is_draft = true;
        self.needs_sync = true;
        self.draft_created_at = Some(now);
        self
    }

    /// Clears the draft markers once the server has accepted the posting.
    pub fn into_synced(mut self) -> Self {
        self.is_draft = false;
        self.needs_sync = false;
        self.draft_created_at = None;
        self
    }

    /// Checks the fields every posting needs before it can leave the device.
    pub fn check_complete(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(Error::InvalidInput(format!(
                "budget must be a non-negative amount, got {}",
                self.budget
            )));
        }
        if let Some(kg) = self.weight_limit {
            if !kg.is_finite() || kg < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "weight limit must be a non-negative amount, got {kg}"
                )));
            }
        }
        Ok(())
    }
}

/// A posting the server has accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedJob {
    /// Identifier assigned by the server.
    pub server_id: String,
    /// Status reported by the server at creation (e.g. "open").
    pub status: String,
    /// The posting as it was sent, with draft markers cleared.
    pub job: JobPosting,
}

/// Penalty charged to the requester for cancelling `job`.
///
/// 10% of the budget, half again once a worker has accepted.
pub fn cancellation_penalty(job: &JobPosting) -> f64 {
    Penalties::for_budget(job.budget, job.worker_accepted).cancellation
}

/// Penalty deducted from the worker's pay for completing `job` late.
pub fn late_penalty(job: &JobPosting) -> f64 {
    Penalties::for_budget(job.budget, job.worker_accepted).late
}

/// Both penalties for a budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Penalties {
    pub budget: f64,
    pub worker_accepted: bool,
    pub cancellation: f64,
    pub late: f64,
}

impl Penalties {
    pub fn for_budget(budget: f64, worker_accepted: bool) -> Self {
        let base = budget * (CANCELLATION_PENALTY_PERCENTAGE / 100.0);
        let cancellation = if worker_accepted {
            base * ACCEPTED_PENALTY_MULTIPLIER
        } else {
            base
        };
        Penalties {
            budget,
            worker_accepted,
            cancellation,
            late: budget * (LATE_PENALTY_PERCENTAGE / 100.0),
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
