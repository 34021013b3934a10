// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission abstraction for the backend task-creation endpoint.
//!
//! Provides a trait-based submission layer that enables:
//! - Real HTTP submission for production
//! - Mock submitters for unit testing

use std::future::Future;
use std::pin::Pin;

use hh_core::{JobPosting, SubmittedJob};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Path of the task-creation endpoint, relative to the API base URL.
pub const CREATE_TASK_PATH: &str = "/api/tasks/create";

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The server could not be reached (DNS, connect, timeout, reset).
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    /// The server answered but refused the posting.
    #[error("server rejected posting ({code}): {body}")]
    ServerRejected { code: u16, body: String },

    /// The server answered with something we cannot read.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type for submissions.
pub type SubmissionResult<T> = std::result::Result<T, SubmissionError>;

/// Something that can publish a posting to the backend.
///
/// This trait abstracts over the actual transport, allowing for easy testing
/// with mock implementations.
pub trait Submitter: Send + Sync {
    /// Submit `job` and return the server's view of it.
    fn submit<'a>(
        &'a self,
        job: &'a JobPosting,
    ) -> Pin<Box<dyn Future<Output = SubmissionResult<SubmittedJob>> + Send + 'a>>;
}

/// Body of `POST /api/tasks/create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCreateRequest<'a> {
    pub title: &'a str,
    pub task_description: &'a str,
    pub category: &'a str,
    pub store_service_location: &'a str,
    pub delivery_location: &'a str,
    pub budget_kes: f64,
    pub due_date: String,
}

impl<'a> TaskCreateRequest<'a> {
    pub fn from_job(job: &'a JobPosting) -> Self {
        TaskCreateRequest {
            title: &job.title,
            task_description: &job.description,
            category: job.category.as_str(),
            store_service_location: job.store_location.as_deref().unwrap_or_default(),
            delivery_location: job.delivery_location.as_deref().unwrap_or_default(),
            budget_kes: job.budget,
            due_date: job.due.to_rfc3339(),
        }
    }
}

/// Response envelope used by every backend endpoint.
#[derive(Debug, Deserialize)]
struct TaskCreateResponse {
    #[serde(default)]
    message: String,
    #[serde(default)]
    success: bool,
    data: Option<CreatedTask>,
}

#[derive(Debug, Deserialize)]
struct CreatedTask {
    id: serde_json::Value,
    #[serde(default)]
    status: Option<String>,
}

/// Turn an HTTP status and body into a submission outcome for `job`.
pub fn classify_response(
    job: &JobPosting,
    status: u16,
    body: &str,
) -> SubmissionResult<SubmittedJob> {
    if !(200..300).contains(&status) {
        return Err(SubmissionError::ServerRejected {
            code: status,
            body: body.to_string(),
        });
    }

    let response: TaskCreateResponse = serde_json::from_str(body)
        .map_err(|e| SubmissionError::MalformedResponse(e.to_string()))?;

    if !response.success {
        return Err(SubmissionError::ServerRejected {
            code: status,
            body: response.message,
        });
    }

    let data = response
        .data
        .ok_or_else(|| SubmissionError::MalformedResponse("missing data".to_string()))?;

    let server_id = match data.id {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) if !s.is_empty() => s,
        other => {
            return Err(SubmissionError::MalformedResponse(format!(
                "unexpected task id: {other}"
            )))
        }
    };

    Ok(SubmittedJob {
        server_id,
        status: data.status.unwrap_or_else(|| "open".to_string()),
        job: job.clone().into_synced(),
    })
}

/// HTTP submitter using reqwest.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpSubmitter {
    /// Create a submitter for the configured backend.
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(api.timeout())
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(HttpSubmitter {
            client,
            endpoint: format!("{}{}", api.base_url.trim_end_matches('/'), CREATE_TASK_PATH),
            token: api.token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    fn submit<'a>(
        &'a self,
        job: &'a JobPosting,
    ) -> Pin<Box<dyn Future<Output = SubmissionResult<SubmittedJob>> + Send + 'a>> {
        Box::pin(async move {
            let mut request = self
                .client
                .post(&self.endpoint)
                .json(&TaskCreateRequest::from_job(job));
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| SubmissionError::NetworkUnreachable(e.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| SubmissionError::NetworkUnreachable(e.to_string()))?;

            classify_response(job, status, &body)
        })
    }
}
