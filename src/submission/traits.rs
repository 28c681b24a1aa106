//! Trait abstraction for the submission target to enable mocking in tests

use crate::state::SubmittedApplication;
use anyhow::Result;
use async_trait::async_trait;

/// What the applicant is shown once an application has been accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub title: String,
    pub message: String,
    /// Reference the applicant can quote later
    pub reference: String,
}

/// Destination for submitted applications
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationSink: Send + Sync {
    /// Accept a validated application
    async fn submit(&mut self, application: &SubmittedApplication) -> Result<SubmissionReceipt>;
}
