//! Local sink: records the application in the log and acknowledges it

use super::traits::{ApplicationSink, SubmissionReceipt};
use crate::state::SubmittedApplication;
use anyhow::{Context, Result};
use async_trait::async_trait;

const RECEIPT_TITLE: &str = "Application Submitted!";
const RECEIPT_MESSAGE: &str = "Your SRED pre-approval application has been submitted for government review. You'll receive a Certificate ID within 5-10 business days.";

/// Sink with no remote backend
#[derive(Debug, Default)]
pub struct NoticeSink;

impl NoticeSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ApplicationSink for NoticeSink {
    async fn submit(&mut self, application: &SubmittedApplication) -> Result<SubmissionReceipt> {
        let body = serde_json::to_string(application).context("Failed to encode application")?;
        tracing::info!(id = %application.id(), application = %body, "application received");

        Ok(SubmissionReceipt {
            title: RECEIPT_TITLE.to_string(),
            message: RECEIPT_MESSAGE.to_string(),
            reference: application.id().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{test_support::valid_draft, ApplicationPayload};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_receipt_references_application_id() {
        let payload = ApplicationPayload::try_from(&valid_draft()).expect("valid draft");
        let application = SubmittedApplication::new(payload);
        let mut sink = NoticeSink::new();

        let receipt = tokio_test::block_on(sink.submit(&application)).expect("submit");

        assert_eq!(receipt.title, "Application Submitted!");
        assert!(receipt.message.contains("Certificate ID"));
        assert_eq!(receipt.reference, application.id().to_string());
    }
}
