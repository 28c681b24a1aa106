//! Hand-off of completed applications
//!
//! The wizard produces a [`SubmittedApplication`](crate::state::SubmittedApplication);
//! an [`ApplicationSink`] decides where it goes and what the applicant is told.

mod notice;
mod traits;

pub use notice::NoticeSink;
pub use traits::{ApplicationSink, SubmissionReceipt};

#[cfg(test)]
pub use traits::MockApplicationSink;
