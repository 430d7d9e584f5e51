//! Hand-off point for finalized votes.
//!
//! No ingestion service exists yet; `TracingSink` records the vote as a
//! structured log event and `MemorySink` keeps it for inspection.

use hydra_core::errors::HydraResult;
use hydra_core::tracing_setup::events;

use crate::submission::VoteSubmission;

/// Receives a finalized submission.
pub trait SubmissionSink {
    fn submit(&mut self, submission: &VoteSubmission) -> HydraResult<()>;
}

/// Logs each submission through `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn submit(&mut self, submission: &VoteSubmission) -> HydraResult<()> {
        let digest = submission.digest()?;
        events::vote_submitted(
            &submission.coldkey_address,
            submission.weights.len(),
            &digest,
        );
        let payload = submission.to_json()?;
        tracing::debug!(payload = %payload, "vote payload");
        Ok(())
    }
}

/// Collects submissions in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub submissions: Vec<VoteSubmission>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionSink for MemorySink {
    fn submit(&mut self, submission: &VoteSubmission) -> HydraResult<()> {
        self.submissions.push(submission.clone());
        Ok(())
    }
}
