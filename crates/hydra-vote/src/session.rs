//! VoteSession — the editor state behind the vote form.
//!
//! One owner, one writer: every mutation runs to completion on the caller's
//! thread. A session is discarded once it closes; nothing is persisted.

use hydra_core::config::VoteConfig;
use hydra_core::errors::{HydraError, HydraResult, VoteError};
use hydra_core::tracing_setup::events;
use hydra_core::types::{format_percent, SubnetId};
use hydra_core::vote_span;

use crate::parse::parse_subnet_id;
use crate::sink::SubmissionSink;
use crate::submission::VoteSubmission;
use crate::vector::{WeightSnapshot, WeightVector};

#[derive(Debug, Clone)]
pub struct VoteSession {
    pub session_id: String,
    pub coldkey: String,
    pub signature: String,
    /// Pending "add subnet" row, as typed.
    pub new_subnet_id: String,
    pub new_subnet_name: String,
    weights: WeightVector,
    check_coldkey_format: bool,
    open: bool,
}

impl VoteSession {
    pub fn new(config: &VoteConfig) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            coldkey: String::new(),
            signature: String::new(),
            new_subnet_id: String::new(),
            new_subnet_name: String::new(),
            weights: WeightVector::from_config(config),
            check_coldkey_format: config.check_coldkey_format,
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn snapshot(&self) -> WeightSnapshot {
        self.weights.snapshot()
    }

    /// Whether the pending row has both fields filled in.
    pub fn can_add_pending(&self) -> bool {
        !self.new_subnet_id.trim().is_empty() && !self.new_subnet_name.trim().is_empty()
    }

    /// Add the pending row. Inputs are cleared only when the add succeeds.
    pub fn add_pending_entry(&mut self) -> Result<SubnetId, VoteError> {
        let _span = vote_span!(self.session_id, "add").entered();
        self.ensure_open()?;
        let subnet_id = parse_subnet_id(&self.new_subnet_id)?;
        self.weights.add_entry(subnet_id, &self.new_subnet_name)?;
        self.new_subnet_id.clear();
        self.new_subnet_name.clear();
        Ok(subnet_id)
    }

    pub fn add_entry(&mut self, subnet_id: SubnetId, name: &str) -> Result<(), VoteError> {
        let _span = vote_span!(self.session_id, "add").entered();
        self.ensure_open()?;
        self.weights.add_entry(subnet_id, name)
    }

    /// Weight edit from raw form input.
    pub fn update_weight(&mut self, subnet_id: SubnetId, raw: &str) -> Result<f64, VoteError> {
        let _span = vote_span!(self.session_id, "update").entered();
        self.ensure_open()?;
        self.weights.update_weight(subnet_id, raw)
    }

    pub fn remove_entry(&mut self, subnet_id: SubnetId) -> Result<(), VoteError> {
        let _span = vote_span!(self.session_id, "remove").entered();
        self.ensure_open()?;
        self.weights.remove_entry(subnet_id).map(|_| ())
    }

    /// Gate for the submit control. Applies the same checks as `submit`.
    pub fn can_submit(&self) -> bool {
        self.open && self.build_submission().is_ok()
    }

    /// Blocking warning shown while the total is off target.
    pub fn warning(&self) -> Option<String> {
        if self.weights.is_valid_for_submission() {
            None
        } else {
            Some(format!(
                "Total weight must equal 1.0 (100%). Current total: {}",
                format_percent(self.weights.total_weight())
            ))
        }
    }

    /// Hand the vote to `sink` and close the session.
    ///
    /// Any failure leaves the session open and unchanged. A closed session
    /// rejects every edit and submission with `SessionClosed`.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> HydraResult<VoteSubmission> {
        let _span = vote_span!(self.session_id, "submit").entered();
        self.ensure_open()?;
        let submission = self.build_submission().map_err(|e| {
            events::submission_blocked(&e.to_string(), self.weights.total_weight());
            HydraError::from(e)
        })?;
        sink.submit(&submission)?;
        self.close();
        Ok(submission)
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    fn ensure_open(&self) -> Result<(), VoteError> {
        if self.open {
            Ok(())
        } else {
            Err(VoteError::SessionClosed)
        }
    }

    fn build_submission(&self) -> Result<VoteSubmission, VoteError> {
        VoteSubmission::new(
            &self.coldkey,
            &self.signature,
            &self.weights,
            self.check_coldkey_format,
        )
    }
}

impl Default for VoteSession {
    fn default() -> Self {
        Self::new(&VoteConfig::default())
    }
}
