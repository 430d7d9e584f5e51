//! Structured log events for weight-vector edits and submissions.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::types::SubnetId;

pub fn entry_added(subnet_id: SubnetId, name: &str, weight: f64) {
    tracing::debug!(
        event = "entry_added",
        subnet_id = subnet_id,
        name = %name,
        weight = weight,
        "weight entry added"
    );
}

pub fn entry_removed(subnet_id: SubnetId, remaining: usize) {
    tracing::debug!(
        event = "entry_removed",
        subnet_id = subnet_id,
        remaining = remaining,
        "weight entry removed"
    );
}

pub fn weight_updated(subnet_id: SubnetId, old: f64, new: f64) {
    tracing::debug!(
        event = "weight_updated",
        subnet_id = subnet_id,
        old = old,
        new = new,
        "weight updated"
    );
}

/// Submission refused; the session stays open for further edits.
pub fn submission_blocked(reason: &str, total: f64) {
    tracing::warn!(
        event = "submission_blocked",
        reason = %reason,
        total = total,
        "vote submission blocked"
    );
}

pub fn vote_submitted(coldkey: &str, entries: usize, digest: &str) {
    tracing::info!(
        event = "vote_submitted",
        coldkey = %coldkey,
        entries = entries,
        digest = %digest,
        "vote submitted"
    );
}

pub fn positions_sampled(subnet_id: SubnetId, count: usize) {
    tracing::debug!(
        event = "positions_sampled",
        subnet_id = subnet_id,
        count = count,
        "liquidity positions sampled"
    );
}
