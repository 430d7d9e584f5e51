//! # hydra-vote
//!
//! Weight-vector voting model for Hydra subnet liquidity allocation.
//! A voter distributes influence across subnets; the allocation may only be
//! submitted once the weights sum to 1.0 within the configured tolerance.
//!
//! ## Modules
//!
//! - `parse` — lenient text-to-number coercion for form inputs
//! - `entry` — `WeightEntry`, one subnet's share
//! - `vector` — `WeightVector` with add/update/remove and the sum check
//! - `submission` — `VoteSubmission` payload, coldkey checks, digest
//! - `sink` — `SubmissionSink` hand-off point for finalized votes
//! - `session` — `VoteSession`, the editor state behind the vote form

pub mod entry;
pub mod parse;
pub mod session;
pub mod sink;
pub mod submission;
pub mod vector;

pub use entry::WeightEntry;
pub use parse::{parse_subnet_id, parse_weight};
pub use session::VoteSession;
pub use sink::{MemorySink, SubmissionSink, TracingSink};
pub use submission::{VoteSubmission, WeightPayload};
pub use vector::{WeightSnapshot, WeightVector};
