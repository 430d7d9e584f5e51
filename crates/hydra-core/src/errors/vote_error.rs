use crate::types::SubnetId;

/// Weight-vector and vote-submission errors.
///
/// None of these are fatal: the session stays usable and further edits can
/// clear the condition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VoteError {
    #[error("subnet {subnet_id} is already in the weight vector")]
    DuplicateEntry { subnet_id: SubnetId },

    #[error("subnet {subnet_id} is not in the weight vector")]
    NotFound { subnet_id: SubnetId },

    #[error("cannot remove subnet {subnet_id}: a weight vector keeps at least one entry")]
    LastEntry { subnet_id: SubnetId },

    #[error("invalid subnet id: {raw:?}")]
    InvalidSubnetId { raw: String },

    #[error("subnet name must not be empty")]
    EmptyName,

    #[error("total weight must equal 1.0 (100%), current total: {total} (epsilon {epsilon})")]
    InvalidWeightSum { total: f64, epsilon: f64 },

    #[error("coldkey address is required")]
    MissingColdkey,

    #[error("malformed coldkey address: {coldkey:?}")]
    MalformedColdkey { coldkey: String },

    #[error("signature is required")]
    MissingSignature,

    #[error("vote session is closed")]
    SessionClosed,
}
