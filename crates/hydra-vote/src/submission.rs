//! Finalized vote payload handed to a vote-ingestion service.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use hydra_core::constants::{SS58_ALPHABET, SS58_MAX_LEN, SS58_MIN_LEN};
use hydra_core::errors::VoteError;
use hydra_core::types::SubnetId;

use crate::vector::WeightVector;

static SS58_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^[{}]{{{},{}}}$",
        SS58_ALPHABET, SS58_MIN_LEN, SS58_MAX_LEN
    ))
    .unwrap()
});

/// Wire shape of one allocation line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightPayload {
    pub subnet_id: SubnetId,
    pub weight: f64,
}

/// A vote ready for hand-off. Only constructible from a valid vector.
///
/// The signature is carried opaquely; nothing here verifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSubmission {
    pub coldkey_address: String,
    pub signature: String,
    pub weights: Vec<WeightPayload>,
}

impl VoteSubmission {
    /// Build a submission, checking credentials before the weight sum.
    pub fn new(
        coldkey: &str,
        signature: &str,
        weights: &WeightVector,
        check_coldkey_format: bool,
    ) -> Result<Self, VoteError> {
        let coldkey = coldkey.trim();
        if coldkey.is_empty() {
            return Err(VoteError::MissingColdkey);
        }
        if check_coldkey_format && !is_ss58_shaped(coldkey) {
            return Err(VoteError::MalformedColdkey {
                coldkey: coldkey.to_string(),
            });
        }
        let signature = signature.trim();
        if signature.is_empty() {
            return Err(VoteError::MissingSignature);
        }
        weights.validate()?;

        Ok(Self {
            coldkey_address: coldkey.to_string(),
            signature: signature.to_string(),
            weights: weights
                .entries()
                .iter()
                .map(|e| WeightPayload {
                    subnet_id: e.subnet_id,
                    weight: e.weight,
                })
                .collect(),
        })
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|w| w.weight).sum()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// blake3 hex digest of the JSON payload, for log correlation.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}

/// Shape check only: base58 alphabet and substrate address length.
pub fn is_ss58_shaped(address: &str) -> bool {
    SS58_SHAPE.is_match(address)
}
