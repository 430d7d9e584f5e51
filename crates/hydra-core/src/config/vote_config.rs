use serde::{Deserialize, Serialize};

use super::defaults;

/// Weight-vector and submission configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteConfig {
    /// Tolerance for the sum-to-one check.
    pub sum_epsilon: f64,
    /// Subnet seeded into every new weight vector.
    pub default_subnet_id: u32,
    pub default_subnet_name: String,
    /// Reject coldkeys outside the SS58 alphabet and length range.
    pub check_coldkey_format: bool,
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            sum_epsilon: defaults::DEFAULT_SUM_EPSILON,
            default_subnet_id: defaults::DEFAULT_SUBNET_ID,
            default_subnet_name: defaults::DEFAULT_SUBNET_NAME.to_string(),
            check_coldkey_format: defaults::DEFAULT_CHECK_COLDKEY_FORMAT,
        }
    }
}
