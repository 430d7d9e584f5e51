use serde::{Deserialize, Serialize};

use hydra_core::types::{format_percent, SubnetId};

/// One subnet's share of a voter's allocation.
///
/// `weight` is not clamped: it may hold negative or >1 values while the
/// voter is still editing. Only the sum is checked, at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    pub subnet_id: SubnetId,
    pub name: String,
    pub weight: f64,
}

impl WeightEntry {
    pub fn new(subnet_id: SubnetId, name: impl Into<String>, weight: f64) -> Self {
        Self {
            subnet_id,
            name: name.into(),
            weight,
        }
    }

    /// Display share, e.g. `"50.0%"`.
    pub fn percent(&self) -> String {
        format_percent(self.weight)
    }
}
