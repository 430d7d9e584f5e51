//! `WeightVector` — a voter's allocation across subnets.
//!
//! Entries keep insertion order for display and are unique by subnet id.
//! The vector never drops below one entry. Whether the allocation sums to
//! 1.0 is checked on demand, never enforced during edits.
//!
//! # Examples
//!
//! ```
//! use hydra_vote::WeightVector;
//!
//! let mut weights = WeightVector::new();
//! weights.add_entry(8, "Subnet 8 - Time Series").unwrap();
//! weights.set_weight(8, 0.5).unwrap();
//! weights.set_weight(1, 0.5).unwrap();
//! assert!(weights.is_valid_for_submission());
//! ```

use serde::{Deserialize, Serialize};

use hydra_core::config::VoteConfig;
use hydra_core::constants::TARGET_WEIGHT_SUM;
use hydra_core::errors::VoteError;
use hydra_core::tracing_setup::events;
use hydra_core::types::{format_percent, is_valid_subnet_id, SubnetId};

use crate::entry::WeightEntry;
use crate::parse::{coerce_weight, parse_weight};

/// Ordered, id-unique collection of weight entries.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    entries: Vec<WeightEntry>,
    epsilon: f64,
}

/// Immutable view handed to presentation code after each edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSnapshot {
    pub entries: Vec<WeightEntry>,
    pub total: f64,
    pub valid: bool,
    pub can_remove: bool,
}

impl WeightVector {
    /// A vector holding the default subnet at full weight.
    pub fn new() -> Self {
        Self::from_config(&VoteConfig::default())
    }

    /// A vector seeded from the `[vote]` config section.
    pub fn from_config(config: &VoteConfig) -> Self {
        Self::with_default_entry(
            config.default_subnet_id,
            config.default_subnet_name.clone(),
            config.sum_epsilon,
        )
    }

    /// A vector holding `subnet_id` at weight 1.0.
    pub fn with_default_entry(subnet_id: SubnetId, name: impl Into<String>, epsilon: f64) -> Self {
        Self {
            entries: vec![WeightEntry::new(subnet_id, name, TARGET_WEIGHT_SUM)],
            epsilon,
        }
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A vector always keeps at least one entry, so this is false in practice.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn get(&self, subnet_id: SubnetId) -> Option<&WeightEntry> {
        self.entries.iter().find(|e| e.subnet_id == subnet_id)
    }

    pub fn contains(&self, subnet_id: SubnetId) -> bool {
        self.get(subnet_id).is_some()
    }

    /// Append a subnet at weight 0.
    pub fn add_entry(&mut self, subnet_id: SubnetId, name: &str) -> Result<(), VoteError> {
        self.add_entry_with_weight(subnet_id, name, 0.0)
    }

    /// Append a subnet with an initial weight.
    ///
    /// A duplicate id is reported as `DuplicateEntry` and leaves the vector
    /// untouched.
    pub fn add_entry_with_weight(
        &mut self,
        subnet_id: SubnetId,
        name: &str,
        initial_weight: f64,
    ) -> Result<(), VoteError> {
        if !is_valid_subnet_id(subnet_id) {
            return Err(VoteError::InvalidSubnetId {
                raw: subnet_id.to_string(),
            });
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(VoteError::EmptyName);
        }
        if self.contains(subnet_id) {
            return Err(VoteError::DuplicateEntry { subnet_id });
        }
        let weight = coerce_weight(initial_weight);
        self.entries.push(WeightEntry::new(subnet_id, name, weight));
        events::entry_added(subnet_id, name, weight);
        Ok(())
    }

    /// Replace a weight from raw form input. Unparsable input becomes 0.
    ///
    /// Returns the weight actually stored.
    pub fn update_weight(&mut self, subnet_id: SubnetId, raw: &str) -> Result<f64, VoteError> {
        self.set_weight(subnet_id, parse_weight(raw))
    }

    /// Replace a weight with a numeric value. Non-finite values become 0.
    pub fn set_weight(&mut self, subnet_id: SubnetId, weight: f64) -> Result<f64, VoteError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.subnet_id == subnet_id)
            .ok_or(VoteError::NotFound { subnet_id })?;
        let weight = coerce_weight(weight);
        let old = std::mem::replace(&mut entry.weight, weight);
        events::weight_updated(subnet_id, old, weight);
        Ok(weight)
    }

    /// Whether removing an entry is currently allowed.
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// Remove a subnet, returning its entry. The last entry cannot be removed.
    pub fn remove_entry(&mut self, subnet_id: SubnetId) -> Result<WeightEntry, VoteError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.subnet_id == subnet_id)
            .ok_or(VoteError::NotFound { subnet_id })?;
        if !self.can_remove() {
            return Err(VoteError::LastEntry { subnet_id });
        }
        let removed = self.entries.remove(idx);
        events::entry_removed(subnet_id, self.entries.len());
        Ok(removed)
    }

    /// Sum of all weights, recomputed on every call.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Total as a display percentage, e.g. `"120.0%"`.
    pub fn total_percent(&self) -> String {
        format_percent(self.total_weight())
    }

    /// True iff `|total - 1.0| <= epsilon`.
    pub fn is_valid_for_submission(&self) -> bool {
        (self.total_weight() - TARGET_WEIGHT_SUM).abs() <= self.epsilon
    }

    /// `Ok` when submittable, otherwise `InvalidWeightSum` with the total.
    pub fn validate(&self) -> Result<(), VoteError> {
        if self.is_valid_for_submission() {
            Ok(())
        } else {
            Err(VoteError::InvalidWeightSum {
                total: self.total_weight(),
                epsilon: self.epsilon,
            })
        }
    }

    /// Rescale so the weights sum to 1.0. No-op when the total is not positive.
    pub fn normalize(&mut self) {
        let total = self.total_weight();
        if total <= 0.0 {
            return;
        }
        for entry in &mut self.entries {
            entry.weight /= total;
        }
    }

    pub fn snapshot(&self) -> WeightSnapshot {
        WeightSnapshot {
            entries: self.entries.clone(),
            total: self.total_weight(),
            valid: self.is_valid_for_submission(),
            can_remove: self.can_remove(),
        }
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::new()
    }
}
