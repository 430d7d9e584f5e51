pub mod dashboard_config;
pub mod defaults;
pub mod observability_config;
pub mod vote_config;

pub use dashboard_config::DashboardConfig;
pub use observability_config::ObservabilityConfig;
pub use vote_config::VoteConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HydraConfig {
    pub vote: VoteConfig,
    pub dashboard: DashboardConfig,
    pub observability: ObservabilityConfig,
}

impl HydraConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let eps = self.vote.sum_epsilon;
        if !eps.is_finite() || !(0.0..1.0).contains(&eps) {
            return Err(invalid("vote.sum_epsilon", "must be finite and in [0, 1)"));
        }
        if self.vote.default_subnet_id == 0 {
            return Err(invalid("vote.default_subnet_id", "must be positive"));
        }
        if self.vote.default_subnet_name.trim().is_empty() {
            return Err(invalid("vote.default_subnet_name", "must not be empty"));
        }
        if !(self.dashboard.usd_per_tao.is_finite() && self.dashboard.usd_per_tao > 0.0) {
            return Err(invalid("dashboard.usd_per_tao", "must be positive"));
        }
        if !(self.dashboard.apy_spread.is_finite() && self.dashboard.apy_spread >= 0.0) {
            return Err(invalid("dashboard.apy_spread", "must not be negative"));
        }
        if !self.dashboard.reward_rate.is_finite() {
            return Err(invalid("dashboard.reward_rate", "must be finite"));
        }
        if !self.dashboard.apy_floor.is_finite() {
            return Err(invalid("dashboard.apy_floor", "must be finite"));
        }
        if !(0..=defaults::MAX_POSITION_AGE_DAYS).contains(&self.dashboard.max_position_age_days) {
            return Err(invalid(
                "dashboard.max_position_age_days",
                "must be in [0, 36500]",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
