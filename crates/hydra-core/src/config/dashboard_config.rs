use serde::{Deserialize, Serialize};

use super::defaults;

/// Dashboard aggregate and sample-position configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// USD price of one TAO used for display conversions.
    pub usd_per_tao: f64,
    /// Fraction of pooled liquidity shown as estimated rewards.
    pub reward_rate: f64,
    /// Sampled position count is `min_positions + [0, position_spread)`.
    pub min_positions: usize,
    pub position_spread: usize,
    /// Sampled APY is `apy_floor + [0, apy_spread)`.
    pub apy_floor: f64,
    pub apy_spread: f64,
    /// Positions are opened within this many days before "now".
    pub max_position_age_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            usd_per_tao: defaults::DEFAULT_USD_PER_TAO,
            reward_rate: defaults::DEFAULT_REWARD_RATE,
            min_positions: defaults::DEFAULT_MIN_POSITIONS,
            position_spread: defaults::DEFAULT_POSITION_SPREAD,
            apy_floor: defaults::DEFAULT_APY_FLOOR,
            apy_spread: defaults::DEFAULT_APY_SPREAD,
            max_position_age_days: defaults::DEFAULT_MAX_POSITION_AGE_DAYS,
        }
    }
}
