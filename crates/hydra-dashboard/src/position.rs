use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A miner's liquidity position in one subnet pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityPosition {
    pub coldkey: String,
    pub hotkey: String,
    pub uid: u64,
    /// TAO, two decimals.
    pub amount: f64,
    pub opened_on: NaiveDate,
    /// Percent, e.g. `18.4`.
    pub apy: f64,
}

/// APY above which a position is highlighted.
pub const HIGH_YIELD_APY: f64 = 20.0;

impl LiquidityPosition {
    pub fn usd_value(&self, usd_per_tao: f64) -> f64 {
        self.amount * usd_per_tao
    }

    pub fn is_high_yield(&self) -> bool {
        self.apy > HIGH_YIELD_APY
    }
}

/// Column a position table is sorted by. All orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Amount,
    Apy,
    Time,
}
