//! PositionBook — sorted views and aggregate stats over one subnet's positions.

use crate::position::{LiquidityPosition, SortKey};

#[derive(Debug, Clone, Default)]
pub struct PositionBook {
    positions: Vec<LiquidityPosition>,
}

impl PositionBook {
    pub fn new(positions: Vec<LiquidityPosition>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[LiquidityPosition] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions ordered by `key`, descending. Ties keep their stored order.
    pub fn sorted(&self, key: SortKey) -> Vec<&LiquidityPosition> {
        let mut view: Vec<&LiquidityPosition> = self.positions.iter().collect();
        match key {
            SortKey::Amount => view.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
            SortKey::Apy => view.sort_by(|a, b| b.apy.total_cmp(&a.apy)),
            SortKey::Time => view.sort_by(|a, b| b.opened_on.cmp(&a.opened_on)),
        }
        view
    }

    /// Pooled TAO across all positions.
    pub fn total_liquidity(&self) -> f64 {
        self.positions.iter().map(|p| p.amount).sum()
    }

    /// Mean APY; 0 for an empty book.
    pub fn average_apy(&self) -> f64 {
        if self.positions.is_empty() {
            return 0.0;
        }
        self.positions.iter().map(|p| p.apy).sum::<f64>() / self.positions.len() as f64
    }

    pub fn estimated_rewards(&self, reward_rate: f64) -> f64 {
        self.total_liquidity() * reward_rate
    }

    pub fn usd_value(&self, usd_per_tao: f64) -> f64 {
        self.total_liquidity() * usd_per_tao
    }

    pub fn high_yield_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_high_yield()).count()
    }
}
