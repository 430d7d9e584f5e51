//! Dashboard overview: totals across subnets and per-subnet detail.

use chrono::{DateTime, Utc};

use hydra_core::config::DashboardConfig;
use hydra_core::dashboard_span;
use hydra_core::errors::DashboardError;
use hydra_core::types::SubnetId;

use crate::book::PositionBook;
use crate::data::{liquidity_distribution, subnet_weights, SubnetShare};
use crate::generator::PositionGenerator;

pub struct Overview {
    config: DashboardConfig,
    weights: &'static [SubnetShare],
    liquidity: &'static [SubnetShare],
}

/// Everything the detail page for one subnet shows.
#[derive(Debug, Clone)]
pub struct SubnetDetail {
    pub weight: SubnetShare,
    pub liquidity: SubnetShare,
    /// Liquidity in M USD.
    pub liquidity_usd: f64,
    pub positions: PositionBook,
}

impl Overview {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            weights: subnet_weights(),
            liquidity: liquidity_distribution(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn weights(&self) -> &[SubnetShare] {
        self.weights
    }

    pub fn liquidity(&self) -> &[SubnetShare] {
        self.liquidity
    }

    /// Sum of published weights (1.0 for the shipped table).
    pub fn weight_total(&self) -> f64 {
        self.weights.iter().map(|s| s.value).sum()
    }

    /// Total liquidity across subnets, in M TAO.
    pub fn total_liquidity(&self) -> f64 {
        self.liquidity.iter().map(|s| s.value).sum()
    }

    /// Total liquidity in M USD.
    pub fn total_liquidity_usd(&self) -> f64 {
        self.total_liquidity() * self.config.usd_per_tao
    }

    pub fn weight_of(&self, subnet_id: SubnetId) -> Result<&SubnetShare, DashboardError> {
        find(self.weights, subnet_id)
    }

    pub fn liquidity_of(&self, subnet_id: SubnetId) -> Result<&SubnetShare, DashboardError> {
        find(self.liquidity, subnet_id)
    }

    /// A subnet's fraction of total liquidity.
    pub fn liquidity_share(&self, subnet_id: SubnetId) -> Result<f64, DashboardError> {
        let total = self.total_liquidity();
        let share = self.liquidity_of(subnet_id)?;
        Ok(if total > 0.0 { share.value / total } else { 0.0 })
    }

    /// Detail view for one subnet, positions drawn from `generator`.
    ///
    /// Unknown ids are an error; the page falls back to the overview.
    pub fn detail(
        &self,
        subnet_id: SubnetId,
        generator: &mut PositionGenerator,
        now: DateTime<Utc>,
    ) -> Result<SubnetDetail, DashboardError> {
        let _span = dashboard_span!(subnet_id).entered();
        let weight = self.weight_of(subnet_id)?.clone();
        let liquidity = self.liquidity_of(subnet_id)?.clone();
        Ok(SubnetDetail {
            liquidity_usd: liquidity.value * self.config.usd_per_tao,
            weight,
            liquidity,
            positions: PositionBook::new(generator.generate(subnet_id, now)),
        })
    }
}

impl Default for Overview {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

fn find(shares: &[SubnetShare], subnet_id: SubnetId) -> Result<&SubnetShare, DashboardError> {
    shares
        .iter()
        .find(|s| s.id == subnet_id)
        .ok_or(DashboardError::UnknownSubnet { subnet_id })
}
