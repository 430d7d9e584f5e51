//! Seeded generator for sample liquidity positions.
//!
//! There is no pool backend; detail pages show plausible positions drawn
//! from a `ChaCha8Rng`. A fixed seed reproduces the same book.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hydra_core::config::{defaults, DashboardConfig};
use hydra_core::tracing_setup::events;
use hydra_core::types::SubnetId;

use crate::position::LiquidityPosition;

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

pub struct PositionGenerator {
    rng: ChaCha8Rng,
    min_positions: usize,
    position_spread: usize,
    apy_floor: f64,
    apy_spread: f64,
    max_age_days: i64,
}

impl PositionGenerator {
    pub fn new(config: &DashboardConfig, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            min_positions: config.min_positions,
            position_spread: config.position_spread,
            apy_floor: config.apy_floor,
            apy_spread: config.apy_spread,
            max_age_days: config.max_position_age_days,
        }
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy(config: &DashboardConfig) -> Self {
        Self::new(config, rand::random())
    }

    /// Sample the positions of one subnet, largest amount first.
    pub fn generate(&mut self, subnet_id: SubnetId, now: DateTime<Utc>) -> Vec<LiquidityPosition> {
        let count = self.min_positions + self.below(self.position_spread);
        let max_age_ms = self
            .max_age_days
            .clamp(0, defaults::MAX_POSITION_AGE_DAYS)
            .saturating_mul(MS_PER_DAY);

        let mut positions: Vec<LiquidityPosition> = (0..count)
            .map(|i| {
                let age_ms = if max_age_ms > 0 {
                    self.rng.gen_range(0..max_age_ms)
                } else {
                    0
                };
                LiquidityPosition {
                    coldkey: self.short_key(),
                    hotkey: self.short_key(),
                    uid: 1000 + i as u64 + u64::from(subnet_id) * 100,
                    amount: self.rng.gen_range(0..100_000u32) as f64 / 100.0,
                    opened_on: now
                        .checked_sub_signed(Duration::milliseconds(age_ms))
                        .unwrap_or(now)
                        .date_naive(),
                    apy: self.apy_floor + self.rng.gen::<f64>() * self.apy_spread,
                }
            })
            .collect();

        positions.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        events::positions_sampled(subnet_id, positions.len());
        positions
    }

    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.rng.gen_range(0..bound)
        }
    }

    /// Abbreviated SS58-looking key, e.g. `5K3J9QX2A...7PQZ`.
    fn short_key(&mut self) -> String {
        let head = self.base36(8);
        let tail = self.base36(4);
        format!("5{head}...{tail}")
    }

    fn base36(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| BASE36[self.rng.gen_range(0..BASE36.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keys_have_the_abbreviated_shape() {
        let mut generator = PositionGenerator::new(&DashboardConfig::default(), 7);
        let key = generator.short_key();
        assert_eq!(key.len(), 1 + 8 + 3 + 4);
        assert!(key.starts_with('5'));
        assert_eq!(&key[9..12], "...");
    }

    #[test]
    fn zero_spread_and_age_are_allowed() {
        let config = DashboardConfig {
            position_spread: 0,
            max_position_age_days: 0,
            ..DashboardConfig::default()
        };
        let now = Utc::now();
        let positions = PositionGenerator::new(&config, 1).generate(3, now);
        assert_eq!(positions.len(), config.min_positions);
        assert!(positions.iter().all(|p| p.opened_on == now.date_naive()));
    }

    #[test]
    fn unvalidated_huge_age_does_not_overflow() {
        let config = DashboardConfig {
            max_position_age_days: i64::MAX,
            ..DashboardConfig::default()
        };
        let now = Utc::now();
        let positions = PositionGenerator::new(&config, 5).generate(1, now);
        assert!(positions.iter().all(|p| p.opened_on <= now.date_naive()));
    }
}
