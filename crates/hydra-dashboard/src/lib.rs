//! # hydra-dashboard
//!
//! Read-only figures behind the Hydra dashboard: the subnet weight
//! distribution, TAO liquidity per subnet, and per-subnet liquidity
//! position books built from sampled data.
//!
//! ## Modules
//!
//! - `data` — the published subnet weight and liquidity tables
//! - `overview` — aggregates and per-subnet detail lookups
//! - `position` — `LiquidityPosition` and sort keys
//! - `generator` — seeded sample-position generator
//! - `book` — sorted views and stats over a set of positions

pub mod book;
pub mod data;
pub mod generator;
pub mod overview;
pub mod position;

pub use book::PositionBook;
pub use data::{liquidity_distribution, subnet_weights, SubnetShare};
pub use generator::PositionGenerator;
pub use overview::{Overview, SubnetDetail};
pub use position::{LiquidityPosition, SortKey};
