//! # hydra-core
//!
//! Foundation crate for the Hydra subnet tooling.
//! Defines shared types, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::HydraConfig;
pub use errors::{ConfigError, DashboardError, HydraError, HydraResult, VoteError};
pub use types::SubnetId;
