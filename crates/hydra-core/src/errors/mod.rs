mod config_error;
mod dashboard_error;
mod vote_error;

pub use config_error::ConfigError;
pub use dashboard_error::DashboardError;
pub use vote_error::VoteError;

/// Top-level error for the Hydra workspace.
#[derive(Debug, thiserror::Error)]
pub enum HydraError {
    #[error(transparent)]
    Vote(#[from] VoteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type HydraResult<T> = Result<T, HydraError>;
