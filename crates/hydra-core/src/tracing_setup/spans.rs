//! Span definitions for vote editing and dashboard queries.

/// Create a span around a vote-session operation.
#[macro_export]
macro_rules! vote_span {
    ($session_id:expr, $op:expr) => {
        tracing::debug_span!("hydra.vote", session_id = %$session_id, op = %$op)
    };
}

/// Create a span around a dashboard query for one subnet.
#[macro_export]
macro_rules! dashboard_span {
    ($subnet_id:expr) => {
        tracing::debug_span!("hydra.dashboard", subnet_id = $subnet_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const VOTE: &str = "hydra.vote";
    pub const DASHBOARD: &str = "hydra.dashboard";
}
