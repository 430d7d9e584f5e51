use crate::types::SubnetId;

/// Dashboard lookup errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("unknown subnet: {subnet_id}")]
    UnknownSubnet { subnet_id: SubnetId },
}
