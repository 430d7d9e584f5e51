use serde::Serialize;

use hydra_core::types::SubnetId;

/// One slice of a distribution: a weight fraction or an amount in M TAO.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubnetShare {
    pub id: SubnetId,
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

const fn share(id: SubnetId, name: &'static str, value: f64, color: &'static str) -> SubnetShare {
    SubnetShare {
        id,
        name,
        value,
        color,
    }
}

const SUBNET_WEIGHTS: [SubnetShare; 7] = [
    share(1, "Subnet 1 - Text Generation", 0.25, "#3B82F6"),
    share(8, "Subnet 8 - Time Series", 0.15, "#06B6D4"),
    share(13, "Subnet 13 - Dataverse", 0.20, "#0EA5E9"),
    share(18, "Subnet 18 - Cortex", 0.12, "#14B8A6"),
    share(21, "Subnet 21 - FileTAO", 0.08, "#10B981"),
    share(23, "Subnet 23 - NicheImage", 0.10, "#22D3EE"),
    share(31, "Subnet 31 - Healthcare", 0.10, "#0891B2"),
];

const LIQUIDITY: [SubnetShare; 7] = [
    share(1, "Subnet 1 - Text Generation", 10.5, "#3B82F6"),
    share(8, "Subnet 8 - Time Series", 6.3, "#06B6D4"),
    share(13, "Subnet 13 - Dataverse", 8.4, "#0EA5E9"),
    share(18, "Subnet 18 - Cortex", 5.04, "#14B8A6"),
    share(21, "Subnet 21 - FileTAO", 3.36, "#10B981"),
    share(23, "Subnet 23 - NicheImage", 4.2, "#22D3EE"),
    share(31, "Subnet 31 - Healthcare", 4.2, "#0891B2"),
];

/// Alpha bandwidth allocation across subnets (fractions summing to 1).
pub fn subnet_weights() -> &'static [SubnetShare] {
    &SUBNET_WEIGHTS
}

/// TAO liquidity provided per subnet, in millions.
pub fn liquidity_distribution() -> &'static [SubnetShare] {
    &LIQUIDITY
}
