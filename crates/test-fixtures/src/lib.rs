//! Shared fixtures for Hydra integration tests.

use hydra_core::HydraConfig;

/// Well-known development coldkeys (substrate dev accounts).
pub const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
pub const BOB: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

pub const SAMPLE_SIGNATURE: &str =
    "0x2aeaa98e26062cf65161c68c5cb7aa31ca050cb5bdd07abc80a475d2a2eebc7b7a9c9546fbdff971b29419ddd9982bf4148c81a49df550154e1674a6b58bac84";

/// Config that skips coldkey shape checks and uses a loose tolerance.
pub const LENIENT_CONFIG_TOML: &str = r#"
[vote]
sum_epsilon = 0.0005
check_coldkey_format = false

[observability]
log_level = "debug"
json = false
"#;

pub fn default_config() -> HydraConfig {
    HydraConfig::default()
}

pub fn lenient_config() -> HydraConfig {
    HydraConfig::from_toml(LENIENT_CONFIG_TOML).expect("fixture config parses")
}

/// The seven-subnet allocation shown on the dashboard overview, as `(id, name, weight)`.
pub fn sample_allocation() -> Vec<(u32, &'static str, f64)> {
    vec![
        (1, "Subnet 1 - Text Generation", 0.25),
        (8, "Subnet 8 - Time Series", 0.15),
        (13, "Subnet 13 - Dataverse", 0.20),
        (18, "Subnet 18 - Cortex", 0.12),
        (21, "Subnet 21 - FileTAO", 0.08),
        (23, "Subnet 23 - NicheImage", 0.10),
        (31, "Subnet 31 - Healthcare", 0.10),
    ]
}

/// Parse a JSON string into a generic value.
pub fn json_value(input: &str) -> serde_json::Value {
    serde_json::from_str(input).expect("fixture json parses")
}
