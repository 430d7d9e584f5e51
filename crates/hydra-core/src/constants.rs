/// Hydra tooling version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target total for a submittable weight vector.
pub const TARGET_WEIGHT_SUM: f64 = 1.0;

/// Environment variable consulted by `init_tracing`.
pub const LOG_ENV_VAR: &str = "HYDRA_LOG";

/// Base58 alphabet used by SS58 account identifiers.
pub const SS58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Accepted SS58 address lengths (generic substrate prefixes).
pub const SS58_MIN_LEN: usize = 46;
pub const SS58_MAX_LEN: usize = 48;
