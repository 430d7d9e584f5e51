// Single source of truth for all default values.

// --- Vote ---
pub const DEFAULT_SUM_EPSILON: f64 = 1e-9;
pub const DEFAULT_SUBNET_ID: u32 = 1;
pub const DEFAULT_SUBNET_NAME: &str = "Subnet 1 - Text Generation";
pub const DEFAULT_CHECK_COLDKEY_FORMAT: bool = true;

// --- Dashboard ---
pub const DEFAULT_USD_PER_TAO: f64 = 350.0;
pub const DEFAULT_REWARD_RATE: f64 = 0.15;
pub const DEFAULT_MIN_POSITIONS: usize = 15;
pub const DEFAULT_POSITION_SPREAD: usize = 10;
pub const DEFAULT_APY_FLOOR: f64 = 15.0;
pub const DEFAULT_APY_SPREAD: f64 = 10.0;
pub const DEFAULT_MAX_POSITION_AGE_DAYS: i64 = 30;
pub const MAX_POSITION_AGE_DAYS: i64 = 36_500; // 100 years

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
