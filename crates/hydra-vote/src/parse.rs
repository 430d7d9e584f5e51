//! Form-input coercion.
//!
//! Weights follow `parseFloat`-style prefix parsing with a fixed fallback:
//! anything that does not yield a finite number becomes `0.0`. Subnet ids
//! follow `parseInt`-style prefix parsing and must be strictly positive.

use once_cell::sync::Lazy;
use regex::Regex;

use hydra_core::errors::VoteError;
use hydra_core::types::{is_valid_subnet_id, SubnetId};

static FLOAT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap());

static INT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+").unwrap());

/// Parse a weight typed into the form. Unparsable or non-finite input is `0.0`.
pub fn parse_weight(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    FLOAT_PREFIX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a subnet id typed into the form.
pub fn parse_subnet_id(raw: &str) -> Result<SubnetId, VoteError> {
    let invalid = || VoteError::InvalidSubnetId {
        raw: raw.to_string(),
    };
    let m = INT_PREFIX.find(raw.trim_start()).ok_or_else(invalid)?;
    let value: i64 = m.as_str().parse().map_err(|_| invalid())?;
    let id = SubnetId::try_from(value).map_err(|_| invalid())?;
    if !is_valid_subnet_id(id) {
        return Err(invalid());
    }
    Ok(id)
}

/// Sanitize an already-numeric weight with the same fallback as `parse_weight`.
pub(crate) fn coerce_weight(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
