/// Subnet identifier (netuid). Valid identifiers are strictly positive.
pub type SubnetId = u32;

/// Returns true when `id` is usable as a subnet identifier.
pub fn is_valid_subnet_id(id: SubnetId) -> bool {
    id > 0
}

/// Render a fraction as a percentage with one decimal, e.g. `0.125` -> `"12.5%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_subnet() {
        assert!(!is_valid_subnet_id(0));
        assert!(is_valid_subnet_id(1));
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(1.2), "120.0%");
        assert_eq!(format_percent(0.125), "12.5%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
