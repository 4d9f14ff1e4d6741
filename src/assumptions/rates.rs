//! Default premium increase-rate tables by renewal cycle
//!
//! Each table holds the multiplicative factors applied to the monthly premium
//! at successive renewal boundaries. Past the last entry the final factor
//! holds (the calculator clamps, it does not error).

/// Coverage runs to age 90 unless the caller overrides it
pub const DEFAULT_END_AGE: u32 = 90;

/// Increase factors for a 10-year renewal cycle
///
/// Seven renewals carry a policy from issue to the tail of coverage; the
/// steep early factors reflect the jump out of the issue-age pricing band.
pub const RATES_10_YEAR: &[f64] = &[2.5166, 2.311, 1.8959, 1.3226, 1.083, 1.0624, 1.0388];

/// Increase factors for a 20-year renewal cycle
pub const RATES_20_YEAR: &[f64] = &[4.82, 1.5, 1.08];

/// Look up the built-in rate table for a renewal cycle length
///
/// Returns `None` for cycle lengths without a built-in table; callers must
/// then supply their own rates.
pub fn default_rates(cycle_length: u32) -> Option<&'static [f64]> {
    match cycle_length {
        10 => Some(RATES_10_YEAR),
        20 => Some(RATES_20_YEAR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cycles() {
        assert_eq!(default_rates(10), Some(RATES_10_YEAR));
        assert_eq!(default_rates(20), Some(RATES_20_YEAR));
        assert_eq!(RATES_10_YEAR.len(), 7);
        assert_eq!(RATES_20_YEAR.len(), 3);
    }

    #[test]
    fn test_unsupported_cycle() {
        assert_eq!(default_rates(5), None);
        assert_eq!(default_rates(0), None);
    }

    #[test]
    fn test_rates_are_positive_multipliers() {
        for &r in RATES_10_YEAR.iter().chain(RATES_20_YEAR) {
            assert!(r > 1.0);
        }
    }
}
