//! Flat (non-renewing) payment summary
//!
//! A non-renewing policy pays a constant premium over a fixed term, so the
//! whole schedule collapses into a single aggregate record.

use super::MONTHS_PER_YEAR;
use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};

/// Aggregate payment record for a fixed-premium, fixed-term policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatPaymentSummary {
    /// Payment term in years
    pub term_years: u32,

    /// Level monthly premium over the whole term
    pub monthly_premium: f64,

    /// monthly_premium * term_years * 12
    pub total_paid: f64,
}

impl FlatPaymentSummary {
    /// Number of monthly payments over the term
    pub fn months(&self) -> u32 {
        self.term_years * MONTHS_PER_YEAR
    }
}

/// Compute the payment summary for a non-renewing policy
pub fn generate_flat_summary(
    monthly_premium: f64,
    term_years: u32,
) -> Result<FlatPaymentSummary, ScheduleError> {
    if monthly_premium < 0.0 {
        return Err(ScheduleError::InvalidInput(format!(
            "negative monthly premium: {monthly_premium}"
        )));
    }
    if term_years == 0 {
        return Err(ScheduleError::InvalidInput(
            "payment term must be positive".to_string(),
        ));
    }

    Ok(FlatPaymentSummary {
        term_years,
        monthly_premium,
        total_paid: monthly_premium * (term_years * MONTHS_PER_YEAR) as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_exact_for_integer_inputs() {
        let summary = generate_flat_summary(150_000.0, 20).unwrap();
        assert_eq!(summary.total_paid, 36_000_000.0);
        assert_eq!(summary.months(), 240);
    }

    #[test]
    fn test_zero_premium_allowed() {
        let summary = generate_flat_summary(0.0, 10).unwrap();
        assert_eq!(summary.total_paid, 0.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            generate_flat_summary(-100.0, 20),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(matches!(
            generate_flat_summary(150_000.0, 0),
            Err(ScheduleError::InvalidInput(_))
        ));
    }
}
