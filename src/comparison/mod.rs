//! Comparison aggregator
//!
//! Sums totals from a renewal schedule and an optional flat summary, computing
//! the difference, average monthly premiums, and the equivalent-years-saved
//! heuristic. Stateless: every comparison is recomputed from its inputs.

use crate::schedule::{FlatPaymentSummary, RenewalSchedule, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

/// Flat-policy side of a comparison, present only when a flat summary was supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatComparison {
    /// Total paid over the flat policy's term
    pub flat_total: f64,

    /// The flat policy's level monthly premium
    pub avg_monthly_flat: f64,

    /// renewal_total - flat_total; positive when renewing costs more
    pub difference: f64,

    /// The difference expressed as whole years of flat-policy premiums.
    /// Zero when the flat policy is not cheaper (no savings claim is made).
    pub equivalent_years_saved: u32,
}

/// Derived totals for a single comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Sum of period totals across the renewal schedule
    pub renewal_total: f64,

    /// Number of monthly payments across the renewal schedule
    pub renewal_total_months: u32,

    /// renewal_total / renewal_total_months, 0 for an empty schedule
    pub avg_monthly_renewal: f64,

    /// Flat-policy figures, absent when no flat summary was supplied
    pub flat: Option<FlatComparison>,
}

/// Aggregate a renewal schedule against an optional flat summary
pub fn compare(
    schedule: &RenewalSchedule,
    flat: Option<&FlatPaymentSummary>,
) -> ComparisonResult {
    let renewal_total = schedule.total_paid();
    let renewal_total_months = schedule.total_months();

    let avg_monthly_renewal = if renewal_total_months > 0 {
        renewal_total / renewal_total_months as f64
    } else {
        0.0
    };

    let flat = flat.map(|summary| {
        let difference = renewal_total - summary.total_paid;
        let avg_monthly_flat = summary.monthly_premium;

        let equivalent_years_saved = if difference > 0.0 && avg_monthly_flat > 0.0 {
            (difference / (avg_monthly_flat * MONTHS_PER_YEAR as f64)).floor() as u32
        } else {
            0
        };

        FlatComparison {
            flat_total: summary.total_paid,
            avg_monthly_flat,
            difference,
            equivalent_years_saved,
        }
    });

    ComparisonResult {
        renewal_total,
        renewal_total_months,
        avg_monthly_renewal,
        flat,
    }
}
