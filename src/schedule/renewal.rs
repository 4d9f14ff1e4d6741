//! Renewal schedule calculator
//!
//! Generates the sequence of payment periods for a renewing policy from start
//! age to end age, applying a step-wise premium multiplier at each renewal
//! boundary. Periods are contiguous and cover `[start_age, end_age)` exactly
//! once; the last period is truncated to fit the end age.

use super::MONTHS_PER_YEAR;
use crate::assumptions::{DEFAULT_END_AGE, RATES_10_YEAR};
use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};

/// Parameters for generating a renewal schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewalParams {
    /// Age at policy issue
    pub start_age: u32,

    /// Age at which coverage (and payments) stop
    /// Default: 90
    #[serde(default = "default_end_age")]
    pub end_age: u32,

    /// Monthly premium during the first cycle, in whole currency units
    pub initial_monthly_premium: f64,

    /// Years between renewals (typically 10 or 20)
    /// Default: 10
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u32,

    /// Multiplicative premium increase factors, one per renewal boundary.
    /// The last factor holds once the table is exhausted.
    /// Default: built-in 10-year table
    #[serde(default = "default_increase_rates")]
    pub increase_rates: Vec<f64>,
}

fn default_end_age() -> u32 { DEFAULT_END_AGE }
fn default_cycle_length() -> u32 { 10 }
fn default_increase_rates() -> Vec<f64> { RATES_10_YEAR.to_vec() }

impl Default for RenewalParams {
    fn default() -> Self {
        Self {
            start_age: 0,
            end_age: DEFAULT_END_AGE,
            initial_monthly_premium: 0.0,
            cycle_length: 10,
            increase_rates: RATES_10_YEAR.to_vec(),
        }
    }
}

/// One contiguous stretch of level premium within a renewal schedule
///
/// Immutable once generated; produced only by `generate_renewal_schedule`.
/// Monetary fields are exact (unrounded) values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    /// Attained age at the start of the period
    pub start_age: u32,

    /// Length of the period in years (final period may be shorter than the cycle)
    pub duration_years: u32,

    /// Level monthly premium paid throughout the period
    pub monthly_premium: f64,

    /// monthly_premium * duration_years * 12
    pub period_total: f64,
}

impl PaymentPeriod {
    /// Attained age at the end of the period (exclusive)
    pub fn end_age(&self) -> u32 {
        self.start_age + self.duration_years
    }

    /// Number of monthly payments in the period
    pub fn months(&self) -> u32 {
        self.duration_years * MONTHS_PER_YEAR
    }
}

/// Ordered sequence of payment periods covering `[start_age, end_age)`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenewalSchedule {
    pub periods: Vec<PaymentPeriod>,
}

impl RenewalSchedule {
    /// Sum of period totals across the schedule (exact, unrounded)
    pub fn total_paid(&self) -> f64 {
        self.periods.iter().map(|p| p.period_total).sum()
    }

    /// Total number of monthly payments across the schedule
    pub fn total_months(&self) -> u32 {
        self.periods.iter().map(|p| p.months()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

/// Generate the payment schedule for a renewing policy
///
/// Validates inputs up front and never returns a partial schedule. A
/// zero-duration request (`start_age == end_age`) yields an empty schedule.
pub fn generate_renewal_schedule(params: &RenewalParams) -> Result<RenewalSchedule, ScheduleError> {
    validate(params)?;

    let mut periods = Vec::new();
    let mut current_age = params.start_age;
    let mut premium = params.initial_monthly_premium;
    let mut rate_index = 0usize;

    while current_age < params.end_age {
        let duration = params.cycle_length.min(params.end_age - current_age);

        periods.push(PaymentPeriod {
            start_age: current_age,
            duration_years: duration,
            monthly_premium: premium,
            period_total: premium * (duration * MONTHS_PER_YEAR) as f64,
        });

        // Rate table holds at its final value past exhaustion
        let rate = params
            .increase_rates
            .get(rate_index)
            .or_else(|| params.increase_rates.last())
            .copied()
            .unwrap_or(1.0);
        premium *= rate;

        current_age += duration;
        rate_index += 1;
    }

    log::debug!(
        "generated {} periods for ages {}..{} (cycle {})",
        periods.len(),
        params.start_age,
        params.end_age,
        params.cycle_length
    );

    Ok(RenewalSchedule { periods })
}

fn validate(params: &RenewalParams) -> Result<(), ScheduleError> {
    if params.end_age < params.start_age {
        return Err(ScheduleError::InvalidRange {
            start_age: params.start_age,
            end_age: params.end_age,
        });
    }
    if params.initial_monthly_premium < 0.0 {
        return Err(ScheduleError::InvalidInput(format!(
            "negative monthly premium: {}",
            params.initial_monthly_premium
        )));
    }
    if params.cycle_length == 0 {
        return Err(ScheduleError::InvalidInput(
            "cycle length must be positive".to_string(),
        ));
    }
    // The empty-table guard only matters when at least one renewal can occur
    if params.increase_rates.is_empty() && params.end_age > params.start_age {
        return Err(ScheduleError::EmptyRateTable);
    }
    Ok(())
}
