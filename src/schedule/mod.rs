//! Payment schedule generation for both product variants

mod flat;
mod renewal;

pub use flat::{generate_flat_summary, FlatPaymentSummary};
pub use renewal::{generate_renewal_schedule, PaymentPeriod, RenewalParams, RenewalSchedule};

/// Payments per year
pub const MONTHS_PER_YEAR: u32 = 12;
