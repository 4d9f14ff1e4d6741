//! Renewal Compare - Payment schedule engine for renewing vs non-renewing insurance products
//!
//! This library provides:
//! - Renewal schedule generation with step-wise premium increases at cycle boundaries
//! - Flat (non-renewing) payment summaries over a fixed term
//! - Comparison aggregation (totals, difference, average monthlies, years saved)
//!
//! The core is pure and synchronous: every comparison is recomputed from its
//! inputs, nothing is persisted, and monetary values stay exact f64 until the
//! presentation boundary rounds them once for display.

pub mod assumptions;
pub mod comparison;
pub mod error;
pub mod schedule;

// Re-export commonly used types
pub use comparison::{compare, ComparisonResult, FlatComparison};
pub use error::ScheduleError;
pub use schedule::{
    generate_flat_summary, generate_renewal_schedule, FlatPaymentSummary, PaymentPeriod,
    RenewalParams, RenewalSchedule,
};
