//! Validation errors for schedule generation
//!
//! All errors are local input-validation failures reported before any
//! computation runs. The core never returns partial results.

use thiserror::Error;

/// Errors produced by the schedule calculators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// end_age is below start_age
    #[error("invalid age range: end age {end_age} is below start age {start_age}")]
    InvalidRange { start_age: u32, end_age: u32 },

    /// Negative premium, zero term, or zero cycle length
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A renewal schedule with nonzero duration was requested with no increase rates
    #[error("increase rate table is empty")]
    EmptyRateTable,
}
