//! Built-in pricing assumptions for the comparison engine

mod rates;

pub use rates::{default_rates, DEFAULT_END_AGE, RATES_10_YEAR, RATES_20_YEAR};
