//! Core result structures.

mod forecast;

pub use forecast::ForecastInterval;
