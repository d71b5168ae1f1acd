//! Exponential smoothing models.
//!
//! This module provides exponential smoothing forecasting methods:
//! - Exponentially weighted moving average (incremental EWMA)
//! - Simple Exponential Smoothing (SES)
//! - Holt's Linear Trend
//! - Holt-Winters (additive and multiplicative seasonality)

mod ewma;
mod holt;
mod holt_winters;
mod holt_winters_multiplicative;
mod ses;

pub use ewma::{Ewma, EwmaConfig};
pub use holt::{HoltLinearTrend, HoltSmoothing};
pub use holt_winters::{HoltWintersAdditive, SeasonalType};
pub use holt_winters_multiplicative::{HoltWintersConfig, HoltWintersMultiplicative};
pub use ses::SimpleExponentialSmoothing;
