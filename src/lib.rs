//! # anofox-smoothing
//!
//! Exponential smoothing for univariate time series.
//!
//! Provides an incremental EWMA, Simple Exponential Smoothing, Holt's linear
//! trend and Holt-Winters with additive or multiplicative seasonality, along
//! with grid-search parameter optimization and naive or bootstrap
//! prediction intervals.
//!
//! ```
//! use anofox_smoothing::prelude::*;
//!
//! let pattern = [10.0, 5.0, 0.0, -5.0];
//! let values: Vec<f64> = (0..24).map(|t| 100.0 + 2.0 * t as f64 + pattern[t % 4]).collect();
//!
//! let mut model = HoltWintersAdditive::new(0.3, 0.1, 0.2).unwrap();
//! model.fit(&values, 4).unwrap();
//!
//! let interval = forecast_model_with_interval(&model, 8, &IntervalConfig::default()).unwrap();
//! assert_eq!(interval.horizon(), 8);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ErrorKind, ForecastError, Result};
pub use utils::{forecast_with_interval, optimize_parameters};

pub mod prelude {
    pub use crate::core::ForecastInterval;
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::exponential::{
        Ewma, EwmaConfig, HoltLinearTrend, HoltWintersAdditive, HoltWintersConfig,
        HoltWintersMultiplicative, SeasonalType, SimpleExponentialSmoothing,
    };
    pub use crate::models::Forecaster;
    pub use crate::utils::{
        forecast_model_with_interval, forecast_with_interval, optimize_parameters,
        IntervalConfig, IntervalMethod, OptimizationResult, OptimizerConfig,
    };
}
