//! Utility functions for smoothing models.

pub mod intervals;
pub mod optimization;
pub mod scoring;
pub mod seasonal;
pub mod stats;
pub mod validation;

pub use intervals::{
    forecast_model_with_interval, forecast_with_interval, IntervalConfig, IntervalMethod, Lcg,
};
pub use optimization::{optimize_parameters, OptimizationResult, OptimizerConfig};
pub use scoring::{score_model, ModelScore};
pub use stats::quantile_normal;
