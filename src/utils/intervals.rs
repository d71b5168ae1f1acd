//! Prediction intervals around point forecasts.
//!
//! Two methods are available:
//!
//! - **Naive**: normal-theory bounds `f_h ± z·σ·√(h+1)` where `σ` is the
//!   sample standard deviation of the residuals.
//! - **Bootstrap**: simulated paths that add resampled residuals to the
//!   point forecast, with empirical quantiles per step. Resampling uses a
//!   seeded [`Lcg`], so results are reproducible across platforms.

use tracing::debug;

use crate::core::ForecastInterval;
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::stats::{finite_residuals, quantile_normal, quantile_sorted, std_dev};
use crate::utils::validation::assert_finite_array;

/// How the interval bounds are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalMethod {
    /// Gaussian bounds widening with the square root of the horizon.
    #[default]
    Naive,
    /// Empirical quantiles of residual-bootstrap paths.
    Bootstrap,
}

/// Configuration for [`forecast_with_interval`].
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalConfig {
    /// Confidence level in (0, 1).
    pub level: f64,
    /// Interval method.
    pub method: IntervalMethod,
    /// Number of simulated paths for the bootstrap method.
    pub simulations: usize,
    /// Seed for the bootstrap generator.
    pub seed: u64,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            level: 0.95,
            method: IntervalMethod::Naive,
            simulations: 1000,
            seed: 0,
        }
    }
}

impl IntervalConfig {
    /// Create a config with the given confidence level.
    pub fn new(level: f64) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Bootstrap intervals with the given number of paths and seed.
    pub fn bootstrap(level: f64, simulations: usize, seed: u64) -> Self {
        Self {
            level,
            method: IntervalMethod::Bootstrap,
            simulations,
            seed,
        }
    }

    pub fn with_method(mut self, method: IntervalMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Linear congruential generator, `x' = (1103515245·x + 12345) mod 2³¹`.
///
/// Only used for residual resampling, where cross-platform reproducibility
/// matters more than statistical quality.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    const MULTIPLIER: u64 = 1_103_515_245;
    const INCREMENT: u64 = 12_345;
    const MODULUS: u64 = 1 << 31;

    /// Seed the generator. Only the low 31 bits of `seed` are significant.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    /// Advance and return the raw state in `[0, 2³¹)`.
    pub fn next_u31(&mut self) -> u64 {
        self.state = (Self::MULTIPLIER * self.state + Self::INCREMENT) % Self::MODULUS;
        self.state
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u31() as f64 / Self::MODULUS as f64
    }

    /// Uniform index in `[0, n)`. `n` must be non-zero.
    pub fn next_index(&mut self, n: usize) -> usize {
        ((self.next_f64() * n as f64) as usize).min(n - 1)
    }
}

/// Builds a prediction interval around `point_forecast`.
///
/// Residuals before `min_residual_index` and any non-finite residual are
/// ignored. An empty forecast yields an empty interval.
///
/// # Errors
/// - `level` outside (0, 1)
/// - non-finite point forecast
/// - no finite residual at or after `min_residual_index`
/// - zero simulations for the bootstrap method
///
/// # Example
/// ```
/// use anofox_smoothing::utils::intervals::{forecast_with_interval, IntervalConfig};
///
/// let forecast = [10.0, 10.0, 10.0];
/// let residuals = [f64::NAN, 0.5, -0.3, 0.1, -0.4, 0.2];
///
/// let interval = forecast_with_interval(&forecast, &residuals, 1, &IntervalConfig::new(0.9)).unwrap();
/// assert_eq!(interval.horizon(), 3);
/// assert!(interval.lower()[0] < 10.0 && interval.upper()[0] > 10.0);
/// ```
pub fn forecast_with_interval(
    point_forecast: &[f64],
    residuals: &[f64],
    min_residual_index: usize,
    config: &IntervalConfig,
) -> Result<ForecastInterval> {
    let level = config.level;
    if !(level > 0.0 && level < 1.0) {
        return Err(ForecastError::InvalidParameter(format!(
            "Confidence level must be in (0, 1), got {}",
            level
        )));
    }

    if point_forecast.is_empty() {
        return Ok(ForecastInterval::empty(level));
    }
    assert_finite_array(point_forecast)?;

    let window = residuals.get(min_residual_index..).unwrap_or(&[]);
    let usable = finite_residuals(window);
    if usable.is_empty() {
        return Err(ForecastError::InvalidParameter(format!(
            "No finite residuals at or after index {}",
            min_residual_index
        )));
    }

    debug!(
        horizon = point_forecast.len(),
        residuals = usable.len(),
        level,
        method = ?config.method,
        "computing prediction interval"
    );

    let (lower, upper) = match config.method {
        IntervalMethod::Naive => naive_bounds(point_forecast, &usable, level),
        IntervalMethod::Bootstrap => {
            if config.simulations == 0 {
                return Err(ForecastError::InvalidParameter(
                    "Bootstrap requires at least 1 simulation".to_string(),
                ));
            }
            bootstrap_bounds(
                point_forecast,
                &usable,
                level,
                config.simulations,
                config.seed,
            )
        }
    };

    ForecastInterval::new(point_forecast.to_vec(), lower, upper, level)
}

/// Forecasts `steps` ahead with a fitted model and wraps the result in an
/// interval built from the model's own residuals.
pub fn forecast_model_with_interval<M: Forecaster + ?Sized>(
    model: &M,
    steps: usize,
    config: &IntervalConfig,
) -> Result<ForecastInterval> {
    let point_forecast = model.forecast(steps)?;
    forecast_with_interval(
        &point_forecast,
        model.residuals()?,
        model.min_residual_index()?,
        config,
    )
}

fn naive_bounds(point_forecast: &[f64], residuals: &[f64], level: f64) -> (Vec<f64>, Vec<f64>) {
    let z = quantile_normal((1.0 + level) / 2.0);
    let sigma = if residuals.len() > 1 {
        std_dev(residuals)
    } else {
        0.0
    };

    point_forecast
        .iter()
        .enumerate()
        .map(|(h, &f)| {
            let margin = z * sigma * ((h + 1) as f64).sqrt();
            (f - margin, f + margin)
        })
        .unzip()
}

fn bootstrap_bounds(
    point_forecast: &[f64],
    residuals: &[f64],
    level: f64,
    simulations: usize,
    seed: u64,
) -> (Vec<f64>, Vec<f64>) {
    let horizon = point_forecast.len();
    let n = residuals.len();
    let mut rng = Lcg::new(seed);
    let mut samples: Vec<Vec<f64>> = vec![Vec::with_capacity(simulations); horizon];

    // Path-major draw order fixes the output for a given seed.
    for _ in 0..simulations {
        for (h, &f) in point_forecast.iter().enumerate() {
            samples[h].push(f + residuals[rng.next_index(n)]);
        }
    }

    let lower_p = (1.0 - level) / 2.0;
    let upper_p = (1.0 + level) / 2.0;

    samples
        .iter_mut()
        .map(|step| {
            step.sort_by(|a, b| a.total_cmp(b));
            (quantile_sorted(step, lower_p), quantile_sorted(step, upper_p))
        })
        .unzip()
}
