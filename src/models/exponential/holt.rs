//! Holt's Linear Trend forecasting model.
//!
//! Also known as double exponential smoothing, this model is suitable for
//! data with a linear trend but no seasonality.

use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::validation::{assert_finite_array, assert_smoothing_factor};

/// Holt's Linear Trend forecaster.
///
/// The model equations are:
/// - Level: `l_t = α × y_t + (1-α) × (l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β × (l_t - l_{t-1}) + (1-β) × b_{t-1}`
/// - Forecast: `ŷ_{t+h} = l_t + h × b_t`
///
/// The state is initialised with `l_0 = y_0` and `b_0 = y_1 - y_0`.
#[derive(Debug, Clone)]
pub struct HoltLinearTrend {
    /// Level smoothing parameter (0 < alpha <= 1).
    alpha: f64,
    /// Trend smoothing parameter (0 < beta <= 1).
    beta: f64,
    /// Final level state.
    level: Option<f64>,
    /// Final trend state.
    trend: Option<f64>,
    /// Fitted values.
    fitted: Option<Vec<f64>>,
    /// Residuals.
    residuals: Option<Vec<f64>>,
}

/// Holt's double exponential smoothing, under its other common name.
pub type HoltSmoothing = HoltLinearTrend;

impl HoltLinearTrend {
    /// Create a new Holt model with fixed parameters.
    ///
    /// # Arguments
    /// * `alpha` - Level smoothing parameter (0 < alpha <= 1)
    /// * `beta` - Trend smoothing parameter (0 < beta <= 1)
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        assert_smoothing_factor("Alpha", alpha)?;
        assert_smoothing_factor("Beta", beta)?;
        Ok(Self {
            alpha,
            beta,
            level: None,
            trend: None,
            fitted: None,
            residuals: None,
        })
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Get the final level.
    pub fn level(&self) -> Result<f64> {
        self.level.ok_or(ForecastError::FitRequired)
    }

    /// Get the final trend.
    pub fn trend(&self) -> Result<f64> {
        self.trend.ok_or(ForecastError::FitRequired)
    }

    /// Fit the model to `values`, replacing any previous state.
    ///
    /// Requires at least 2 observations.
    pub fn fit(&mut self, values: &[f64]) -> Result<()> {
        if values.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: values.len(),
            });
        }
        assert_finite_array(values)?;

        let mut level = values[0];
        let mut trend = values[1] - values[0];

        let mut fitted = Vec::with_capacity(values.len());
        let mut residuals = Vec::with_capacity(values.len());
        fitted.push(level);
        residuals.push(0.0);

        for &y in &values[1..] {
            let forecast = level + trend;
            fitted.push(forecast);
            residuals.push(y - forecast);

            let level_prev = level;
            level = self.alpha * y + (1.0 - self.alpha) * (level_prev + trend);
            trend = self.beta * (level - level_prev) + (1.0 - self.beta) * trend;
        }

        self.level = Some(level);
        self.trend = Some(trend);
        self.fitted = Some(fitted);
        self.residuals = Some(residuals);

        Ok(())
    }
}

impl Forecaster for HoltLinearTrend {
    fn forecast(&self, steps: usize) -> Result<Vec<f64>> {
        let level = self.level()?;
        let trend = self.trend()?;
        Ok((1..=steps).map(|h| level + h as f64 * trend).collect())
    }

    fn fitted_values(&self) -> Result<&[f64]> {
        self.fitted.as_deref().ok_or(ForecastError::FitRequired)
    }

    fn residuals(&self) -> Result<&[f64]> {
        self.residuals.as_deref().ok_or(ForecastError::FitRequired)
    }

    fn min_residual_index(&self) -> Result<usize> {
        // The prediction for y_1 is y_1 itself by construction of b_0.
        self.level()?;
        Ok(2)
    }

    fn name(&self) -> &str {
        "HoltLinearTrend"
    }
}
