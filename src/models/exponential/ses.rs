//! Simple Exponential Smoothing (SES) forecasting model.
//!
//! SES is suitable for forecasting data with no clear trend or seasonality.

use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::validation::{assert_finite_array, assert_smoothing_factor};

/// Simple Exponential Smoothing forecaster.
///
/// The model equation is:
/// `level_t = α × y_t + (1-α) × level_{t-1}`
///
/// where α (alpha) is the smoothing parameter (0 < α ≤ 1).
///
/// # Example
/// ```
/// use anofox_smoothing::models::exponential::SimpleExponentialSmoothing;
/// use anofox_smoothing::models::Forecaster;
///
/// let values = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0, 14.0, 16.0];
///
/// let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
/// model.fit(&values).unwrap();
///
/// let forecast = model.forecast(3).unwrap();
/// assert_eq!(forecast.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter (0 < alpha <= 1).
    alpha: f64,
    /// Final level state.
    level: Option<f64>,
    /// Fitted values.
    fitted: Option<Vec<f64>>,
    /// Residuals.
    residuals: Option<Vec<f64>>,
}

impl SimpleExponentialSmoothing {
    /// Create a new SES model with a fixed smoothing parameter.
    ///
    /// # Arguments
    /// * `alpha` - Smoothing parameter (0 < alpha <= 1)
    pub fn new(alpha: f64) -> Result<Self> {
        assert_smoothing_factor("Alpha", alpha)?;
        Ok(Self {
            alpha,
            level: None,
            fitted: None,
            residuals: None,
        })
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the final level.
    pub fn level(&self) -> Result<f64> {
        self.level.ok_or(ForecastError::FitRequired)
    }

    /// Fit the model to `values`, replacing any previous state.
    pub fn fit(&mut self, values: &[f64]) -> Result<()> {
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        assert_finite_array(values)?;

        // Initialize level with first observation
        let mut level = values[0];
        let mut fitted = Vec::with_capacity(values.len());
        let mut residuals = Vec::with_capacity(values.len());

        fitted.push(level);
        residuals.push(0.0);

        for &y in &values[1..] {
            fitted.push(level);
            residuals.push(y - level);
            level = self.alpha * y + (1.0 - self.alpha) * level;
        }

        self.level = Some(level);
        self.fitted = Some(fitted);
        self.residuals = Some(residuals);

        Ok(())
    }
}

impl Forecaster for SimpleExponentialSmoothing {
    fn forecast(&self, steps: usize) -> Result<Vec<f64>> {
        let level = self.level()?;
        // SES produces flat forecasts at the final level
        Ok(vec![level; steps])
    }

    fn fitted_values(&self) -> Result<&[f64]> {
        self.fitted.as_deref().ok_or(ForecastError::FitRequired)
    }

    fn residuals(&self) -> Result<&[f64]> {
        self.residuals.as_deref().ok_or(ForecastError::FitRequired)
    }

    fn min_residual_index(&self) -> Result<usize> {
        self.level()?;
        Ok(1)
    }

    fn name(&self) -> &str {
        "SimpleExponentialSmoothing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ses_with_fixed_alpha() {
        let values = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0, 14.0, 16.0];

        let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
        model.fit(&values).unwrap();

        assert_relative_eq!(model.alpha(), 0.3, epsilon = 1e-10);

        let preds = model.forecast(3).unwrap();
        assert_eq!(preds.len(), 3);
        assert_relative_eq!(preds[0], preds[1], epsilon = 1e-10);
        assert_relative_eq!(preds[1], preds[2], epsilon = 1e-10);
        assert_relative_eq!(preds[0], model.level().unwrap(), epsilon = 1e-10);
    }

    #[test]
    fn ses_recurrence() {
        let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
        model.fit(&[10.0, 20.0, 15.0]).unwrap();

        let fitted = model.fitted_values().unwrap();
        assert_eq!(fitted[0], 10.0);
        assert_relative_eq!(fitted[1], 10.0, epsilon = 1e-12);
        assert_relative_eq!(fitted[2], 13.0, epsilon = 1e-12);
        assert_relative_eq!(model.level().unwrap(), 13.6, epsilon = 1e-12);

        let residuals = model.residuals().unwrap();
        assert_relative_eq!(residuals[1], 10.0, epsilon = 1e-12);
        assert_relative_eq!(residuals[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn ses_constant_series() {
        let mut model = SimpleExponentialSmoothing::new(0.5).unwrap();
        model.fit(&[5.0; 10]).unwrap();

        for v in model.forecast(5).unwrap() {
            assert_relative_eq!(v, 5.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn ses_zero_horizon() {
        let mut model = SimpleExponentialSmoothing::new(0.5).unwrap();
        model.fit(&[1.0, 2.0, 3.0]).unwrap();
        assert!(model.forecast(0).unwrap().is_empty());
    }

    #[test]
    fn ses_single_point() {
        let mut model = SimpleExponentialSmoothing::new(0.5).unwrap();
        model.fit(&[42.0]).unwrap();
        assert_eq!(model.forecast(2).unwrap(), vec![42.0, 42.0]);
    }

    #[test]
    fn ses_empty_data() {
        let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
        assert_eq!(model.fit(&[]), Err(ForecastError::EmptyData));
    }

    #[test]
    fn ses_rejects_non_finite() {
        let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
        assert!(matches!(
            model.fit(&[1.0, f64::NAN]),
            Err(ForecastError::NonFiniteValue { index: 1, .. })
        ));
        assert!(!model.is_fitted());
    }

    #[test]
    fn ses_requires_fit() {
        let model = SimpleExponentialSmoothing::new(0.3).unwrap();
        assert_eq!(model.forecast(3), Err(ForecastError::FitRequired));
        assert_eq!(model.level(), Err(ForecastError::FitRequired));
    }

    #[test]
    fn ses_invalid_alpha() {
        assert!(SimpleExponentialSmoothing::new(0.0).is_err());
        assert!(SimpleExponentialSmoothing::new(1.2).is_err());
        assert!(SimpleExponentialSmoothing::new(f64::NAN).is_err());
        assert!(SimpleExponentialSmoothing::new(1.0).is_ok());
    }

    #[test]
    fn ses_name() {
        let model = SimpleExponentialSmoothing::new(0.3).unwrap();
        assert_eq!(model.name(), "SimpleExponentialSmoothing");
    }
}
