//! Forecaster trait defining the common read-side interface of fitted models.

use crate::error::Result;

/// Common interface for batch smoothing models.
///
/// Fitting signatures differ between models (Holt-Winters additive takes the
/// seasonal period at fit time), so `fit` is an inherent method; everything
/// read after fitting goes through this trait.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Point forecasts for horizons `1..=steps` from the final fitted state.
    fn forecast(&self, steps: usize) -> Result<Vec<f64>>;

    /// One-step-ahead in-sample predictions, one per observation.
    fn fitted_values(&self) -> Result<&[f64]>;

    /// Residuals (actual - fitted), one per observation.
    fn residuals(&self) -> Result<&[f64]>;

    /// First index from which residuals are comparable across models.
    fn min_residual_index(&self) -> Result<usize>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.fitted_values().is_ok()
    }
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use anofox_smoothing::models::{BoxedForecaster, Forecaster};
/// use anofox_smoothing::models::exponential::SimpleExponentialSmoothing;
///
/// let model: BoxedForecaster = Box::new(SimpleExponentialSmoothing::new(0.3).unwrap());
/// assert_eq!(model.name(), "SimpleExponentialSmoothing");
/// assert!(!model.is_fitted());
/// ```
pub type BoxedForecaster = Box<dyn Forecaster>;
