//! Exponentially weighted moving average (EWMA).
//!
//! An incremental single-state smoother: `S_t = α x_t + (1 - α) S_{t-1}`.
//! Each update is O(1) in time and memory; no history is retained.

use crate::error::{ForecastError, Result};
use crate::utils::validation::assert_smoothing_factor;

/// Configuration for [`Ewma`].
#[derive(Debug, Clone, PartialEq)]
pub struct EwmaConfig {
    /// Smoothing factor in (0, 1]. Larger values track recent data faster.
    pub alpha: f64,
    /// Optional seed for the smoothed value. Without it the first
    /// observation becomes the initial value.
    pub initial_value: Option<f64>,
}

impl EwmaConfig {
    /// Create a config with the given smoothing factor and no seed.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            initial_value: None,
        }
    }

    /// Seed the smoothed value.
    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }
}

/// Incremental exponentially weighted moving average.
///
/// # Example
/// ```
/// use anofox_smoothing::models::exponential::{Ewma, EwmaConfig};
///
/// let mut ewma = Ewma::new(EwmaConfig::new(0.3)).unwrap();
/// assert_eq!(ewma.update(10.0).unwrap(), 10.0);
/// assert!((ewma.update(20.0).unwrap() - 13.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Ewma {
    alpha: f64,
    value: Option<f64>,
    count: usize,
}

impl Ewma {
    /// Create a new EWMA, validating the smoothing factor and seed.
    pub fn new(config: EwmaConfig) -> Result<Self> {
        assert_smoothing_factor("Alpha", config.alpha)?;
        if let Some(initial) = config.initial_value {
            Self::check_finite(initial, "Initial value")?;
        }
        Ok(Self {
            alpha: config.alpha,
            value: config.initial_value,
            count: 0,
        })
    }

    /// Shorthand for an unseeded EWMA.
    pub fn with_alpha(alpha: f64) -> Result<Self> {
        Self::new(EwmaConfig::new(alpha))
    }

    /// Feed one observation and return the new smoothed value.
    ///
    /// Non-finite observations are rejected and leave the state unchanged.
    pub fn update(&mut self, x: f64) -> Result<f64> {
        Self::check_finite(x, "Observation")?;
        let next = match self.value {
            None => x,
            Some(prev) => self.alpha * x + (1.0 - self.alpha) * prev,
        };
        self.value = Some(next);
        self.count += 1;
        Ok(next)
    }

    /// Current smoothed value, `None` before the first update (unless seeded).
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Smoothing factor.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of observations seen since construction or the last reset.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Clear the smoothed value and counter, optionally re-seeding.
    pub fn reset(&mut self, initial_value: Option<f64>) -> Result<()> {
        if let Some(initial) = initial_value {
            Self::check_finite(initial, "Initial value")?;
        }
        self.value = initial_value;
        self.count = 0;
        Ok(())
    }

    fn check_finite(x: f64, what: &str) -> Result<()> {
        if x.is_finite() {
            Ok(())
        } else {
            Err(ForecastError::InvalidParameter(format!(
                "{} must be finite, got {}",
                what, x
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ewma_known_sequence() {
        let mut ewma = Ewma::with_alpha(0.3).unwrap();
        assert_relative_eq!(ewma.update(10.0).unwrap(), 10.0, epsilon = 1e-5);
        assert_relative_eq!(ewma.update(20.0).unwrap(), 13.0, epsilon = 1e-5);
        assert_relative_eq!(ewma.update(15.0).unwrap(), 13.6, epsilon = 1e-5);
        assert_eq!(ewma.count(), 3);
    }

    #[test]
    fn first_update_returns_input() {
        for alpha in [0.01, 0.3, 0.5, 1.0] {
            let mut ewma = Ewma::with_alpha(alpha).unwrap();
            assert_eq!(ewma.value(), None);
            assert_eq!(ewma.update(42.5).unwrap(), 42.5);
        }
    }

    #[test]
    fn alpha_one_tracks_latest_value() {
        let mut ewma = Ewma::with_alpha(1.0).unwrap();
        for x in [3.0, -7.25, 100.0, 0.5] {
            assert_eq!(ewma.update(x).unwrap(), x);
        }
    }

    #[test]
    fn invalid_alpha_rejected() {
        for alpha in [0.0, -0.1, 1.0001, f64::NAN] {
            let err = Ewma::with_alpha(alpha).unwrap_err();
            assert!(err.to_string().contains("Alpha must be in (0, 1]"));
        }
    }

    #[test]
    fn seeded_ewma_smooths_first_observation() {
        let mut ewma = Ewma::new(EwmaConfig::new(0.5).with_initial_value(10.0)).unwrap();
        assert_eq!(ewma.value(), Some(10.0));
        assert_eq!(ewma.count(), 0);
        assert_relative_eq!(ewma.update(20.0).unwrap(), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_seed_rejected() {
        assert!(Ewma::new(EwmaConfig::new(0.5).with_initial_value(f64::NAN)).is_err());
    }

    #[test]
    fn non_finite_update_leaves_state_untouched() {
        let mut ewma = Ewma::with_alpha(0.5).unwrap();
        ewma.update(4.0).unwrap();
        assert!(ewma.update(f64::INFINITY).is_err());
        assert_eq!(ewma.value(), Some(4.0));
        assert_eq!(ewma.count(), 1);
    }

    #[test]
    fn reset_clears_and_reseeds() {
        let mut ewma = Ewma::with_alpha(0.2).unwrap();
        ewma.update(1.0).unwrap();
        ewma.update(2.0).unwrap();

        ewma.reset(None).unwrap();
        assert_eq!(ewma.value(), None);
        assert_eq!(ewma.count(), 0);
        assert_eq!(ewma.update(9.0).unwrap(), 9.0);

        ewma.reset(Some(100.0)).unwrap();
        assert_eq!(ewma.value(), Some(100.0));
        assert_relative_eq!(ewma.update(0.0).unwrap(), 80.0, epsilon = 1e-12);
    }
}
