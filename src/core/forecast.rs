//! Forecast result structure for holding predictions with intervals.

use crate::error::{ForecastError, Result};

/// Point forecasts with lower and upper prediction bounds.
///
/// The three series always have the same length, one entry per horizon step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastInterval {
    forecast: Vec<f64>,
    lower: Vec<f64>,
    upper: Vec<f64>,
    level: f64,
}

impl ForecastInterval {
    /// Create an empty interval for the given confidence level.
    pub fn empty(level: f64) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Create an interval from parallel series.
    pub fn new(forecast: Vec<f64>, lower: Vec<f64>, upper: Vec<f64>, level: f64) -> Result<Self> {
        if lower.len() != forecast.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: forecast.len(),
                got: lower.len(),
            });
        }
        if upper.len() != forecast.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: forecast.len(),
                got: upper.len(),
            });
        }
        Ok(Self {
            forecast,
            lower,
            upper,
            level,
        })
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.forecast.len()
    }

    /// Check if the interval is empty.
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Point forecasts.
    pub fn forecast(&self) -> &[f64] {
        &self.forecast
    }

    /// Lower bounds.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper bounds.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Confidence level the bounds were computed for.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Width of the interval at each step.
    pub fn widths(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(self.lower.iter())
            .map(|(u, l)| u - l)
            .collect()
    }

    /// Consume the interval, returning `(forecast, lower, upper)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.forecast, self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_accessors() {
        let interval =
            ForecastInterval::new(vec![1.0, 2.0], vec![0.5, 1.0], vec![1.5, 3.0], 0.9).unwrap();

        assert_eq!(interval.horizon(), 2);
        assert!(!interval.is_empty());
        assert_eq!(interval.forecast(), &[1.0, 2.0]);
        assert_eq!(interval.widths(), vec![1.0, 2.0]);
        assert_eq!(interval.level(), 0.9);

        let (forecast, lower, upper) = interval.into_parts();
        assert_eq!(forecast.len(), lower.len());
        assert_eq!(lower.len(), upper.len());
    }

    #[test]
    fn interval_rejects_mismatched_lengths() {
        let err = ForecastInterval::new(vec![1.0, 2.0], vec![0.5], vec![1.5, 3.0], 0.9);
        assert_eq!(
            err,
            Err(ForecastError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn empty_interval() {
        let interval = ForecastInterval::empty(0.95);
        assert!(interval.is_empty());
        assert!(interval.lower().is_empty());
        assert!(interval.upper().is_empty());
        assert_eq!(interval.level(), 0.95);
    }
}
