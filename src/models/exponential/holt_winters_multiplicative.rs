//! Multiplicative Holt-Winters model.
//!
//! Seasonal effects scale with the level, so every observation must be
//! strictly positive: the recursion divides by both the seasonal factor and
//! the level.

use super::holt_winters::{SeasonalState, SeasonalType, SmoothingParams};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;

/// Configuration for [`HoltWintersMultiplicative`].
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWintersConfig {
    /// Level smoothing factor in (0, 1].
    pub alpha: f64,
    /// Trend smoothing factor in (0, 1].
    pub beta: f64,
    /// Seasonal smoothing factor in (0, 1].
    pub gamma: f64,
    /// Length of one seasonal cycle, at least 2.
    pub seasonal_period: usize,
}

impl Default for HoltWintersConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.1,
            seasonal_period: 12,
        }
    }
}

impl HoltWintersConfig {
    pub fn new(alpha: f64, beta: f64, gamma: f64, seasonal_period: usize) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            seasonal_period,
        }
    }
}

/// Multiplicative Holt-Winters forecaster.
///
/// - Level: `l_t = α(y_t / s_t) + (1-α)(l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
/// - Seasonal: `s_t = γ(y_t / l_t) + (1-γ)s_t`
/// - Forecast: `ŷ_{n+h} = (l_n + h*b_n) * s_{(n-1+h) mod m}`
///
/// Seasonal factors average to 1 after initialisation and are not
/// renormalised afterwards.
///
/// # Example
/// ```
/// use anofox_smoothing::models::exponential::{HoltWintersConfig, HoltWintersMultiplicative};
/// use anofox_smoothing::models::Forecaster;
///
/// let factors = [1.2, 0.8, 0.9, 1.1];
/// let values: Vec<f64> = (0..24).map(|t| (100.0 + 2.0 * t as f64) * factors[t % 4]).collect();
///
/// let mut model = HoltWintersMultiplicative::new(HoltWintersConfig::new(0.3, 0.1, 0.2, 4)).unwrap();
/// model.fit(&values).unwrap();
/// assert_eq!(model.forecast(4).unwrap().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct HoltWintersMultiplicative {
    params: SmoothingParams,
    seasonal_period: usize,
    state: Option<SeasonalState>,
}

impl HoltWintersMultiplicative {
    /// Create a new multiplicative Holt-Winters model.
    pub fn new(config: HoltWintersConfig) -> Result<Self> {
        let params = SmoothingParams::new(config.alpha, config.beta, config.gamma)?;
        if config.seasonal_period < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "Seasonal period must be at least 2, got {}",
                config.seasonal_period
            )));
        }
        Ok(Self {
            params,
            seasonal_period: config.seasonal_period,
            state: None,
        })
    }

    /// Fit the model, replacing any previous state.
    ///
    /// Fails before touching state if the series is too short, contains a
    /// non-finite value, or contains a value that is zero or negative.
    pub fn fit(&mut self, values: &[f64]) -> Result<()> {
        let state = SeasonalState::fit(
            values,
            self.seasonal_period,
            self.params,
            SeasonalType::Multiplicative,
        )?;
        self.state = Some(state);
        Ok(())
    }

    pub fn alpha(&self) -> f64 {
        self.params.alpha
    }

    pub fn beta(&self) -> f64 {
        self.params.beta
    }

    pub fn gamma(&self) -> f64 {
        self.params.gamma
    }

    /// Get the seasonal period.
    pub fn seasonal_period(&self) -> usize {
        self.seasonal_period
    }

    /// Get the final level.
    pub fn level(&self) -> Result<f64> {
        Ok(self.state()?.level)
    }

    /// Get the final trend.
    pub fn trend(&self) -> Result<f64> {
        Ok(self.state()?.trend)
    }

    /// Get the seasonal factors, indexed by position in the cycle.
    pub fn seasonal_indices(&self) -> Result<&[f64]> {
        Ok(&self.state()?.seasonals)
    }

    fn state(&self) -> Result<&SeasonalState> {
        self.state.as_ref().ok_or(ForecastError::FitRequired)
    }
}

impl Forecaster for HoltWintersMultiplicative {
    fn forecast(&self, steps: usize) -> Result<Vec<f64>> {
        Ok(self.state()?.forecast(steps, SeasonalType::Multiplicative))
    }

    fn fitted_values(&self) -> Result<&[f64]> {
        Ok(&self.state()?.fitted)
    }

    fn residuals(&self) -> Result<&[f64]> {
        Ok(&self.state()?.residuals)
    }

    fn min_residual_index(&self) -> Result<usize> {
        self.state()?;
        Ok(self.seasonal_period)
    }

    fn name(&self) -> &str {
        "HoltWinters(multiplicative)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn multiplicative_data(n: usize) -> Vec<f64> {
        let factors = [1.2, 0.8, 0.9, 1.1];
        (0..n)
            .map(|t| (100.0 + 2.0 * t as f64) * factors[t % 4])
            .collect()
    }

    fn model(alpha: f64, beta: f64, gamma: f64, period: usize) -> HoltWintersMultiplicative {
        HoltWintersMultiplicative::new(HoltWintersConfig::new(alpha, beta, gamma, period)).unwrap()
    }

    #[test]
    fn hw_multiplicative_basic() {
        let values = multiplicative_data(32);
        let mut hw = model(0.3, 0.1, 0.1, 4);
        hw.fit(&values).unwrap();

        let fitted = hw.fitted_values().unwrap();
        assert_eq!(fitted.len(), 32);
        assert!(fitted[0].is_nan());
        assert!(fitted[1..].iter().all(|f| f.is_finite()));
        assert_eq!(hw.min_residual_index().unwrap(), 4);
        assert_eq!(hw.seasonal_indices().unwrap().len(), 4);
    }

    #[test]
    fn hw_multiplicative_seasonals_start_at_mean_one() {
        let values = multiplicative_data(16);
        let (level, trend, seasonals) =
            SeasonalState::initialize_state(&values, 4, SeasonalType::Multiplicative);

        assert_relative_eq!(level, 102.95, epsilon = 1e-10);
        assert_relative_eq!(trend, 2.0, epsilon = 1e-10);
        let mean: f64 = seasonals.iter().sum::<f64>() / 4.0;
        assert_relative_eq!(mean, 1.0, epsilon = 1e-12);
        assert!(seasonals[0] > seasonals[3] && seasonals[3] > seasonals[2]);
        assert!(seasonals[2] > seasonals[1]);
    }

    #[test]
    fn hw_multiplicative_seasonals_drift_after_online_updates() {
        let values: Vec<f64> = (0..200)
            .map(|t| {
                let seasonal = 10.0 * (2.0 * std::f64::consts::PI * t as f64 / 6.0).sin();
                let noise = (((t * 37) % 11) as f64 - 5.0) * 1.5;
                100.0 + 0.5 * t as f64 + seasonal + noise
            })
            .collect();

        let (_, _, initial) =
            SeasonalState::initialize_state(&values, 6, SeasonalType::Multiplicative);
        assert_relative_eq!(initial.iter().sum::<f64>() / 6.0, 1.0, epsilon = 1e-10);

        let mut hw = model(0.3, 0.1, 0.7, 6);
        hw.fit(&values).unwrap();
        let fitted_mean = hw.seasonal_indices().unwrap().iter().sum::<f64>() / 6.0;
        assert!((fitted_mean - 1.0).abs() > 0.005, "seasonal mean {fitted_mean}");
    }

    #[test]
    fn hw_multiplicative_tracks_pattern() {
        let values = multiplicative_data(48);
        let mut hw = model(0.4, 0.1, 0.3, 4);
        hw.fit(&values).unwrap();

        let preds = hw.forecast(4).unwrap();
        let actual: Vec<f64> = (48..52)
            .map(|t| (100.0 + 2.0 * t as f64) * [1.2, 0.8, 0.9, 1.1][t % 4])
            .collect();
        for (p, a) in preds.iter().zip(actual.iter()) {
            assert!((p - a).abs() / a < 0.05, "forecast {p} vs actual {a}");
        }
    }

    #[test]
    fn hw_multiplicative_seasonal_ratio_is_periodic() {
        let values = multiplicative_data(40);
        let mut hw = model(0.3, 0.1, 0.2, 4);
        hw.fit(&values).unwrap();

        let m = 4;
        let level = hw.level().unwrap();
        let trend = hw.trend().unwrap();
        let preds = hw.forecast(4 * m).unwrap();
        let factor = |h: usize| preds[h - 1] / (level + h as f64 * trend);

        for h in 1..=3 * m {
            assert_relative_eq!(factor(h), factor(h + m), epsilon = 1e-9);
        }
    }

    #[test]
    fn hw_multiplicative_rejects_non_positive() {
        let mut hw = model(0.3, 0.1, 0.3, 4);

        let mut values = multiplicative_data(16);
        values[5] = 0.0;
        assert_eq!(
            hw.fit(&values),
            Err(ForecastError::NonPositiveValue {
                index: 5,
                value: 0.0
            })
        );

        values[5] = -3.0;
        assert!(matches!(
            hw.fit(&values),
            Err(ForecastError::NonPositiveValue { index: 5, .. })
        ));
        assert!(!hw.is_fitted());

        assert!(hw.fit(&multiplicative_data(16)).is_ok());
    }

    #[test]
    fn hw_multiplicative_checks_length_before_positivity() {
        let mut hw = model(0.3, 0.1, 0.3, 4);
        assert_eq!(
            hw.fit(&[-1.0, 2.0, 3.0]),
            Err(ForecastError::InsufficientData { needed: 8, got: 3 })
        );
    }

    #[test]
    fn hw_multiplicative_invalid_config() {
        let err = HoltWintersMultiplicative::new(HoltWintersConfig::new(0.3, 0.1, 0.1, 1))
            .unwrap_err();
        assert!(err.to_string().contains("Seasonal period must be at least 2"));

        let err = HoltWintersMultiplicative::new(HoltWintersConfig::new(0.3, 0.0, 0.1, 4))
            .unwrap_err();
        assert!(err.to_string().contains("Beta must be in (0, 1]"));
    }

    #[test]
    fn hw_multiplicative_requires_fit() {
        let hw = model(0.3, 0.1, 0.1, 4);
        assert_eq!(hw.forecast(4), Err(ForecastError::FitRequired));
        assert_eq!(hw.min_residual_index(), Err(ForecastError::FitRequired));
    }

    #[test]
    fn hw_config_default() {
        let config = HoltWintersConfig::default();
        assert_eq!(config.seasonal_period, 12);
        let hw = HoltWintersMultiplicative::new(config).unwrap();
        assert_eq!(hw.seasonal_period(), 12);
        assert_eq!(hw.name(), "HoltWinters(multiplicative)");
    }
}
