//! Holt-Winters forecasting model.
//!
//! Also known as triple exponential smoothing, this model handles
//! data with both trend and seasonality. The recursion shared by the
//! additive and multiplicative variants lives here; the multiplicative
//! front-end is in `holt_winters_multiplicative`.

use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::seasonal::{
    normalize_seasonal_additive, normalize_seasonal_multiplicative, season_at_horizon,
    season_index,
};
use crate::utils::validation::{
    assert_finite_array, assert_seasonal_period, assert_smoothing_factor,
    assert_strictly_positive,
};

/// Type of seasonal component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonalType {
    /// Additive seasonality: y_t = l_t + b_t + s_t + e_t
    #[default]
    Additive,
    /// Multiplicative seasonality: y_t = (l_t + b_t) * s_t + e_t
    Multiplicative,
}

impl SeasonalType {
    /// Removes the seasonal effect `s` from `y`.
    #[inline]
    fn deseasonalize(self, y: f64, s: f64) -> f64 {
        match self {
            SeasonalType::Additive => y - s,
            SeasonalType::Multiplicative => y / s,
        }
    }

    /// Applies the seasonal effect `s` to a level-plus-trend value.
    #[inline]
    fn combine(self, base: f64, s: f64) -> f64 {
        match self {
            SeasonalType::Additive => base + s,
            SeasonalType::Multiplicative => base * s,
        }
    }
}

/// Validated (alpha, beta, gamma) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SmoothingParams {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl SmoothingParams {
    pub(crate) fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        assert_smoothing_factor("Alpha", alpha)?;
        assert_smoothing_factor("Beta", beta)?;
        assert_smoothing_factor("Gamma", gamma)?;
        Ok(Self { alpha, beta, gamma })
    }
}

/// Final state of a Holt-Winters pass over a series.
#[derive(Debug, Clone)]
pub(crate) struct SeasonalState {
    pub level: f64,
    pub trend: f64,
    pub seasonals: Vec<f64>,
    pub fitted: Vec<f64>,
    pub residuals: Vec<f64>,
    pub period: usize,
    pub n: usize,
}

impl SeasonalState {
    /// Runs initialisation and the single-pass update over `values`.
    ///
    /// Validation happens before any arithmetic: period, length,
    /// finiteness, then positivity for the multiplicative form.
    pub(crate) fn fit(
        values: &[f64],
        period: usize,
        params: SmoothingParams,
        seasonal_type: SeasonalType,
    ) -> Result<Self> {
        assert_seasonal_period(period, values.len())?;
        assert_finite_array(values)?;
        if seasonal_type == SeasonalType::Multiplicative {
            assert_strictly_positive(values)?;
        }

        let (mut level, mut trend, mut seasonals) =
            Self::initialize_state(values, period, seasonal_type);
        if !level.is_finite() || !trend.is_finite() || seasonals.iter().any(|s| !s.is_finite()) {
            return Err(ForecastError::ComputationError(
                "Holt-Winters initialisation produced non-finite state".to_string(),
            ));
        }

        let SmoothingParams { alpha, beta, gamma } = params;
        let n = values.len();
        let mut fitted = Vec::with_capacity(n);
        let mut residuals = Vec::with_capacity(n);

        // No state precedes the first observation.
        fitted.push(f64::NAN);
        residuals.push(f64::NAN);

        for (t, &y) in values.iter().enumerate().skip(1) {
            let slot = season_index(t, period);
            let s = seasonals[slot];

            let forecast = seasonal_type.combine(level + trend, s);
            fitted.push(forecast);
            residuals.push(y - forecast);

            let level_prev = level;
            level = alpha * seasonal_type.deseasonalize(y, s)
                + (1.0 - alpha) * (level_prev + trend);
            trend = beta * (level - level_prev) + (1.0 - beta) * trend;
            seasonals[slot] =
                gamma * seasonal_type.deseasonalize(y, level) + (1.0 - gamma) * s;

            if !forecast.is_finite()
                || !level.is_finite()
                || !trend.is_finite()
                || !seasonals[slot].is_finite()
            {
                return Err(ForecastError::ComputationError(format!(
                    "Holt-Winters state became non-finite at index {}",
                    t
                )));
            }
        }

        Ok(Self {
            level,
            trend,
            seasonals,
            fitted,
            residuals,
            period,
            n,
        })
    }

    /// Initial level, trend and seasonal indices from the first two cycles.
    ///
    /// - Level: mean of the first cycle.
    /// - Trend: mean over positions of `(y[m + i] - y[i]) / m`.
    /// - Seasonals: the first `2m` points are compared against the linear
    ///   baseline `l + b t`, averaged by position and normalised.
    pub(crate) fn initialize_state(
        values: &[f64],
        period: usize,
        seasonal_type: SeasonalType,
    ) -> (f64, f64, Vec<f64>) {
        let m = period as f64;
        let level = values[..period].iter().sum::<f64>() / m;
        let trend = (0..period)
            .map(|i| (values[period + i] - values[i]) / m)
            .sum::<f64>()
            / m;

        let mut raw = vec![0.0; period];
        for (t, &y) in values[..2 * period].iter().enumerate() {
            let baseline = level + trend * t as f64;
            raw[season_index(t, period)] += seasonal_type.deseasonalize(y, baseline);
        }
        // Each position is visited exactly twice.
        for s in raw.iter_mut() {
            *s /= 2.0;
        }

        let seasonals = match seasonal_type {
            SeasonalType::Additive => normalize_seasonal_additive(&raw),
            SeasonalType::Multiplicative => normalize_seasonal_multiplicative(&raw),
        };

        (level, trend, seasonals)
    }

    pub(crate) fn forecast(&self, steps: usize, seasonal_type: SeasonalType) -> Vec<f64> {
        (1..=steps)
            .map(|h| {
                let s = self.seasonals[season_at_horizon(self.n - 1, h, self.period)];
                seasonal_type.combine(self.level + h as f64 * self.trend, s)
            })
            .collect()
    }
}

/// Additive Holt-Winters forecaster.
///
/// The model equations:
/// - Level: `l_t = α(y_t - s_t) + (1-α)(l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
/// - Seasonal: `s_t = γ(y_t - l_t) + (1-γ)s_t`
/// - Forecast: `ŷ_{n+h} = l_n + h*b_n + s_{(n-1+h) mod m}`
///
/// Seasonal indices are centred on zero once, at initialisation; the online
/// updates do not renormalise them.
///
/// # Example
/// ```
/// use anofox_smoothing::models::exponential::HoltWintersAdditive;
/// use anofox_smoothing::models::Forecaster;
///
/// let pattern = [5.0, -2.0, -4.0, 1.0];
/// let values: Vec<f64> = (0..24).map(|t| 20.0 + t as f64 + pattern[t % 4]).collect();
///
/// let mut model = HoltWintersAdditive::new(0.3, 0.1, 0.2).unwrap();
/// model.fit(&values, 4).unwrap();
///
/// assert!(model.fitted_values().unwrap()[0].is_nan());
/// assert_eq!(model.min_residual_index().unwrap(), 4);
/// assert_eq!(model.forecast(8).unwrap().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct HoltWintersAdditive {
    params: SmoothingParams,
    state: Option<SeasonalState>,
}

impl HoltWintersAdditive {
    /// Create a new additive Holt-Winters model.
    ///
    /// Each smoothing factor must lie in (0, 1].
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        Ok(Self {
            params: SmoothingParams::new(alpha, beta, gamma)?,
            state: None,
        })
    }

    /// Fit the model with the given seasonal period, replacing any previous
    /// state. On error the previous state is kept.
    pub fn fit(&mut self, values: &[f64], seasonal_period: usize) -> Result<()> {
        let state = SeasonalState::fit(
            values,
            seasonal_period,
            self.params,
            SeasonalType::Additive,
        )?;
        self.state = Some(state);
        Ok(())
    }

    /// Get the smoothing parameters.
    pub fn alpha(&self) -> f64 {
        self.params.alpha
    }

    pub fn beta(&self) -> f64 {
        self.params.beta
    }

    pub fn gamma(&self) -> f64 {
        self.params.gamma
    }

    /// Seasonal period used by the last fit.
    pub fn seasonal_period(&self) -> Result<usize> {
        Ok(self.state()?.period)
    }

    /// Get the final level.
    pub fn level(&self) -> Result<f64> {
        Ok(self.state()?.level)
    }

    /// Get the final trend.
    pub fn trend(&self) -> Result<f64> {
        Ok(self.state()?.trend)
    }

    /// Get the seasonal indices, indexed by position in the cycle.
    pub fn seasonal_indices(&self) -> Result<&[f64]> {
        Ok(&self.state()?.seasonals)
    }

    fn state(&self) -> Result<&SeasonalState> {
        self.state.as_ref().ok_or(ForecastError::FitRequired)
    }
}

impl Forecaster for HoltWintersAdditive {
    fn forecast(&self, steps: usize) -> Result<Vec<f64>> {
        Ok(self.state()?.forecast(steps, SeasonalType::Additive))
    }

    fn fitted_values(&self) -> Result<&[f64]> {
        Ok(&self.state()?.fitted)
    }

    fn residuals(&self) -> Result<&[f64]> {
        Ok(&self.state()?.residuals)
    }

    fn min_residual_index(&self) -> Result<usize> {
        Ok(self.state()?.period)
    }

    fn name(&self) -> &str {
        "HoltWinters(additive)"
    }
}
