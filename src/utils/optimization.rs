//! Grid-search parameter optimization for Holt-Winters models.
//!
//! The search runs in two stages over the (alpha, beta, gamma) cube:
//!
//! 1. A coarse exhaustive sweep (`0.1, 0.2, ..., 0.9` by default).
//! 2. A finer sweep in a window around the coarse optimum, clamped to
//!    `[0.01, 0.99]`. Its best point is adopted only if it strictly beats
//!    the coarse optimum.
//!
//! Candidates are scored by SSE over the residual window starting at the
//! model's `min_residual_index`. The iteration order is fixed (alpha, then
//! beta, then gamma, each ascending) and only a strictly lower SSE replaces
//! the incumbent, so ties resolve to the first candidate visited.

use tracing::{debug, trace};

use crate::error::{ForecastError, Result};
use crate::models::exponential::{
    HoltWintersAdditive, HoltWintersConfig, HoltWintersMultiplicative, SeasonalType,
};
use crate::models::BoxedForecaster;
use crate::utils::scoring::{score_model, ModelScore};
use crate::utils::validation::{assert_finite_array, assert_seasonal_period};

/// Lower clamp for refined grid values.
const REFINED_MIN: f64 = 0.01;
/// Upper clamp for refined grid values.
const REFINED_MAX: f64 = 0.99;
/// Tolerance used when stepping grids in floating point.
const GRID_EPS: f64 = 1e-9;
/// Smoothing parameters estimated by every candidate.
const NUM_PARAMS: usize = 3;

/// Configuration for [`optimize_parameters`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    /// Spacing of the coarse grid (default: 0.1).
    pub coarse_step: f64,
    /// Spacing of the refined grid (default: 0.02).
    pub refined_step: f64,
    /// Half-width of the refined window around each coarse optimum (default: 0.08).
    pub refined_range: f64,
    /// Stop after the coarse stage (default: false).
    pub skip_refinement: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            coarse_step: 0.1,
            refined_step: 0.02,
            refined_range: 0.08,
            skip_refinement: false,
        }
    }
}

impl OptimizerConfig {
    /// Coarse-only search with default steps.
    pub fn coarse_only() -> Self {
        Self {
            skip_refinement: true,
            ..Default::default()
        }
    }

    pub fn with_coarse_step(mut self, step: f64) -> Self {
        self.coarse_step = step;
        self
    }

    pub fn with_refined_step(mut self, step: f64) -> Self {
        self.refined_step = step;
        self
    }

    pub fn with_refined_range(mut self, range: f64) -> Self {
        self.refined_range = range;
        self
    }

    pub fn with_skip_refinement(mut self, skip: bool) -> Self {
        self.skip_refinement = skip;
        self
    }

    fn validate(&self) -> Result<()> {
        for (name, step) in [
            ("Coarse step", self.coarse_step),
            ("Refined step", self.refined_step),
        ] {
            if !step.is_finite() || step <= 0.0 || step >= 1.0 {
                return Err(ForecastError::InvalidParameter(format!(
                    "{} must be in (0, 1), got {}",
                    name, step
                )));
            }
        }
        if !self.refined_range.is_finite() || self.refined_range < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Refined range must be non-negative, got {}",
                self.refined_range
            )));
        }
        Ok(())
    }
}

/// Best parameters found by [`optimize_parameters`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Level smoothing factor.
    pub alpha: f64,
    /// Trend smoothing factor.
    pub beta: f64,
    /// Seasonal smoothing factor.
    pub gamma: f64,
    /// SSE of the winning candidate.
    pub sse: f64,
    /// AIC of the winning candidate.
    pub aic: f64,
    /// Parameter combinations attempted across both stages, including
    /// candidates whose fit failed.
    pub evaluated: usize,
    /// Whether the refined stage improved on the coarse optimum.
    pub refined: bool,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    alpha: f64,
    beta: f64,
    gamma: f64,
    sse: f64,
    aic: f64,
}

/// Searches smoothing parameters minimising SSE for a Holt-Winters model.
///
/// Input validation (seasonal period, length, finiteness, config) is fatal.
/// A candidate whose fit fails, for example multiplicative input that breaks
/// positivity or a recursion that diverges, is skipped. If every coarse
/// candidate is skipped, the first coarse grid point is returned with
/// infinite `sse` and `aic` and the refined stage does not run.
///
/// # Example
/// ```
/// use anofox_smoothing::models::exponential::SeasonalType;
/// use anofox_smoothing::utils::optimization::{optimize_parameters, OptimizerConfig};
///
/// let pattern = [4.0, -1.0, -3.0, 0.0];
/// let values: Vec<f64> = (0..32).map(|t| 50.0 + 0.5 * t as f64 + pattern[t % 4]).collect();
///
/// let result = optimize_parameters(&values, 4, SeasonalType::Additive, &OptimizerConfig::coarse_only())
///     .unwrap();
/// assert_eq!(result.evaluated, 729);
/// ```
pub fn optimize_parameters(
    values: &[f64],
    seasonal_period: usize,
    seasonal_type: SeasonalType,
    config: &OptimizerConfig,
) -> Result<OptimizationResult> {
    assert_seasonal_period(seasonal_period, values.len())?;
    assert_finite_array(values)?;
    config.validate()?;

    debug!(
        seasonal_period,
        data_length = values.len(),
        seasonal_type = ?seasonal_type,
        skip_refinement = config.skip_refinement,
        "Holt-Winters grid search"
    );

    let mut evaluated = 0;
    let coarse = coarse_grid(config.coarse_step);
    let Some(coarse_best) = search(
        values,
        seasonal_period,
        seasonal_type,
        [&coarse[..], &coarse[..], &coarse[..]],
        &mut evaluated,
    ) else {
        // Nothing fit, so there is no optimum to refine around.
        let fallback = coarse.first().copied().unwrap_or(config.coarse_step);
        debug!(evaluated, fallback, "no candidate produced a finite fit");
        return Ok(OptimizationResult {
            alpha: fallback,
            beta: fallback,
            gamma: fallback,
            sse: f64::INFINITY,
            aic: f64::INFINITY,
            evaluated,
            refined: false,
        });
    };

    debug!(
        alpha = coarse_best.alpha,
        beta = coarse_best.beta,
        gamma = coarse_best.gamma,
        sse = coarse_best.sse,
        evaluated,
        "coarse stage complete"
    );

    let mut best = coarse_best;
    let mut refined = false;

    if !config.skip_refinement {
        let alphas = refined_grid(coarse_best.alpha, config.refined_step, config.refined_range);
        let betas = refined_grid(coarse_best.beta, config.refined_step, config.refined_range);
        let gammas = refined_grid(coarse_best.gamma, config.refined_step, config.refined_range);

        if let Some(candidate) = search(
            values,
            seasonal_period,
            seasonal_type,
            [&alphas[..], &betas[..], &gammas[..]],
            &mut evaluated,
        ) {
            if candidate.sse < coarse_best.sse {
                best = candidate;
                refined = true;
            }
        }

        debug!(
            alpha = best.alpha,
            beta = best.beta,
            gamma = best.gamma,
            sse = best.sse,
            refined,
            evaluated,
            "refined stage complete"
        );
    }

    Ok(OptimizationResult {
        alpha: best.alpha,
        beta: best.beta,
        gamma: best.gamma,
        sse: best.sse,
        aic: best.aic,
        evaluated,
        refined,
    })
}

/// Exhaustive search over the Cartesian product of the three grids.
fn search(
    values: &[f64],
    seasonal_period: usize,
    seasonal_type: SeasonalType,
    [alphas, betas, gammas]: [&[f64]; 3],
    evaluated: &mut usize,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for &alpha in alphas {
        for &beta in betas {
            for &gamma in gammas {
                *evaluated += 1;
                match evaluate(values, seasonal_period, seasonal_type, alpha, beta, gamma) {
                    Ok(score) if score.sse.is_finite() => {
                        if best.map_or(true, |b| score.sse < b.sse) {
                            best = Some(Candidate {
                                alpha,
                                beta,
                                gamma,
                                sse: score.sse,
                                aic: score.aic,
                            });
                        }
                    }
                    Ok(score) => {
                        trace!(alpha, beta, gamma, sse = score.sse, "skipping non-finite SSE");
                    }
                    Err(err) => {
                        trace!(alpha, beta, gamma, error = %err, "skipping candidate");
                    }
                }
            }
        }
    }

    best
}

fn evaluate(
    values: &[f64],
    seasonal_period: usize,
    seasonal_type: SeasonalType,
    alpha: f64,
    beta: f64,
    gamma: f64,
) -> Result<ModelScore> {
    let model = fit_candidate(values, seasonal_period, seasonal_type, alpha, beta, gamma)?;
    Ok(score_model(
        model.residuals()?,
        model.min_residual_index()?,
        NUM_PARAMS,
    ))
}

fn fit_candidate(
    values: &[f64],
    seasonal_period: usize,
    seasonal_type: SeasonalType,
    alpha: f64,
    beta: f64,
    gamma: f64,
) -> Result<BoxedForecaster> {
    match seasonal_type {
        SeasonalType::Additive => {
            let mut model = HoltWintersAdditive::new(alpha, beta, gamma)?;
            model.fit(values, seasonal_period)?;
            Ok(Box::new(model))
        }
        SeasonalType::Multiplicative => {
            let mut model = HoltWintersMultiplicative::new(HoltWintersConfig::new(
                alpha,
                beta,
                gamma,
                seasonal_period,
            ))?;
            model.fit(values)?;
            Ok(Box::new(model))
        }
    }
}

/// Rounds grid values so repeated stepping does not accumulate noise.
fn round_grid(value: f64) -> f64 {
    (value * 1e10).round() / 1e10
}

/// `{step, 2 step, ...}` strictly below 1.
fn coarse_grid(step: f64) -> Vec<f64> {
    let mut grid = Vec::new();
    let mut k = 1;
    loop {
        let value = round_grid(k as f64 * step);
        if value >= 1.0 - GRID_EPS {
            break;
        }
        grid.push(value);
        k += 1;
    }
    grid
}

/// `center ± range` at `step`, clamped to `[0.01, 0.99]` and deduplicated.
fn refined_grid(center: f64, step: f64, range: f64) -> Vec<f64> {
    let start = center - range;
    let count = ((2.0 * range) / step + GRID_EPS).floor() as usize;
    let mut grid: Vec<f64> = (0..=count)
        .map(|k| round_grid((start + k as f64 * step).clamp(REFINED_MIN, REFINED_MAX)))
        .collect();
    grid.sort_by(|a, b| a.total_cmp(b));
    grid.dedup();
    grid
}
