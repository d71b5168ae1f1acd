//! Likelihood-based scoring of residual series.
//!
//! Models are compared on the residual window starting at their
//! `min_residual_index`, where every seasonal slot has been observed at
//! least once.

use crate::utils::stats::sum_squared_error;

/// Gaussian fit statistics over a residual window.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelScore {
    /// Length of the residual window (finite or not).
    pub n: usize,
    /// Number of finite residuals in the window.
    pub n_effective: usize,
    /// Sum of squared finite residuals.
    pub sse: f64,
    /// MLE variance estimate, floored at machine epsilon.
    pub sigma2: f64,
    /// Gaussian log-likelihood.
    pub log_likelihood: f64,
    /// Akaike information criterion.
    pub aic: f64,
    /// Bayesian information criterion.
    pub bic: f64,
}

/// Scores `residuals[start_index..]` for a model with `num_params`
/// estimated parameters.
///
/// ```text
/// σ²      = max(SSE / n_eff, ε)
/// logLik  = -n_eff / 2 · (ln 2π + ln σ² + 1)
/// AIC     = -2 logLik + 2k
/// BIC     = -2 logLik + k ln n_eff
/// ```
///
/// An empty window (or one without finite residuals) scores with SSE 0 and
/// finite criteria.
pub fn score_model(residuals: &[f64], start_index: usize, num_params: usize) -> ModelScore {
    let window = residuals.get(start_index..).unwrap_or(&[]);
    let n = window.len();
    let n_effective = window.iter().filter(|r| r.is_finite()).count();
    let sse = sum_squared_error(window);

    let sigma2 = if n_effective > 0 {
        (sse / n_effective as f64).max(f64::EPSILON)
    } else {
        f64::EPSILON
    };

    let n_eff = n_effective as f64;
    let k = num_params as f64;
    let log_likelihood =
        -n_eff / 2.0 * ((2.0 * std::f64::consts::PI).ln() + sigma2.ln() + 1.0);
    let aic = -2.0 * log_likelihood + 2.0 * k;
    let bic_penalty = if n_effective > 0 { k * n_eff.ln() } else { 0.0 };
    let bic = -2.0 * log_likelihood + bic_penalty;

    ModelScore {
        n,
        n_effective,
        sse,
        sigma2,
        log_likelihood,
        aic,
        bic,
    }
}
