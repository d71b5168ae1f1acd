//! Input validation shared by all models.
//!
//! Every public entry point runs these checks before touching model state,
//! so a failed call never leaves a model partially updated.

use crate::error::{ForecastError, Result};

/// Fails on the first NaN or infinite value.
pub fn assert_finite_array(data: &[f64]) -> Result<()> {
    match data.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ForecastError::NonFiniteValue {
            index,
            value: data[index],
        }),
        None => Ok(()),
    }
}

/// Checks a seasonal period against the available data.
///
/// Seasonal models need `m >= 2` and two full cycles (`n >= 2m`) to
/// initialize level, trend and seasonal indices.
pub fn assert_seasonal_period(seasonal_period: usize, n: usize) -> Result<()> {
    if seasonal_period < 2 {
        return Err(ForecastError::InvalidParameter(format!(
            "Seasonal period must be at least 2, got {}",
            seasonal_period
        )));
    }
    let needed = 2 * seasonal_period;
    if n < needed {
        return Err(ForecastError::InsufficientData { needed, got: n });
    }
    Ok(())
}

/// Checks that a smoothing factor lies in (0, 1].
///
/// `name` is used verbatim in the message, e.g. `"Alpha"`.
pub fn assert_smoothing_factor(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "{} must be in (0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Fails on the first value that is zero or negative.
pub fn assert_strictly_positive(data: &[f64]) -> Result<()> {
    match data.iter().position(|&v| v <= 0.0) {
        Some(index) => Err(ForecastError::NonPositiveValue {
            index,
            value: data[index],
        }),
        None => Ok(()),
    }
}
