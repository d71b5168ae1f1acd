//! Seasonal index helpers.

/// Centers additive seasonal offsets so they average to 0.
///
/// Pairwise differences are preserved.
pub fn normalize_seasonal_additive(seasonals: &[f64]) -> Vec<f64> {
    if seasonals.is_empty() {
        return Vec::new();
    }
    let mean = seasonals.iter().sum::<f64>() / seasonals.len() as f64;
    seasonals.iter().map(|s| s - mean).collect()
}

/// Scales multiplicative seasonal factors so they average to 1.
///
/// Pairwise ratios are preserved.
pub fn normalize_seasonal_multiplicative(seasonals: &[f64]) -> Vec<f64> {
    if seasonals.is_empty() {
        return Vec::new();
    }
    let mean = seasonals.iter().sum::<f64>() / seasonals.len() as f64;
    seasonals.iter().map(|s| s / mean).collect()
}

/// Position within the seasonal cycle of the observation at `offset`.
#[inline]
pub fn season_index(offset: usize, seasonal_period: usize) -> usize {
    offset % seasonal_period
}

/// Seasonal slot used for the forecast `h` steps after `last_index`.
#[inline]
pub fn season_at_horizon(last_index: usize, h: usize, seasonal_period: usize) -> usize {
    (last_index + h) % seasonal_period
}
