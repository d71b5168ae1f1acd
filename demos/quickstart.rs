//! Fit Holt-Winters with tuned parameters and print a 95% forecast interval.
//!
//! Run with `RUST_LOG=debug cargo run --example quickstart` to see the
//! grid-search progress.

use anofox_smoothing::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pattern = [12.0, 6.0, -2.0, -9.0, -11.0, -4.0, 3.0, 5.0];
    let values: Vec<f64> = (0..64)
        .map(|t| 200.0 + 1.5 * t as f64 + pattern[t % 8] + ((t * 13) % 7) as f64 - 3.0)
        .collect();

    let mut ewma = Ewma::new(EwmaConfig::new(0.2))?;
    for &v in &values {
        ewma.update(v)?;
    }
    println!("EWMA after {} observations: {:.2}", ewma.count(), ewma.value().unwrap_or(f64::NAN));

    let best = optimize_parameters(&values, 8, SeasonalType::Additive, &OptimizerConfig::default())?;
    println!(
        "alpha={:.2} beta={:.2} gamma={:.2} sse={:.2} aic={:.2} ({} candidates, refined: {})",
        best.alpha, best.beta, best.gamma, best.sse, best.aic, best.evaluated, best.refined
    );

    let mut model = HoltWintersAdditive::new(best.alpha, best.beta, best.gamma)?;
    model.fit(&values, 8)?;

    let interval = forecast_model_with_interval(
        &model,
        8,
        &IntervalConfig::new(0.95)
            .with_method(IntervalMethod::Bootstrap)
            .with_seed(7),
    )?;

    println!("{:>4} {:>10} {:>10} {:>10}", "h", "lower", "forecast", "upper");
    for h in 0..interval.horizon() {
        println!(
            "{:>4} {:>10.2} {:>10.2} {:>10.2}",
            h + 1,
            interval.lower()[h],
            interval.forecast()[h],
            interval.upper()[h]
        );
    }

    Ok(())
}
