//! Benchmarks for smoothing fits, grid search and interval construction.

use anofox_smoothing::models::exponential::{
    HoltWintersAdditive, HoltWintersConfig, HoltWintersMultiplicative, SeasonalType,
    SimpleExponentialSmoothing,
};
use anofox_smoothing::models::Forecaster;
use anofox_smoothing::utils::intervals::{forecast_with_interval, IntervalConfig};
use anofox_smoothing::utils::optimization::{optimize_parameters, OptimizerConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_seasonal(n: usize, period: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            100.0
                + 0.5 * i as f64
                + 10.0 * (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin()
                + ((i * 37) % 11) as f64 * 0.2
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [120, 480, 1920].iter() {
        let data = generate_seasonal(*size, 12);

        group.bench_with_input(BenchmarkId::new("SES", size), size, |b, _| {
            b.iter(|| {
                let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
                model.fit(black_box(&data)).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("HW_additive", size), size, |b, _| {
            b.iter(|| {
                let mut model = HoltWintersAdditive::new(0.3, 0.1, 0.1).unwrap();
                model.fit(black_box(&data), 12).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("HW_multiplicative", size), size, |b, _| {
            let config = HoltWintersConfig::new(0.3, 0.1, 0.1, 12);
            b.iter(|| {
                let mut model = HoltWintersMultiplicative::new(config.clone()).unwrap();
                model.fit(black_box(&data)).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_grid_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_search");
    group.sample_size(10);
    let data = generate_seasonal(144, 12);

    group.bench_function("coarse_only", |b| {
        let config = OptimizerConfig::coarse_only();
        b.iter(|| optimize_parameters(black_box(&data), 12, SeasonalType::Additive, &config))
    });

    group.bench_function("coarse_and_refined", |b| {
        let config = OptimizerConfig::default();
        b.iter(|| optimize_parameters(black_box(&data), 12, SeasonalType::Additive, &config))
    });

    group.finish();
}

fn bench_intervals(c: &mut Criterion) {
    let mut group = c.benchmark_group("intervals");
    let data = generate_seasonal(240, 12);
    let mut model = HoltWintersAdditive::new(0.3, 0.1, 0.1).unwrap();
    model.fit(&data, 12).unwrap();
    let forecast = model.forecast(24).unwrap();
    let residuals = model.residuals().unwrap();

    group.bench_function("naive", |b| {
        let config = IntervalConfig::default();
        b.iter(|| forecast_with_interval(black_box(&forecast), residuals, 12, &config))
    });

    for sims in [100, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::new("bootstrap", sims), sims, |b, &sims| {
            let config = IntervalConfig::bootstrap(0.95, sims, 42);
            b.iter(|| forecast_with_interval(black_box(&forecast), residuals, 12, &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_grid_search, bench_intervals);
criterion_main!(benches);
