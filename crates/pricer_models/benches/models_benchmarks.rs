//! Criterion benchmarks for the Black-Scholes-Merton analytics.
//!
//! Measures single-option pricing, pricing with Greeks, and implied
//! volatility from several starting distances to the solution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::OptionType;
use pricer_models::analytical::{
    implied_volatility, norm_cdf, price, price_with_greeks, ImpliedVolConfig, ImpliedVolSolver,
    OptionContract, OptionParameters,
};

fn index_option(option_type: OptionType) -> OptionParameters {
    OptionParameters::new(19500.0, 19600.0, 0.5, 0.06, 0.20, option_type).unwrap()
}

/// Benchmark the normal CDF across both approximation branches.
fn bench_norm_cdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("norm_cdf");

    for x in [0.5_f64, 3.0, 9.0] {
        group.bench_with_input(BenchmarkId::from_parameter(x), &x, |b, &x| {
            b.iter(|| norm_cdf(black_box(x)));
        });
    }

    group.finish();
}

/// Benchmark pricing alone and with Greeks.
fn bench_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bsm_pricing");

    for option_type in [OptionType::Call, OptionType::Put] {
        let params = index_option(option_type);

        group.bench_with_input(
            BenchmarkId::new("price", option_type),
            &params,
            |b, params| {
                b.iter(|| price(black_box(params)).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("price_with_greeks", option_type),
            &params,
            |b, params| {
                b.iter(|| price_with_greeks(black_box(params)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark a strike ladder (100 strikes around the money).
fn bench_strike_ladder(c: &mut Criterion) {
    let base = index_option(OptionType::Call);
    let ladder: Vec<OptionParameters> = (0..100)
        .map(|i| OptionParameters {
            strike: 17000.0 + 50.0 * i as f64,
            ..base
        })
        .collect();

    c.bench_function("bsm_strike_ladder_100", |b| {
        b.iter(|| {
            ladder
                .iter()
                .map(|p| price(black_box(p)).unwrap().price)
                .sum::<f64>()
        });
    });
}

/// Benchmark implied volatility for targets near and far from the initial guess.
fn bench_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");
    let contract = OptionContract::new(19500.0, 19600.0, 0.5, 0.06, OptionType::Call).unwrap();

    for target_vol in [0.2_f64, 0.35, 0.6] {
        let market = price(&contract.with_volatility(target_vol)).unwrap().price;
        group.bench_with_input(
            BenchmarkId::new("default_guess", target_vol),
            &market,
            |b, &market| {
                b.iter(|| implied_volatility(black_box(&contract), black_box(market)).unwrap());
            },
        );
    }

    let solver = ImpliedVolSolver::new(ImpliedVolConfig::default().with_initial_guess(0.5));
    let market = price(&contract.with_volatility(0.6)).unwrap().price;
    group.bench_function("close_guess", |b| {
        b.iter(|| solver.solve(black_box(&contract), black_box(market)).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_norm_cdf,
    bench_pricing,
    bench_strike_ladder,
    bench_implied_vol
);
criterion_main!(benches);
