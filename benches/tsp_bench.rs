//! Criterion benchmarks for the TSP solvers.
//!
//! Uses random Euclidean instances with a fixed seed so timings compare
//! solver overhead across sizes rather than instance luck.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_metaheur::bees::{BeesConfig, BeesRunner};
use tsp_metaheur::ga::{GaConfig, GaRunner};
use tsp_metaheur::nn::NearestNeighbor;
use tsp_metaheur::sa::{SaConfig, SaRunner};
use tsp_metaheur::tabu::{TabuConfig, TabuRunner};
use tsp_metaheur::{DistanceMatrix, Neighborhood};

// ===========================================================================
// Instances
// ===========================================================================

fn euclidean_instance(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    let rows = points
        .iter()
        .map(|a| {
            points
                .iter()
                .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                .collect()
        })
        .collect();
    DistanceMatrix::from_rows(rows).expect("euclidean instance is valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_nn(c: &mut Criterion) {
    let mut group = c.benchmark_group("nn_best_of_all");
    group.sample_size(10);

    for &n in &[48, 76, 127] {
        let matrix = euclidean_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| black_box(NearestNeighbor::best_of_all(black_box(m))))
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for (n, pop, gen) in [(48usize, 100usize, 100usize), (76, 100, 50), (127, 100, 30)] {
        let matrix = euclidean_instance(n, 42);
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{n}_p{pop}_g{gen}"), n),
            &(matrix, config),
            |b, (m, c)| b.iter(|| black_box(GaRunner::run(black_box(m), black_box(c)))),
        );
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    for kind in Neighborhood::ALL {
        let matrix = euclidean_instance(48, 42);
        let config = TabuConfig::default()
            .with_neighborhood(kind)
            .with_criterion_limit(20)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("{kind:?}"), 48),
            &(matrix, config),
            |b, (m, c)| b.iter(|| black_box(TabuRunner::run(black_box(m), black_box(c)))),
        );
    }
    group.finish();
}

fn bench_bees(c: &mut Criterion) {
    let mut group = c.benchmark_group("bees");
    group.sample_size(10);

    for &n in &[48, 76] {
        let matrix = euclidean_instance(n, 42);
        let config = BeesConfig::default()
            .with_max_iterations(100)
            .with_neighborhood(Neighborhood::Inverse)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, config), |b, (m, c)| {
            b.iter(|| black_box(BeesRunner::run(black_box(m), black_box(c))))
        });
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);

    for &n in &[48, 127] {
        let matrix = euclidean_instance(n, 42);
        let config = SaConfig::default()
            .with_cooling_rate(0.01)
            .with_max_iterations(1000)
            .with_neighborhood(Neighborhood::Inverse)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, config), |b, (m, c)| {
            b.iter(|| black_box(SaRunner::run(black_box(m), black_box(c))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nn, bench_ga, bench_tabu, bench_bees, bench_sa);
criterion_main!(benches);
