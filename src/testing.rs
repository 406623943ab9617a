//! Shared fixtures for unit tests.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::random::create_rng;

/// Four cities on which every closed tour has length 14.
///
/// A search that never moves still reports 14 here, so this instance checks
/// tour validity and bookkeeping only. Use [`circle`] for solution quality.
pub(crate) fn four_city() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, 0.0, 4.0, 5.0],
        vec![2.0, 4.0, 0.0, 6.0],
        vec![3.0, 5.0, 6.0, 0.0],
    ])
    .unwrap()
}

/// Cities evenly spaced on a circle; the optimal tour visits them in order
/// and has length `n * chord`.
pub(crate) fn circle(n: usize) -> DistanceMatrix {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            let angle = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
            (angle.cos() * 10.0, angle.sin() * 10.0)
        })
        .collect();
    euclidean(&points)
}

/// Optimal tour length of [`circle`].
pub(crate) fn circle_optimum(n: usize) -> f64 {
    let chord = 2.0 * 10.0 * (std::f64::consts::PI / n as f64).sin();
    chord * n as f64
}

/// Random symmetric Euclidean instance.
pub(crate) fn random_euclidean(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = create_rng(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    euclidean(&points)
}

fn euclidean(points: &[(f64, f64)]) -> DistanceMatrix {
    let rows = points
        .iter()
        .map(|a| {
            points
                .iter()
                .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                .collect()
        })
        .collect();
    DistanceMatrix::from_rows(rows).unwrap()
}
