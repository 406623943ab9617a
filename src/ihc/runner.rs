//! Iterated hill-climbing loop.

use std::time::Instant;

use rand::Rng;

use super::config::HillClimbConfig;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::random::{random_tour, rng_from_seed};
use crate::result::{elapsed_ms, SearchResult, StopReason};
use crate::tour::{best_of_sample, EvaluatedTour};

/// Iterated hill-climbing runner.
///
/// Every climb starts from a random tour and moves to the best sampled
/// neighbor whenever it is strictly shorter. A climb ends after
/// `no_improvement_limit` consecutive steps without a move.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs all restarts with a generator seeded from `config.seed`.
    pub fn run(matrix: &DistanceMatrix, config: &HillClimbConfig) -> Result<SearchResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs all restarts drawing every random decision from `rng`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(cities = matrix.size(), restarts = config.restarts)
    )]
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &HillClimbConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;
        let timer = Instant::now();
        let n = matrix.size();
        let samples = config.samples_per_step.unwrap_or(n);

        let mut length_history = Vec::new();

        // `restarts ≥ 1`, so the first climb always exists.
        let mut best = climb(matrix, config, samples, f64::INFINITY, &mut length_history, rng);
        tracing::trace!(restart = 0, length = best.length, "climb finished");
        for restart in 1..config.restarts {
            let current = climb(matrix, config, samples, best.length, &mut length_history, rng);
            tracing::trace!(restart, length = current.length, "climb finished");
            if current.length < best.length {
                best = current;
            }
        }
        let steps = length_history.len();

        tracing::debug!(best_length = best.length, steps, "hill climbing finished");

        Ok(SearchResult {
            best_tour: best.tour,
            best_length: best.length,
            elapsed_ms: elapsed_ms(timer),
            iterations: steps,
            stop_reason: StopReason::Stagnation,
            length_history,
        })
    }
}

/// One descent from a random tour. Each step records the shorter of
/// `best_so_far` and the current length.
fn climb<R: Rng>(
    matrix: &DistanceMatrix,
    config: &HillClimbConfig,
    samples: usize,
    best_so_far: f64,
    length_history: &mut Vec<f64>,
    rng: &mut R,
) -> EvaluatedTour {
    let mut current = EvaluatedTour::new(random_tour(matrix.size(), rng), matrix);
    let mut idle = 0usize;

    while idle < config.no_improvement_limit {
        let candidate = best_of_sample(matrix, &current.tour, samples, config.neighborhood, rng);
        if candidate.length < current.length {
            current = candidate;
            idle = 0;
        } else {
            idle += 1;
        }
        length_history.push(best_so_far.min(current.length));
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::testing::{circle, circle_optimum, four_city, random_euclidean};
    use crate::tour::{is_permutation, Neighborhood};

    #[test]
    fn test_four_city() {
        // Every tour of this instance has length 14; quality is checked on `circle`.
        let config = HillClimbConfig::default().with_restarts(3).with_seed(42);
        let result = HillClimbRunner::run(&four_city(), &config).unwrap();
        assert_eq!(result.best_length, 14.0);
        assert!(is_permutation(&result.best_tour, 4));
        assert_eq!(result.stop_reason, StopReason::Stagnation);
    }

    #[test]
    fn test_never_worse_than_first_start() {
        let matrix = random_euclidean(12, 7);
        let initial = matrix.tour_length(&random_tour(12, &mut create_rng(7)));
        let config = HillClimbConfig::default()
            .with_restarts(1)
            .with_no_improvement_limit(10);
        let result = HillClimbRunner::run_with_rng(&matrix, &config, &mut create_rng(7)).unwrap();
        assert!(result.best_length <= initial);
    }

    #[test]
    fn test_each_climb_ends_with_idle_steps() {
        let config = HillClimbConfig::default()
            .with_restarts(4)
            .with_no_improvement_limit(15)
            .with_seed(1);
        let result = HillClimbRunner::run(&random_euclidean(10, 1), &config).unwrap();
        assert!(result.iterations >= 4 * 15);
        assert_eq!(result.length_history.len(), result.iterations);
    }

    #[test]
    fn test_history_is_non_increasing() {
        let config = HillClimbConfig::default()
            .with_restarts(5)
            .with_no_improvement_limit(20)
            .with_neighborhood(Neighborhood::Insert)
            .with_seed(2);
        let result = HillClimbRunner::run(&random_euclidean(10, 2), &config).unwrap();
        for w in result.length_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
        assert_eq!(result.length_history.last(), Some(&result.best_length));
    }

    #[test]
    fn test_inverse_reaches_circle_optimum() {
        let n = 10;
        let config = HillClimbConfig::default()
            .with_restarts(10)
            .with_no_improvement_limit(30)
            .with_neighborhood(Neighborhood::Inverse)
            .with_seed(42);
        let result = HillClimbRunner::run(&circle(n), &config).unwrap();
        assert!(
            (result.best_length - circle_optimum(n)).abs() < 1e-6,
            "got {}, optimum {}",
            result.best_length,
            circle_optimum(n)
        );
    }

    #[test]
    fn test_single_restart() {
        let config = HillClimbConfig::default()
            .with_restarts(1)
            .with_no_improvement_limit(1)
            .with_seed(6);
        let result = HillClimbRunner::run(&random_euclidean(6, 6), &config).unwrap();
        assert!(result.iterations >= 1);
        assert_eq!(result.length_history.last(), Some(&result.best_length));
        assert!(is_permutation(&result.best_tour, 6));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = HillClimbConfig::default().with_restarts(0);
        assert!(HillClimbRunner::run(&four_city(), &config).is_err());
    }
}
