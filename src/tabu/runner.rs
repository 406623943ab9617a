//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the configured or a random tour
//! 2. At each iteration:
//!    a. Evaluate every move `(i, j)` with `i < j`
//!    b. Select the shortest admissible candidate: not tabu, or tabu but
//!    shorter than the best known length (aspiration)
//!    c. Move to it, decay all tenures, then mark `(i, j)` tabu
//!    d. Update the global best and stagnation counter
//! 3. Terminate on the configured criterion or when no move is admissible
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::time::Instant;

use rand::Rng;

use super::config::TabuConfig;
use super::tenure::TenureMatrix;
use crate::criterion::Criterion;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::random::{random_tour, rng_from_seed};
use crate::result::{elapsed_ms, SearchResult, StopReason};
use crate::tour::{neighbor, validate_tour, EvaluatedTour, Neighborhood, Tour};

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search with a generator seeded from `config.seed`.
    ///
    /// The generator is only consulted for the initial tour; the scan itself
    /// is deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_metaheur::DistanceMatrix;
    /// use tsp_metaheur::tabu::{TabuConfig, TabuRunner};
    ///
    /// let matrix = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![1.0, 0.0, 4.0, 5.0],
    ///     vec![2.0, 4.0, 0.0, 6.0],
    ///     vec![3.0, 5.0, 6.0, 0.0],
    /// ]).unwrap();
    /// let config = TabuConfig::default().with_tabu_length(2).with_seed(1);
    /// let result = TabuRunner::run(&matrix, &config).unwrap();
    /// assert_eq!(result.best_length, 14.0);
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &TabuConfig) -> Result<SearchResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Executes Tabu Search drawing the initial tour from `rng`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            cities = matrix.size(),
            tabu_length = config.tabu_length,
            limit = config.criterion_limit,
            neighborhood = ?config.neighborhood,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;
        let timer = Instant::now();
        let n = matrix.size();

        let initial = match &config.initial_tour {
            Some(tour) => {
                validate_tour(tour, n)?;
                tour.clone()
            }
            None => random_tour(n, rng),
        };

        let mut current = EvaluatedTour::new(initial, matrix);
        let mut best = current.clone();
        let mut tenure = TenureMatrix::new(n);
        let mut iterations = 0usize;
        let mut stagnation = 0usize;
        let mut length_history = Vec::new();

        let stop_reason = loop {
            let Some((i, j, candidate)) =
                best_admissible(matrix, &current.tour, &tenure, best.length, config.neighborhood)
            else {
                tracing::warn!(iterations, "no admissible move, stopping early");
                break StopReason::NoAdmissibleMove;
            };

            current = candidate;
            tenure.decay();
            tenure.apply(i, j, config.tabu_length);
            iterations += 1;

            if current.length < best.length {
                best = current.clone();
                stagnation = 0;
            } else {
                stagnation += 1;
            }
            length_history.push(best.length);
            tracing::trace!(
                iterations,
                i,
                j,
                current_length = current.length,
                best_length = best.length,
                stagnation,
                "move applied"
            );

            if config.should_stop(iterations, stagnation) {
                break match config.effective_criterion() {
                    Criterion::Iterations => StopReason::MaxIterations,
                    Criterion::IterationsWithoutImprovement => StopReason::Stagnation,
                };
            }
        };

        tracing::debug!(best_length = best.length, iterations, ?stop_reason, "tabu search finished");

        Ok(SearchResult {
            best_tour: best.tour,
            best_length: best.length,
            elapsed_ms: elapsed_ms(timer),
            iterations,
            stop_reason,
            length_history,
        })
    }
}

/// Scans every move `(i, j)`, `i < j`, and returns the shortest admissible
/// candidate. The first minimum in enumeration order wins.
fn best_admissible(
    matrix: &DistanceMatrix,
    current: &[usize],
    tenure: &TenureMatrix,
    best_length: f64,
    kind: Neighborhood,
) -> Option<(usize, usize, EvaluatedTour)> {
    let n = current.len();
    let mut chosen: Option<(usize, usize, Tour, f64)> = None;

    for i in 0..n - 1 {
        for j in i + 1..n {
            let candidate = neighbor(current, i, j, kind);
            let length = matrix.tour_length(&candidate);
            let admissible = !tenure.is_tabu(i, j) || length < best_length;
            if !admissible {
                continue;
            }
            if chosen.as_ref().is_none_or(|(.., shortest)| length < *shortest) {
                chosen = Some((i, j, candidate, length));
            }
        }
    }

    chosen.map(|(i, j, tour, length)| (i, j, EvaluatedTour { tour, length }))
}
