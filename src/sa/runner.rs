//! SA execution loop.

use std::time::Instant;

use rand::Rng;

use super::config::SaConfig;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::random::{random_tour, rng_from_seed};
use crate::result::{elapsed_ms, SearchResult, StopReason};
use crate::tour::{best_of_sample, EvaluatedTour};

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run(matrix: &DistanceMatrix, config: &SaConfig) -> Result<SearchResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs SA drawing every random decision from `rng`.
    ///
    /// The initial tour is the first draw from `rng`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            cities = matrix.size(),
            temperature = config.initial_temperature,
            cooling_rate = config.cooling_rate,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;
        let timer = Instant::now();
        let n = matrix.size();

        let mut current = EvaluatedTour::new(random_tour(n, rng), matrix);
        let mut best = current.clone();
        let mut temperature = config.initial_temperature;
        let freeze = config.freeze_temperature();
        let mut iterations = 0usize;
        let mut accepted = 0usize;
        let mut stop_reason = StopReason::MaxIterations;
        let mut length_history = Vec::new();

        while iterations < config.max_iterations {
            if temperature < freeze {
                stop_reason = StopReason::Frozen;
                break;
            }

            let candidate = best_of_sample(
                matrix,
                &current.tour,
                config.candidates_per_iteration,
                config.neighborhood,
                rng,
            );
            let accept = candidate.length < current.length
                || rng.random::<f64>()
                    < acceptance_probability(current.length, candidate.length, temperature);
            if accept {
                current = candidate;
                accepted += 1;
                if current.length < best.length {
                    best = current.clone();
                }
            }

            temperature *= 1.0 - config.cooling_rate;
            iterations += 1;
            length_history.push(best.length);
            tracing::trace!(
                iterations,
                temperature,
                current_length = current.length,
                best_length = best.length,
                "annealing step"
            );
        }

        tracing::debug!(
            best_length = best.length,
            iterations,
            accepted,
            final_temperature = temperature,
            ?stop_reason,
            "annealing finished"
        );

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

/// Metropolis criterion: `exp((current − candidate) / T)`.
fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    ((current - candidate) / temperature).exp()
}
