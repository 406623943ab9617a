//! GA generational loop.
//!
//! [`GaRunner`] drives: initialization → selection → crossover → mutation →
//! evaluation → repeat. Each stage reads the previous population snapshot
//! and returns a new one; no stage edits a population in place.

use std::time::Instant;

use rand::Rng;

use super::config::GaConfig;
use super::operators::{swap_mutation, CrossoverMethod};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::random::{random_tour, rng_from_seed};
use crate::result::{elapsed_ms, SearchResult, StopReason};
use crate::tour::{EvaluatedTour, Tour};

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::DistanceMatrix;
/// use tsp_metaheur::ga::{GaConfig, GaRunner};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 4.0, 5.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![3.0, 5.0, 6.0, 0.0],
/// ]).unwrap();
/// let config = GaConfig::default().with_population_size(20).with_seed(42);
/// let result = GaRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.best_length, 14.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<SearchResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            cities = matrix.size(),
            population = config.population_size,
            selection = ?config.selection,
            crossover = ?config.crossover,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;
        let timer = Instant::now();
        let n = matrix.size();

        let initial: Vec<Tour> = (0..config.population_size)
            .map(|_| random_tour(n, rng))
            .collect();

        // The initial population is never a candidate; tracking starts with
        // the first bred generation.
        let mut population = breed(&initial, matrix, config, rng);
        let mut best = fittest(&population, matrix);
        let mut stagnation = 0usize;
        let mut generations = 1usize;
        let mut stop_reason = StopReason::MaxIterations;
        let mut length_history = Vec::with_capacity(config.max_generations);
        length_history.push(best.length);
        tracing::trace!(generation = 0, best_length = best.length, stagnation, "generation complete");

        loop {
            if stagnation >= config.max_no_improvement {
                stop_reason = StopReason::Stagnation;
                break;
            }
            if generations >= config.max_generations {
                break;
            }

            population = breed(&population, matrix, config, rng);
            let current = fittest(&population, matrix);
            if current.length < best.length {
                best = current;
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            length_history.push(best.length);
            tracing::trace!(
                generation = generations,
                best_length = best.length,
                stagnation,
                "generation complete"
            );
            generations += 1;
        }

        tracing::debug!(
            best_length = best.length,
            generations,
            ?stop_reason,
            "GA finished"
        );

        Ok(SearchResult {
            best_tour: best.tour,
            best_length: best.length,
            elapsed_ms: elapsed_ms(timer),
            iterations: generations,
            stop_reason,
            length_history,
        })
    }
}

/// One generation: selection, then crossover and mutation each gated by a
/// single trial.
///
/// Selection returns `population_size ≥ 2` tours and crossover keeps every
/// complete pair, so the bred population is never empty.
fn breed<R: Rng>(
    population: &[Tour],
    matrix: &DistanceMatrix,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Tour> {
    let selected = config
        .selection
        .select(population, matrix, config.population_size, rng);

    let recombined = if rng.random::<f64>() < config.crossover_probability {
        recombine(&selected, config.crossover, rng)
    } else {
        selected
    };

    if rng.random::<f64>() < config.mutation_probability {
        mutate_all(&recombined, rng)
    } else {
        recombined
    }
}

/// Crossover stage: pairs `(0, 1), (2, 3), …` each yield two offspring.
/// An odd trailing individual has no partner and is dropped.
fn recombine<R: Rng>(population: &[Tour], method: CrossoverMethod, rng: &mut R) -> Vec<Tour> {
    let mut offspring = Vec::with_capacity(population.len());
    for pair in population.chunks_exact(2) {
        let (c1, c2) = method.apply(&pair[0], &pair[1], rng);
        offspring.push(c1);
        offspring.push(c2);
    }
    offspring
}

/// Mutation stage: every individual receives one random swap.
fn mutate_all<R: Rng>(population: &[Tour], rng: &mut R) -> Vec<Tour> {
    population.iter().map(|t| swap_mutation(t, rng)).collect()
}

/// Shortest tour of the population; the earliest wins ties.
///
/// # Panics
/// Panics if `population` is empty.
fn fittest(population: &[Tour], matrix: &DistanceMatrix) -> EvaluatedTour {
    let mut best = EvaluatedTour::new(population[0].clone(), matrix);
    for tour in &population[1..] {
        let length = matrix.tour_length(tour);
        if length < best.length {
            best = EvaluatedTour {
                tour: tour.clone(),
                length,
            };
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
