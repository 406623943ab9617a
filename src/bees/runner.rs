//! Bees Algorithm execution loop.
//!
//! # Algorithm
//!
//! 1. Scout `num_bees` random tours
//! 2. At each iteration:
//!    a. Evaluate and sort the scouts ascending by length
//!    b. Split the front into elite sites and best sites
//!    c. Recruit neighbor tours around each site
//!    d. Replenish with random scouts up to `num_bees`
//!    e. Update the global best and stagnation counter
//! 3. Terminate on the configured criterion
//!
//! # Reference
//!
//! Pham et al. (2006), "The Bees Algorithm: A Novel Tool for Complex
//! Optimisation Problems"

use std::time::Instant;

use rand::Rng;

use super::config::BeesConfig;
use crate::criterion::Criterion;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::random::{random_tour, rng_from_seed};
use crate::result::{elapsed_ms, SearchResult, StopReason};
use crate::tour::{random_neighbor, EvaluatedTour, Neighborhood, Tour};

/// Bees Algorithm runner.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::DistanceMatrix;
/// use tsp_metaheur::bees::{BeesConfig, BeesRunner};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 4.0, 5.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![3.0, 5.0, 6.0, 0.0],
/// ]).unwrap();
/// let config = BeesConfig::default()
///     .with_num_bees(10)
///     .with_sites(2, 3)
///     .with_max_iterations(20)
///     .with_seed(7);
/// let result = BeesRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.best_length, 14.0);
/// ```
pub struct BeesRunner;

impl BeesRunner {
    /// Runs the Bees Algorithm with a generator seeded from `config.seed`.
    pub fn run(matrix: &DistanceMatrix, config: &BeesConfig) -> Result<SearchResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs the Bees Algorithm drawing every random decision from `rng`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            cities = matrix.size(),
            bees = config.num_bees,
            elite_sites = config.num_elite_sites,
            best_sites = config.num_best_sites,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &BeesConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;
        let timer = Instant::now();
        let n = matrix.size();

        let scouts: Vec<Tour> = (0..config.num_bees).map(|_| random_tour(n, rng)).collect();
        // `num_bees ≥ 1` and replenishment keep every ranking non-empty.
        let mut sites = rank_sites(scouts, matrix);
        let mut best = sites[0].clone();
        let mut stagnation = 0usize;
        let mut iteration = 0usize;
        let mut stop_reason = StopReason::MaxIterations;
        let mut length_history = Vec::with_capacity(config.max_iterations);

        loop {
            let scouts = forage(&sites, config, n, rng);
            length_history.push(best.length);
            tracing::trace!(
                iteration,
                best_length = best.length,
                stagnation,
                scouts = scouts.len(),
                "iteration complete"
            );

            if config.criterion == Criterion::IterationsWithoutImprovement
                && stagnation >= config.stagnation_threshold()
            {
                stop_reason = StopReason::Stagnation;
                break;
            }
            if iteration + 1 >= config.max_iterations {
                break;
            }

            sites = rank_sites(scouts, matrix);
            let leader = &sites[0];
            if leader.length < best.length {
                best = leader.clone();
                stagnation = 0;
            } else {
                stagnation += 1;
            }
            iteration += 1;
        }
        let iterations = iteration + 1;

        tracing::debug!(best_length = best.length, iterations, ?stop_reason, "bees algorithm finished");

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

/// Evaluates the scouts and sorts them ascending by length. Equal lengths
/// keep their scouting order.
fn rank_sites(scouts: Vec<Tour>, matrix: &DistanceMatrix) -> Vec<EvaluatedTour> {
    let mut sites: Vec<EvaluatedTour> = scouts
        .into_iter()
        .map(|tour| EvaluatedTour::new(tour, matrix))
        .collect();
    sites.sort_by(|a, b| a.length.total_cmp(&b.length));
    sites
}

/// Builds the next scout population from ranked `sites`: recruits around
/// the elite and best sites, then random scouts up to `num_bees`.
///
/// The result may be larger than `num_bees` but never smaller.
fn forage<R: Rng>(
    sites: &[EvaluatedTour],
    config: &BeesConfig,
    n: usize,
    rng: &mut R,
) -> Vec<Tour> {
    let elite = config.num_elite_sites.min(sites.len());
    let best = config.num_best_sites.min(sites.len() - elite);

    let mut next = Vec::with_capacity(config.num_bees.max(
        elite * config.num_elite_bees + best * config.num_best_bees,
    ));
    recruit(&mut next, &sites[..elite], config.num_elite_bees, config.neighborhood, rng);
    recruit(
        &mut next,
        &sites[elite..elite + best],
        config.num_best_bees,
        config.neighborhood,
        rng,
    );

    while next.len() < config.num_bees {
        next.push(random_tour(n, rng));
    }
    next
}

/// Each site spawns `bees` neighbors, each with its own random move.
fn recruit<R: Rng>(
    out: &mut Vec<Tour>,
    sites: &[EvaluatedTour],
    bees: usize,
    kind: Neighborhood,
    rng: &mut R,
) {
    for site in sites {
        for _ in 0..bees {
            out.push(random_neighbor(&site.tour, kind, rng));
        }
    }
}
