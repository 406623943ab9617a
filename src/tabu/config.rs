//! Tabu Search configuration.

use crate::criterion::Criterion;
use crate::error::{Result, TspError};
use crate::tour::{Neighborhood, Tour};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::tabu::TabuConfig;
/// use tsp_metaheur::{Criterion, Neighborhood};
///
/// let config = TabuConfig::default()
///     .with_tabu_length(50)
///     .with_criterion_limit(500)
///     .with_neighborhood(Neighborhood::Inverse)
///     .with_criterion(Criterion::Iterations);
/// assert_eq!(config.tabu_length, 50);
/// assert_eq!(config.criterion_limit, 500);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Iterations a move's coordinates stay tabu after it is applied.
    pub tabu_length: usize,
    /// Limit compared against the counter selected by `criterion`.
    pub criterion_limit: usize,
    /// Move type used for the exhaustive neighborhood scan.
    pub neighborhood: Neighborhood,
    /// Declared stopping criterion.
    pub criterion: Criterion,
    /// When `false` (the default) [`Criterion::Iterations`] also compares
    /// the stagnation counter, so both criteria behave identically. When
    /// `true` it compares the total iteration count.
    pub strict_iteration_count: bool,
    /// Random seed (None for fresh entropy).
    pub seed: Option<u64>,
    /// Starting tour. `None` draws a random permutation from the run's
    /// generator.
    pub initial_tour: Option<Tour>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_length: 10,
            criterion_limit: 100,
            neighborhood: Neighborhood::default(),
            criterion: Criterion::default(),
            strict_iteration_count: false,
            seed: None,
            initial_tour: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu tenure.
    pub fn with_tabu_length(mut self, length: usize) -> Self {
        self.tabu_length = length;
        self
    }

    /// Sets the criterion limit.
    pub fn with_criterion_limit(mut self, limit: usize) -> Self {
        self.criterion_limit = limit;
        self
    }

    /// Sets the neighborhood type.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the stopping criterion.
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Makes [`Criterion::Iterations`] count total iterations.
    pub fn with_strict_iteration_count(mut self, strict: bool) -> Self {
        self.strict_iteration_count = strict;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Starts the search from `tour` instead of a random permutation.
    pub fn with_initial_tour(mut self, tour: Tour) -> Self {
        self.initial_tour = Some(tour);
        self
    }

    /// Validates the configuration.
    ///
    /// The initial tour is checked against the matrix when the run starts.
    pub fn validate(&self) -> Result<()> {
        if self.criterion_limit == 0 {
            return Err(TspError::config("criterion_limit must be at least 1"));
        }
        Ok(())
    }

    /// Returns `true` when the run should stop after `iterations` completed
    /// iterations, the last `stagnation` of which did not improve the best.
    pub(crate) fn should_stop(&self, iterations: usize, stagnation: usize) -> bool {
        self.effective_criterion()
            .is_met(iterations, stagnation, self.criterion_limit)
    }

    /// The predicate actually evaluated, after applying
    /// `strict_iteration_count`.
    pub(crate) fn effective_criterion(&self) -> Criterion {
        match self.criterion {
            Criterion::Iterations if !self.strict_iteration_count => {
                Criterion::IterationsWithoutImprovement
            }
            other => other,
        }
    }
}
