//! Bees Algorithm configuration.

use crate::criterion::Criterion;
use crate::error::{Result, TspError};
use crate::tour::Neighborhood;

/// Configuration for the Bees Algorithm.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::bees::BeesConfig;
/// use tsp_metaheur::Neighborhood;
///
/// let config = BeesConfig::default()
///     .with_num_bees(200)
///     .with_sites(5, 10)
///     .with_recruits(30, 15)
///     .with_neighborhood(Neighborhood::Inverse);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeesConfig {
    /// Scout population size; the population never drops below it.
    pub num_bees: usize,
    /// Top-ranked sites receiving `num_elite_bees` recruits each.
    pub num_elite_sites: usize,
    /// Next-ranked sites receiving `num_best_bees` recruits each. Clipped to
    /// the sites left after the elite ones.
    pub num_best_sites: usize,
    /// Recruits per elite site.
    pub num_elite_bees: usize,
    /// Recruits per best site.
    pub num_best_bees: usize,
    /// Iteration budget.
    pub max_iterations: usize,
    /// Move type used by recruits.
    pub neighborhood: Neighborhood,
    /// Declared stopping criterion.
    pub criterion: Criterion,
    /// Stagnation threshold for [`Criterion::IterationsWithoutImprovement`].
    /// `None` uses `max_iterations`, which the budget reaches first.
    pub stagnation_limit: Option<usize>,
    /// Random seed (None for fresh entropy).
    pub seed: Option<u64>,
}

impl Default for BeesConfig {
    fn default() -> Self {
        Self {
            num_bees: 100,
            num_elite_sites: 5,
            num_best_sites: 10,
            num_elite_bees: 10,
            num_best_bees: 5,
            max_iterations: 1000,
            neighborhood: Neighborhood::default(),
            criterion: Criterion::Iterations,
            stagnation_limit: None,
            seed: None,
        }
    }
}

impl BeesConfig {
    /// Sets the scout population size.
    pub fn with_num_bees(mut self, n: usize) -> Self {
        self.num_bees = n;
        self
    }

    /// Sets the number of elite and best sites.
    pub fn with_sites(mut self, elite: usize, best: usize) -> Self {
        self.num_elite_sites = elite;
        self.num_best_sites = best;
        self
    }

    /// Sets the recruits per elite site and per best site.
    pub fn with_recruits(mut self, elite: usize, best: usize) -> Self {
        self.num_elite_bees = elite;
        self.num_best_bees = best;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
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

    /// Sets an explicit stagnation threshold.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = Some(limit);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective stagnation threshold.
    pub fn stagnation_threshold(&self) -> usize {
        self.stagnation_limit.unwrap_or(self.max_iterations)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_bees == 0 {
            return Err(TspError::config("num_bees must be at least 1"));
        }
        if self.num_elite_sites == 0 || self.num_elite_sites > self.num_bees {
            return Err(TspError::config(format!(
                "num_elite_sites must be in [1, {}], got {}",
                self.num_bees, self.num_elite_sites
            )));
        }
        if self.max_iterations == 0 {
            return Err(TspError::config("max_iterations must be at least 1"));
        }
        if self.stagnation_limit == Some(0) {
            return Err(TspError::config("stagnation_limit must be at least 1"));
        }
        Ok(())
    }
}
