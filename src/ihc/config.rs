//! Hill-climbing configuration.

use crate::error::{Result, TspError};
use crate::tour::Neighborhood;

/// Configuration for iterated hill climbing.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ihc::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_restarts(20)
///     .with_no_improvement_limit(500);
/// assert_eq!(config.restarts, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Independent climbs, each from a fresh random tour.
    pub restarts: usize,
    /// Consecutive non-improving steps that end a climb.
    pub no_improvement_limit: usize,
    /// Move type for sampled neighbors.
    pub neighborhood: Neighborhood,
    /// Neighbors sampled per step. `None` samples one per city.
    pub samples_per_step: Option<usize>,
    /// Random seed (None for fresh entropy).
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            restarts: 50,
            no_improvement_limit: 100,
            neighborhood: Neighborhood::default(),
            samples_per_step: None,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    /// Sets the number of restarts.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    /// Sets the per-climb stagnation limit.
    pub fn with_no_improvement_limit(mut self, n: usize) -> Self {
        self.no_improvement_limit = n;
        self
    }

    /// Sets the neighborhood type.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets an explicit sample count per step.
    pub fn with_samples_per_step(mut self, n: usize) -> Self {
        self.samples_per_step = Some(n);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.restarts == 0 {
            return Err(TspError::config("restarts must be at least 1"));
        }
        if self.no_improvement_limit == 0 {
            return Err(TspError::config("no_improvement_limit must be at least 1"));
        }
        if self.samples_per_step == Some(0) {
            return Err(TspError::config("samples_per_step must be at least 1"));
        }
        Ok(())
    }
}
