//! SA configuration.

use crate::error::{Result, TspError};
use crate::tour::Neighborhood;

/// Configuration for Simulated Annealing.
///
/// The temperature follows `T ← T · (1 − cooling_rate)` once per iteration
/// and the run freezes when `T < freeze_ratio · initial_temperature`.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::SaConfig;
/// use tsp_metaheur::Neighborhood;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(1500.0)
///     .with_cooling_rate(0.025)
///     .with_max_iterations(10_000)
///     .with_neighborhood(Neighborhood::Inverse);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Fraction of the temperature removed each iteration, in (0, 1).
    pub cooling_rate: f64,

    /// The run stops once `T` drops below this fraction of the initial
    /// temperature.
    pub freeze_ratio: f64,

    /// Maximum total iterations.
    pub max_iterations: usize,

    /// Random neighbors drawn per iteration; the shortest is the candidate.
    pub candidates_per_iteration: usize,

    /// Move type for candidate generation.
    pub neighborhood: Neighborhood,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.05,
            freeze_ratio: 0.005,
            max_iterations: 5000,
            candidates_per_iteration: 5,
            neighborhood: Neighborhood::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_freeze_ratio(mut self, ratio: f64) -> Self {
        self.freeze_ratio = ratio;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_candidates_per_iteration(mut self, n: usize) -> Self {
        self.candidates_per_iteration = n;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperature below which the run freezes.
    pub fn freeze_temperature(&self) -> f64 {
        self.freeze_ratio * self.initial_temperature
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(TspError::config(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(TspError::config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if !(self.freeze_ratio > 0.0 && self.freeze_ratio < 1.0) {
            return Err(TspError::config(format!(
                "freeze_ratio must be in (0, 1), got {}",
                self.freeze_ratio
            )));
        }
        if self.max_iterations == 0 {
            return Err(TspError::config("max_iterations must be at least 1"));
        }
        if self.candidates_per_iteration == 0 {
            return Err(TspError::config("candidates_per_iteration must be at least 1"));
        }
        Ok(())
    }
}
