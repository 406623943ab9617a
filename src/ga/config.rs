//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use super::operators::CrossoverMethod;
use super::selection::Selection;
use crate::error::{Result, TspError};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::ga::{CrossoverMethod, GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(500)
///     .with_selection(Selection::Ranking)
///     .with_crossover(CrossoverMethod::Order)
///     .with_mutation_probability(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours produced by selection each generation.
    pub population_size: usize,

    /// Probability that the crossover stage runs in a generation (0.0–1.0).
    ///
    /// A single trial gates the whole generation, not each pair.
    pub crossover_probability: f64,

    /// Probability that the mutation stage runs in a generation (0.0–1.0).
    ///
    /// When it runs, every individual receives one random swap.
    pub mutation_probability: f64,

    /// Maximum number of generations.
    pub max_generations: usize,

    /// Consecutive generations without improvement before stopping.
    pub max_no_improvement: usize,

    /// Selection method.
    pub selection: Selection,

    /// Crossover operator.
    pub crossover: CrossoverMethod,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_probability: 0.8,
            mutation_probability: 0.2,
            max_generations: 500,
            max_no_improvement: 150,
            selection: Selection::default(),
            crossover: CrossoverMethod::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_no_improvement(mut self, n: usize) -> Self {
        self.max_no_improvement = n;
        self
    }

    /// Sets the selection method.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: CrossoverMethod) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(TspError::config("population_size must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(TspError::config(format!(
                "crossover_probability must be in [0, 1], got {}",
                self.crossover_probability
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(TspError::config(format!(
                "mutation_probability must be in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        if self.max_generations == 0 {
            return Err(TspError::config("max_generations must be at least 1"));
        }
        if self.max_no_improvement == 0 {
            return Err(TspError::config("max_no_improvement must be at least 1"));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(TspError::config("tournament size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert!((config.crossover_probability - 0.8).abs() < 1e-10);
        assert!((config.mutation_probability - 0.2).abs() < 1e-10);
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.max_no_improvement, 150);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert_eq!(config.crossover, CrossoverMethod::Pmx);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(250)
            .with_crossover_probability(0.9)
            .with_mutation_probability(0.05)
            .with_max_generations(1000)
            .with_max_no_improvement(300)
            .with_selection(Selection::Scaling)
            .with_crossover(CrossoverMethod::Order)
            .with_seed(7);

        assert_eq!(config.population_size, 250);
        assert!((config.crossover_probability - 0.9).abs() < 1e-10);
        assert!((config.mutation_probability - 0.05).abs() < 1e-10);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.max_no_improvement, 300);
        assert_eq!(config.selection, Selection::Scaling);
        assert_eq!(config.crossover, CrossoverMethod::Order);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_clamp_probabilities() {
        let config = GaConfig::default()
            .with_crossover_probability(1.5)
            .with_mutation_probability(-0.5);
        assert!((config.crossover_probability - 1.0).abs() < 1e-10);
        assert!(config.mutation_probability.abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(matches!(config.validate(), Err(TspError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_zero_limits() {
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
        assert!(GaConfig::default().with_max_no_improvement(0).validate().is_err());
    }

    #[test]
    fn test_validate_raw_probability() {
        let config = GaConfig {
            mutation_probability: 2.0,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_tournament() {
        let config = GaConfig::default().with_selection(Selection::Tournament(0));
        assert!(config.validate().is_err());
    }
}
