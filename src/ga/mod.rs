//! Genetic Algorithm for permutation tours.
//!
//! Each generation rebuilds the population through selection, then applies
//! crossover and mutation as whole-population stages gated by one random
//! trial each.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, probabilities, operators)
//! - [`GaRunner`]: Executes the generational loop
//! - [`Selection`]: Tournament, ranking, or linear-scaling roulette
//! - [`CrossoverMethod`]: PMX or order crossover
//!
//! # Submodules
//!
//! - [`operators`]: Permutation crossover (PMX, OX) and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use operators::CrossoverMethod;
pub use runner::GaRunner;
pub use selection::Selection;
