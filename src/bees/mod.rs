//! Bees Algorithm.
//!
//! A population of scout tours is ranked every iteration. The shortest
//! (elite) and next-shortest (best) sites recruit neighbor tours around
//! themselves, and random scouts top the population back up.
//!
//! # References
//!
//! - Pham et al. (2006), "The Bees Algorithm: A Novel Tool for Complex
//!   Optimisation Problems"

mod config;
mod runner;

pub use config::BeesConfig;
pub use runner::BeesRunner;
