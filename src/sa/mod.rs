//! Simulated Annealing (SA).
//!
//! A single-tour trajectory that accepts worsening candidates with a
//! probability that shrinks as the temperature cools. Each iteration samples
//! a few random neighbors and considers only the shortest of them.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::SaRunner;
