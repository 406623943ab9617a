//! Heuristic solvers for the symmetric Traveling Salesman Problem.
//!
//! Every solver takes a [`DistanceMatrix`] and returns a [`SearchResult`]:
//!
//! - **Nearest Neighbor (NN)**: Greedy construction from a start city.
//! - **Genetic Algorithm (GA)**: Population-based evolution with tournament,
//!   ranking, or scaling selection and PMX or order crossover.
//! - **Tabu Search (TS)**: Exhaustive neighborhood scan with a tenure
//!   matrix over move coordinates and aspiration.
//! - **Bees Algorithm**: Elite and best sites recruit local neighbors;
//!   random scouts keep the population topped up.
//! - **Simulated Annealing (SA)**: Sampled neighbors with Metropolis
//!   acceptance under geometric cooling.
//! - **Iterated Hill Climbing (IHC)**: Restarted sampled descent.
//!
//! # Architecture
//!
//! Shared pieces sit at the crate root: the distance matrix, tours and
//! their [`Neighborhood`] moves, seeded generators, and result records.
//! Each solver lives in its own module as a `*Config` with `with_*`
//! builders and a unit `*Runner` with `run` and `run_with_rng`.
//!
//! Runs are single-threaded and own their generator, so independent runs
//! can execute concurrently against one shared matrix.
//!
//! # Logging
//!
//! Runners emit [`tracing`] spans and events (debug for run summaries,
//! trace per iteration, warn for early stops). No subscriber is installed.

pub mod bees;
pub mod criterion;
pub mod distance;
pub mod error;
pub mod ga;
pub mod ihc;
pub mod nn;
pub mod random;
pub mod result;
pub mod sa;
pub mod tabu;
pub mod tour;

#[cfg(test)]
mod testing;

pub use criterion::Criterion;
pub use distance::DistanceMatrix;
pub use error::{Result, TspError};
pub use result::{SearchResult, StopReason};
pub use tour::{EvaluatedTour, Neighborhood, Tour};
