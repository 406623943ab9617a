//! Tabu Search (TS).
//!
//! A single-tour trajectory that scans the full move neighborhood every
//! iteration. Recently applied move coordinates stay tabu for a fixed
//! tenure unless the move would set a new best length (aspiration).
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod tenure;

pub use config::TabuConfig;
pub use runner::TabuRunner;
pub use tenure::TenureMatrix;
