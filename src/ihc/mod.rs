//! Iterated hill climbing.
//!
//! Repeated descents over sampled neighborhoods, each from an
//! independent random tour. The shortest local optimum wins.

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::HillClimbRunner;
