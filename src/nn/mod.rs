//! Nearest-Neighbor construction.
//!
//! Greedy tour construction: starting from a given city, repeatedly travel
//! to the closest unvisited city, then return to the start. One tour is
//! built per start city; choosing among them is left to the caller, with
//! [`NearestNeighbor::best_of_all`] as a convenience.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"

mod runner;

pub use runner::NearestNeighbor;
