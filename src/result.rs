//! Search result records.

use std::time::Instant;

use crate::tour::Tour;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The iteration or generation budget was exhausted.
    MaxIterations,
    /// The stagnation counter reached its limit.
    Stagnation,
    /// Tabu search found no admissible move.
    NoAdmissibleMove,
    /// Nearest-neighbor construction found no reachable unvisited city.
    Unreachable,
    /// A construction heuristic visited every city.
    Completed,
    /// Simulated annealing cooled below its freeze temperature.
    Frozen,
}

/// Outcome of one solver run, handed back to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Best tour found, as 0-based city indices.
    pub best_tour: Tour,
    /// Closed length of `best_tour`. For [`StopReason::Unreachable`] this is
    /// the open length of the partial tour, with no return edge.
    pub best_length: f64,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: f64,
    /// Completed iterations (generations for GA, steps for construction).
    pub iterations: usize,
    /// Why the run stopped.
    pub stop_reason: StopReason,
    /// Best known length after each iteration.
    pub length_history: Vec<f64>,
}

impl SearchResult {
    /// Best tour with 1-based city labels.
    pub fn best_tour_one_based(&self) -> Vec<usize> {
        self.best_tour.iter().map(|&city| city + 1).collect()
    }

    /// Best tour with the start city repeated at the end.
    pub fn closed_tour(&self) -> Tour {
        let mut closed = self.best_tour.clone();
        if let Some(&first) = closed.first() {
            closed.push(first);
        }
        closed
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
