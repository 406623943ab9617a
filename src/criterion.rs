//! Termination criteria for the trajectory and swarm engines.

/// Declared stopping criterion of a tabu or bees run.
///
/// [`is_met`](Criterion::is_met) is the literal predicate for each
/// criterion. Engines decide which counters and limits to feed it; see
/// [`TabuConfig::strict_iteration_count`](crate::tabu::TabuConfig) for the
/// inherited tabu behavior where both criteria count stagnation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    /// Stop after a number of iterations.
    Iterations,
    /// Stop after a number of consecutive iterations without improving the
    /// best known length.
    #[default]
    IterationsWithoutImprovement,
}

impl Criterion {
    /// Returns `true` once the criterion's counter reaches `limit`.
    ///
    /// `iterations` is the number of completed iterations and `stagnation`
    /// the number of consecutive completed iterations without improvement.
    pub fn is_met(self, iterations: usize, stagnation: usize, limit: usize) -> bool {
        match self {
            Criterion::Iterations => iterations >= limit,
            Criterion::IterationsWithoutImprovement => stagnation >= limit,
        }
    }
}
