//! Selection strategies for the GA.
//!
//! Selection rebuilds the whole population each generation. All strategies
//! read tour lengths (lower is better) but the two roulette-based methods
//! keep their historical weighting, which does not always favor short
//! tours; see the variant docs.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 4 (linear fitness scaling)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::tour::Tour;

/// Selection strategy.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ga::Selection;
///
/// let sel = Selection::Tournament(3);
/// assert_eq!(sel, Selection::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Draw `k` tours uniformly with replacement and keep the shortest.
    /// The first drawn wins ties.
    Tournament(usize),

    /// Sort ascending by length; rank `r` (1 = shortest) gets probability
    /// `r / population_len`, then roulette over the sorted order.
    ///
    /// The probabilities sum to more than one, so the walk always stops
    /// within the first half or so of the ranking.
    Ranking,

    /// Linear fitness scaling on raw lengths: `shift = 2·mean − max`,
    /// weight `max(0, length − shift)`, roulette over the unsorted
    /// population.
    Scaling,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Builds a new population of `count` tours selected from `population`.
    ///
    /// Selected tours are copies; `population` is left untouched.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(
        &self,
        population: &[Tour],
        matrix: &DistanceMatrix,
        count: usize,
        rng: &mut R,
    ) -> Vec<Tour> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let lengths: Vec<f64> = population.iter().map(|t| matrix.tour_length(t)).collect();

        match self {
            Selection::Tournament(k) => (0..count)
                .map(|_| population[tournament(&lengths, *k, rng)].clone())
                .collect(),
            Selection::Ranking => {
                let order = ranked_order(&lengths);
                let probabilities = ranking_probabilities(order.len());
                (0..count)
                    .map(|_| population[order[roulette(&probabilities, rng)]].clone())
                    .collect()
            }
            Selection::Scaling => {
                let probabilities = scaling_probabilities(&lengths);
                (0..count)
                    .map(|_| population[roulette(&probabilities, rng)].clone())
                    .collect()
            }
        }
    }
}

/// Index of the shortest of `k` uniform draws.
fn tournament<R: Rng>(lengths: &[f64], k: usize, rng: &mut R) -> usize {
    let n = lengths.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if lengths[idx] < lengths[best] {
            best = idx;
        }
    }
    best
}

/// Population indices sorted by ascending length; equal lengths keep their
/// original order.
fn ranked_order(lengths: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..lengths.len()).collect();
    order.sort_by(|&a, &b| lengths[a].total_cmp(&lengths[b]));
    order
}

fn ranking_probabilities(n: usize) -> Vec<f64> {
    (1..=n).map(|r| r as f64 / n as f64).collect()
}

/// Normalized linearly scaled lengths. All zeros when every scaled weight
/// is zero, which sends every draw to the uniform fallback.
fn scaling_probabilities(lengths: &[f64]) -> Vec<f64> {
    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / n;
    let max = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let shift = 2.0 * mean - max;

    let scaled: Vec<f64> = lengths.iter().map(|&l| (l - shift).max(0.0)).collect();
    let total: f64 = scaled.iter().sum();
    if total > 0.0 && total.is_finite() {
        scaled.iter().map(|&s| s / total).collect()
    } else {
        vec![0.0; lengths.len()]
    }
}

/// Roulette-wheel draw: the first index whose cumulative probability
/// reaches `r ∈ [0, 1)`, or a uniform index if rounding leaves none.
fn roulette<R: Rng>(probabilities: &[f64], rng: &mut R) -> usize {
    let r: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if r <= cumulative {
            return i;
        }
    }
    rng.random_range(0..probabilities.len())
}
