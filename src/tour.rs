//! Tour representation and move generators.
//!
//! A tour is a permutation of city indices `0..n` that implicitly closes
//! back to its first city. Moves are pairs of positions `(i, j)` whose
//! meaning depends on the [`Neighborhood`].
//!
//! Move generators always return a fresh tour; the base tour is shared by
//! many candidate evaluations and is never modified.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// A closed visiting order: a permutation of `0..n`.
pub type Tour = Vec<usize>;

/// Local perturbation operator mapping one tour to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// Exchange the cities at positions `i` and `j`.
    #[default]
    Swap,
    /// Remove the city at position `j` and reinsert it at position `i`.
    Insert,
    /// Reverse the segment between `min(i, j)` and `max(i, j)` inclusive.
    Inverse,
}

impl Neighborhood {
    /// All neighborhood types, in declaration order.
    pub const ALL: [Neighborhood; 3] = [
        Neighborhood::Swap,
        Neighborhood::Insert,
        Neighborhood::Inverse,
    ];
}

/// A tour together with its closed length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedTour {
    /// The visiting order.
    pub tour: Tour,
    /// Closed length of `tour`.
    pub length: f64,
}

impl EvaluatedTour {
    /// Evaluates `tour` against `matrix`.
    pub fn new(tour: Tour, matrix: &DistanceMatrix) -> Self {
        let length = matrix.tour_length(&tour);
        Self { tour, length }
    }
}

/// Applies the move `(i, j)` of type `kind` to a copy of `tour`.
///
/// For [`Neighborhood::Inverse`] the positions are normalized so that
/// callers drawing `i` and `j` independently need not order them.
///
/// # Panics
/// Panics if `i` or `j` is out of bounds.
pub fn neighbor(tour: &[usize], i: usize, j: usize, kind: Neighborhood) -> Tour {
    let mut next = tour.to_vec();
    match kind {
        Neighborhood::Swap => next.swap(i, j),
        Neighborhood::Insert => {
            let city = next.remove(j);
            next.insert(i, city);
        }
        Neighborhood::Inverse => {
            let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
            next[lo..=hi].reverse();
        }
    }
    next
}

/// Applies one move with independently drawn positions.
pub fn random_neighbor<R: Rng>(tour: &[usize], kind: Neighborhood, rng: &mut R) -> Tour {
    let n = tour.len();
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    neighbor(tour, i, j, kind)
}

/// Shortest of `count` random neighbors; the first drawn wins ties.
pub fn best_of_sample<R: Rng>(
    matrix: &DistanceMatrix,
    tour: &[usize],
    count: usize,
    kind: Neighborhood,
    rng: &mut R,
) -> EvaluatedTour {
    let mut best = EvaluatedTour::new(random_neighbor(tour, kind, rng), matrix);
    for _ in 1..count {
        let next = EvaluatedTour::new(random_neighbor(tour, kind, rng), matrix);
        if next.length < best.length {
            best = next;
        }
    }
    best
}

/// Returns `true` if `tour` is a permutation of `0..n`.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Checks a caller-supplied tour before a search starts from it.
pub(crate) fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if is_permutation(tour, n) {
        Ok(())
    } else {
        Err(TspError::input(format!(
            "initial tour must be a permutation of 0..{n}, got {tour:?}"
        )))
    }
}
