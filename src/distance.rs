//! Distance model.
//!
//! [`DistanceMatrix`] wraps an immutable square matrix of edge costs and
//! computes closed-tour lengths. It is validated once at construction so the
//! hot evaluation path never re-checks its input.

use crate::error::{Result, TspError};

/// Immutable n×n matrix of non-negative edge costs, stored row-major.
///
/// Symmetry is not enforced. `f64::INFINITY` is accepted and means the
/// edge cannot be travelled; negative and NaN entries are rejected.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.tour_length(&[0, 1, 2]), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

/// Unchecked wire form; deserialization goes through [`DistanceMatrix::from_flat`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    n: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = TspError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_flat(raw.n, raw.data)
    }
}

impl DistanceMatrix {
    /// Builds a matrix from a vector of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(TspError::input("distance matrix is empty"));
        }
        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(TspError::input(format!(
                "distance matrix is not square: row {r} has {} columns, expected {n}",
                row.len()
            )));
        }
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        Self::from_flat(n, data)
    }

    /// Builds a matrix of size `n` from row-major data.
    pub fn from_flat(n: usize, data: Vec<f64>) -> Result<Self> {
        if n == 0 || data.is_empty() {
            return Err(TspError::input("distance matrix is empty"));
        }
        let expected = n
            .checked_mul(n)
            .ok_or_else(|| TspError::input(format!("{n} cities overflow the matrix size")))?;
        if data.len() != expected {
            return Err(TspError::input(format!(
                "distance matrix is not square: {} entries for {n} cities",
                data.len()
            )));
        }
        if n < 2 {
            return Err(TspError::input("at least 2 cities are required"));
        }
        if let Some(k) = data.iter().position(|d| d.is_nan() || *d < 0.0) {
            return Err(TspError::input(format!(
                "distance ({}, {}) must be non-negative, got {}",
                k / n,
                k % n,
                data[k]
            )));
        }
        Ok(Self { n, data })
    }

    /// Number of cities.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost of travelling from city `i` to city `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Costs of every edge leaving city `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Length of the closed tour: consecutive edges plus the return edge.
    ///
    /// The caller guarantees `tour` is a permutation of `0..size()`.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        debug_assert_eq!(tour.len(), self.n, "tour must visit every city");
        let Some((&first, &last)) = tour.first().zip(tour.last()) else {
            return 0.0;
        };
        let open: f64 = tour
            .windows(2)
            .map(|w| self.distance(w[0], w[1]))
            .sum();
        open + self.distance(last, first)
    }
}
