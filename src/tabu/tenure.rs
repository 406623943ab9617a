//! Tabu tenure bookkeeping keyed by move coordinates.

/// Remaining tenure per move coordinate pair `(i, j)`.
///
/// The matrix is `(n + 1) × (n + 1)` for `n` cities. A pair is tabu while
/// its counter is positive; applying a move sets both `(i, j)` and `(j, i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenureMatrix {
    size: usize,
    data: Vec<usize>,
}

impl TenureMatrix {
    /// All-zero tenures for an `n`-city tour.
    pub fn new(n: usize) -> Self {
        let size = n + 1;
        Self {
            size,
            data: vec![0; size * size],
        }
    }

    /// Remaining tenure of `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.data[i * self.size + j]
    }

    /// Returns `true` while `(i, j)` has tenure left.
    #[inline]
    pub fn is_tabu(&self, i: usize, j: usize) -> bool {
        self.get(i, j) > 0
    }

    /// Decrements every positive counter by one.
    pub fn decay(&mut self) {
        for tenure in self.data.iter_mut().filter(|t| **t > 0) {
            *tenure -= 1;
        }
    }

    /// Marks the move `(i, j)` tabu for `tenure` iterations.
    pub fn apply(&mut self, i: usize, j: usize, tenure: usize) {
        self.data[i * self.size + j] = tenure;
        self.data[j * self.size + i] = tenure;
    }
}
