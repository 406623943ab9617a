//! Nearest-Neighbor construction loop.

use std::time::Instant;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::result::{elapsed_ms, SearchResult, StopReason};

/// Builds greedy nearest-neighbor tours.
pub struct NearestNeighbor;

impl NearestNeighbor {
    /// Builds the nearest-neighbor tour starting at `start`.
    ///
    /// Ties are broken by the lowest city index. If no unvisited city is
    /// reachable (every remaining edge is infinite) construction stops early
    /// and the partial tour and partial length are returned without a
    /// closing edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_metaheur::{DistanceMatrix, nn::NearestNeighbor};
    ///
    /// let matrix = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![1.0, 0.0, 4.0, 5.0],
    ///     vec![2.0, 4.0, 0.0, 6.0],
    ///     vec![3.0, 5.0, 6.0, 0.0],
    /// ]).unwrap();
    /// let result = NearestNeighbor::run(&matrix, 0).unwrap();
    /// assert_eq!(result.closed_tour(), vec![0, 1, 2, 3, 0]);
    /// assert_eq!(result.best_length, 14.0);
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(cities = matrix.size(), start = start))]
    pub fn run(matrix: &DistanceMatrix, start: usize) -> Result<SearchResult> {
        let n = matrix.size();
        if start >= n {
            return Err(TspError::input(format!(
                "start city {start} out of range for {n} cities"
            )));
        }

        let timer = Instant::now();
        let mut visited = vec![false; n];
        let mut tour = Vec::with_capacity(n);
        let mut length = 0.0;
        let mut current = start;
        visited[start] = true;
        tour.push(start);

        for _ in 1..n {
            let mut next = None;
            let mut shortest = f64::INFINITY;
            for (city, &d) in matrix.row(current).iter().enumerate() {
                if !visited[city] && d < shortest {
                    shortest = d;
                    next = Some(city);
                }
            }

            let Some(city) = next else {
                tracing::warn!(
                    visited = tour.len(),
                    "no reachable unvisited city from {current}, stopping early"
                );
                return Ok(SearchResult {
                    iterations: tour.len() - 1,
                    best_tour: tour,
                    best_length: length,
                    elapsed_ms: elapsed_ms(timer),
                    stop_reason: StopReason::Unreachable,
                    length_history: vec![length],
                });
            };

            visited[city] = true;
            tour.push(city);
            length += shortest;
            current = city;
        }

        length += matrix.distance(current, start);
        tracing::debug!(length, "nearest-neighbor tour complete");

        Ok(SearchResult {
            iterations: n - 1,
            best_tour: tour,
            best_length: length,
            elapsed_ms: elapsed_ms(timer),
            stop_reason: StopReason::Completed,
            length_history: vec![length],
        })
    }

    /// Builds one tour per start city, in start-city order.
    ///
    /// With the `parallel` feature the constructions run on rayon's pool;
    /// each one is still an independent single-threaded build.
    pub fn run_all(matrix: &DistanceMatrix) -> Result<Vec<SearchResult>> {
        let n = matrix.size();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..n)
                .into_par_iter()
                .map(|start| Self::run(matrix, start))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..n).map(|start| Self::run(matrix, start)).collect()
        }
    }

    /// Shortest tour over every start city; the lowest start wins ties.
    pub fn best_of_all(matrix: &DistanceMatrix) -> Result<SearchResult> {
        let mut results = Self::run_all(matrix)?;
        // A validated matrix has at least 2 cities, hence at least 2 results.
        let mut best = 0;
        for (start, r) in results.iter().enumerate().skip(1) {
            if r.best_length < results[best].best_length {
                best = start;
            }
        }
        Ok(results.swap_remove(best))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{circle, circle_optimum, four_city};
    use crate::tour::is_permutation;

    #[test]
    fn test_four_city_from_zero() {
        let result = NearestNeighbor::run(&four_city(), 0).unwrap();
        assert_eq!(result.best_tour, vec![0, 1, 2, 3]);
        assert_eq!(result.closed_tour(), vec![0, 1, 2, 3, 0]);
        assert_eq!(result.best_length, 14.0);
        assert_eq!(result.stop_reason, StopReason::Completed);
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_first_minimum_wins_ties() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 2.0, 2.0],
            vec![2.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ])
        .unwrap();
        let result = NearestNeighbor::run(&matrix, 0).unwrap();
        assert_eq!(result.best_tour, vec![0, 1, 2]);
    }

    #[test]
    fn test_start_out_of_range() {
        let err = NearestNeighbor::run(&four_city(), 4).unwrap_err();
        assert!(matches!(err, TspError::InvalidInput(_)));
    }

    #[test]
    fn test_unreachable_returns_partial_tour() {
        let inf = f64::INFINITY;
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, inf, inf],
            vec![1.0, 0.0, inf, inf],
            vec![inf, inf, 0.0, 1.0],
            vec![inf, inf, 1.0, 0.0],
        ])
        .unwrap();
        let result = NearestNeighbor::run(&matrix, 0).unwrap();
        assert_eq!(result.stop_reason, StopReason::Unreachable);
        assert_eq!(result.best_tour, vec![0, 1]);
        assert_eq!(result.best_length, 1.0);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_run_all_one_per_start() {
        let matrix = circle(9);
        let results = NearestNeighbor::run_all(&matrix).unwrap();
        assert_eq!(results.len(), 9);
        for (start, r) in results.iter().enumerate() {
            assert_eq!(r.best_tour[0], start);
            assert!(is_permutation(&r.best_tour, 9));
            assert!((r.best_length - matrix.tour_length(&r.best_tour)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_best_of_all_picks_shortest_start() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0, 9.0],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![9.0, 2.0, 1.0, 0.0],
        ])
        .unwrap();
        let best = NearestNeighbor::best_of_all(&matrix).unwrap();
        assert_eq!(best.best_tour, vec![1, 0, 2, 3]);
        assert_eq!(best.best_length, 6.0);

        // Every start ties on this instance; the lowest one is kept.
        let tied = NearestNeighbor::best_of_all(&four_city()).unwrap();
        assert_eq!(tied.best_tour[0], 0);
    }

    #[test]
    fn test_circle_is_solved_greedily() {
        let best = NearestNeighbor::best_of_all(&circle(12)).unwrap();
        assert!((best.best_length - circle_optimum(12)).abs() < 1e-6);
    }
}
