//! Permutation crossover and mutation operators.
//!
//! Both crossovers copy a segment `[start, end]` from one parent verbatim
//! and fill the remaining slots from the other parent. They differ only in
//! where the fill begins:
//!
//! - [`CrossoverMethod::Pmx`]: donor genes go into the first free slot,
//!   scanning the donor from its first position.
//! - [`CrossoverMethod::Order`]: donor genes go into consecutive slots
//!   starting after `end`, scanning the donor from after `end` and wrapping.
//!
//! The `*_with_segment` functions are deterministic and accept any segment
//! with `start <= end < n`, including a single-gene segment.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::Rng;

use crate::tour::Tour;

/// Marks an offspring slot that has not been filled yet.
const EMPTY: usize = usize::MAX;

/// Crossover operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverMethod {
    /// Partially-mapped crossover with first-free-slot fill.
    #[default]
    Pmx,
    /// Order crossover.
    Order,
}

impl CrossoverMethod {
    /// Recombines two parents with a random segment.
    pub fn apply<R: Rng>(self, parent1: &[usize], parent2: &[usize], rng: &mut R) -> (Tour, Tour) {
        let (start, end) = random_segment(parent1.len(), rng);
        match self {
            CrossoverMethod::Pmx => pmx_with_segment(parent1, parent2, start, end),
            CrossoverMethod::Order => order_with_segment(parent1, parent2, start, end),
        }
    }
}

/// PMX over `[start, end]`. Returns `(child of parent1, child of parent2)`.
///
/// # Panics
/// Panics if the parents differ in length or the segment is out of range.
pub fn pmx_with_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> (Tour, Tour) {
    check_segment(parent1, parent2, start, end);
    (
        pmx_child(parent1, parent2, start, end),
        pmx_child(parent2, parent1, start, end),
    )
}

/// Order crossover over `[start, end]`. Returns
/// `(child of parent1, child of parent2)`.
///
/// # Panics
/// Panics if the parents differ in length or the segment is out of range.
pub fn order_with_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> (Tour, Tour) {
    check_segment(parent1, parent2, start, end);
    (
        order_child(parent1, parent2, start, end),
        order_child(parent2, parent1, start, end),
    )
}

fn check_segment(parent1: &[usize], parent2: &[usize], start: usize, end: usize) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(
        start <= end && end < parent1.len(),
        "segment [{start}, {end}] out of range for length {}",
        parent1.len()
    );
}

/// Copies `template[start..=end]` into a fresh offspring and returns it with
/// the membership flags of the copied genes.
fn seed_child(template: &[usize], start: usize, end: usize) -> (Tour, Vec<bool>) {
    let n = template.len();
    let mut child = vec![EMPTY; n];
    let mut present = vec![false; n];
    for i in start..=end {
        child[i] = template[i];
        present[template[i]] = true;
    }
    (child, present)
}

fn pmx_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Tour {
    let (mut child, mut present) = seed_child(template, start, end);
    // Slots fill strictly left to right, so the free cursor only advances.
    let mut free = 0;
    for &gene in donor {
        if present[gene] {
            continue;
        }
        while child[free] != EMPTY {
            free += 1;
        }
        child[free] = gene;
        present[gene] = true;
    }
    child
}

fn order_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Tour {
    let n = template.len();
    let (mut child, mut present) = seed_child(template, start, end);
    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let gene = donor[(end + 1 + offset) % n];
        if present[gene] {
            continue;
        }
        child[pos] = gene;
        present[gene] = true;
        pos = (pos + 1) % n;
    }
    child
}

/// Returns a copy of `tour` with two independently drawn positions swapped.
pub fn swap_mutation<R: Rng>(tour: &[usize], rng: &mut R) -> Tour {
    let mut mutated = tour.to_vec();
    let n = mutated.len();
    if n >= 2 {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        mutated.swap(i, j);
    }
    mutated
}

/// Draws `start` uniformly in `0..n`, then `end` uniformly in `start..n`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let start = rng.random_range(0..n);
    let end = rng.random_range(start..n);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tour::is_permutation;
    use proptest::prelude::*;

    #[test]
    fn test_pmx_fills_first_free_slot() {
        let p1 = [0, 1, 2, 3, 4, 5];
        let p2 = [5, 3, 1, 4, 0, 2];
        let (c1, c2) = pmx_with_segment(&p1, &p2, 2, 3);
        // Segment [2, 3] keeps 2, 3; donor order 5, 1, 4, 0 fills slots 0, 1, 4, 5.
        assert_eq!(c1, vec![5, 1, 2, 3, 4, 0]);
        // Segment keeps 1, 4; donor order 0, 2, 3, 5.
        assert_eq!(c2, vec![0, 2, 1, 4, 3, 5]);
    }

    #[test]
    fn test_order_fills_after_segment() {
        let p1 = [0, 1, 2, 3, 4, 5];
        let p2 = [5, 3, 1, 4, 0, 2];
        let (c1, c2) = order_with_segment(&p1, &p2, 2, 3);
        // Donor read from position 4: 0, 2, 5, 3, 1, 4 -> keeps 0, 5, 1, 4.
        // Slots 4, 5, 0, 1 receive them in that order.
        assert_eq!(c1, vec![1, 4, 2, 3, 0, 5]);
        // Donor read from position 4: 4, 5, 0, 1, 2, 3 -> keeps 5, 0, 2, 3.
        assert_eq!(c2, vec![2, 3, 1, 4, 5, 0]);
    }

    #[test]
    fn test_full_segment_copies_parent() {
        let p1 = [3, 0, 2, 1];
        let p2 = [1, 2, 3, 0];
        assert_eq!(pmx_with_segment(&p1, &p2, 0, 3), (p1.to_vec(), p2.to_vec()));
        assert_eq!(order_with_segment(&p1, &p2, 0, 3), (p1.to_vec(), p2.to_vec()));
    }

    #[test]
    fn test_identical_parents() {
        let p = [4, 2, 0, 3, 1];
        let mut rng = create_rng(42);
        for method in [CrossoverMethod::Pmx, CrossoverMethod::Order] {
            for _ in 0..20 {
                let (c1, c2) = method.apply(&p, &p, &mut rng);
                assert!(is_permutation(&c1, 5));
                assert!(is_permutation(&c2, 5));
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_segment_out_of_range_panics() {
        pmx_with_segment(&[0, 1, 2], &[2, 1, 0], 1, 3);
    }

    #[test]
    fn test_swap_mutation_copies() {
        let mut rng = create_rng(42);
        let base: Tour = (0..10).collect();
        for _ in 0..100 {
            let mutated = swap_mutation(&base, &mut rng);
            assert!(is_permutation(&mutated, 10));
        }
        assert_eq!(base, (0..10).collect::<Tour>());
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end && end < 10);
        }
    }

    fn parents_and_segment() -> impl Strategy<Value = (Tour, Tour, usize, usize)> {
        (2usize..16)
            .prop_flat_map(|n| {
                let identity: Tour = (0..n).collect();
                (
                    Just(identity.clone()).prop_shuffle(),
                    Just(identity).prop_shuffle(),
                    0..n,
                )
            })
            .prop_flat_map(|(p1, p2, start)| {
                let n = p1.len();
                (Just(p1), Just(p2), Just(start), start..n)
            })
    }

    proptest! {
        #[test]
        fn prop_pmx_children_are_permutations((p1, p2, start, end) in parents_and_segment()) {
            let n = p1.len();
            let (c1, c2) = pmx_with_segment(&p1, &p2, start, end);
            prop_assert!(is_permutation(&c1, n), "{:?}", c1);
            prop_assert!(is_permutation(&c2, n), "{:?}", c2);
            prop_assert_eq!(&c1[start..=end], &p1[start..=end]);
            prop_assert_eq!(&c2[start..=end], &p2[start..=end]);
        }

        #[test]
        fn prop_order_children_are_permutations((p1, p2, start, end) in parents_and_segment()) {
            let n = p1.len();
            let (c1, c2) = order_with_segment(&p1, &p2, start, end);
            prop_assert!(is_permutation(&c1, n), "{:?}", c1);
            prop_assert!(is_permutation(&c2, n), "{:?}", c2);
            prop_assert_eq!(&c1[start..=end], &p1[start..=end]);
            prop_assert_eq!(&c2[start..=end], &p2[start..=end]);
        }

        #[test]
        fn prop_degenerate_segments((p1, p2, _start, _end) in parents_and_segment()) {
            let n = p1.len();
            for (start, end) in [(0, 0), (n - 1, n - 1), (0, n - 1), (n / 2, n - 1)] {
                let (a, b) = pmx_with_segment(&p1, &p2, start, end);
                let (c, d) = order_with_segment(&p1, &p2, start, end);
                for child in [a, b, c, d] {
                    prop_assert!(is_permutation(&child, n), "{:?}", child);
                }
            }
        }
    }
}
