//! Seeded random number generation.
//!
//! Every run owns its generator. Runners build one from `config.seed` via
//! [`create_rng`], or accept a caller-supplied generator through their
//! `run_with_rng` entry points.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::tour::Tour;

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Returns a uniformly random permutation of `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..n).collect();
    tour.shuffle(rng);
    tour
}
