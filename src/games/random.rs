//! Random bimatrix games for testing and benchmarking.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::support::{BimatrixGame, GameError};

/// Generate an `m x n` game with payoffs drawn uniformly from `[0, 10)`.
///
/// The same seed always produces the same game. Continuous payoffs make the
/// result non-degenerate with probability one.
pub fn random_game(m: usize, n: usize, seed: u64) -> Result<BimatrixGame, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = Array2::from_shape_fn((m, n), |_| rng.gen_range(0.0..10.0));
    let b = Array2::from_shape_fn((m, n), |_| rng.gen_range(0.0..10.0));
    BimatrixGame::new(a, b)
}
