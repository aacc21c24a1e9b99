//! Support enumeration for two-player strategic games.
//!
//! This module computes Nash equilibria of bimatrix games `(A, B)` by trying
//! every pair of equal-size supports, solving for the mixed strategies that
//! make each opponent indifferent on that support, and keeping the pairs that
//! survive a best-response check.
//!
//! # Overview
//!
//! 1. [`powerset`] enumerates index subsets in canonical order
//! 2. [`potential_support_pairs`] pairs row and column subsets of equal size
//! 3. [`solve_indifference`] solves the indifference system for one player
//! 4. [`indifference_strategies`] does so for both players over every pair
//! 5. [`obey_support`] and [`is_ne`] filter out non-equilibria
//! 6. [`support_enumeration`] composes the above into a lazy stream
//!
//! # Example
//!
//! ```
//! use bimatrix_solver::support::{support_enumeration, BimatrixGame, SupportEnumConfig};
//! use ndarray::array;
//!
//! let game = BimatrixGame::new(
//!     array![[2.0, 1.0], [0.0, 2.0]],
//!     array![[2.0, 0.0], [1.0, 2.0]],
//! ).unwrap();
//!
//! for eq in support_enumeration(&game, &SupportEnumConfig::default()) {
//!     println!("{} / {}", eq.row_strategy, eq.column_strategy);
//! }
//! ```
//!
//! # Theory
//!
//! In a non-degenerate game every equilibrium has supports of equal size `k`,
//! and the equilibrium strategy on a given support is the unique solution of
//! a `k x k` linear system:
//! ```text
//! Σ_r σr[r]·B[r, c] = v   for every c in the column support
//! Σ_r σr[r]        = 1
//! ```
//! The work is exponential in the number of pure strategies, but the stream
//! is lazy, so callers that need only one equilibrium can stop early.
//!
//! # References
//!
//! - Nisan, N., et al. "Algorithmic Game Theory", ch. 3 (2007)

pub mod config;
pub mod game;
pub mod indifference;
pub mod linalg;
pub mod output;
pub mod pairs;
pub mod powerset;
pub mod solver;
pub mod verify;

// Re-export main types for convenient access
pub use config::{ConfigError, SupportEnumConfig, DEFAULT_SINGULAR_TOLERANCE, DEFAULT_TOLERANCE};
pub use game::{BimatrixGame, GameError, GameSpec};
pub use indifference::{
    candidate_for, indifference_strategies, solve_indifference, Candidate, Indifference,
    IndifferenceStrategies,
};
pub use linalg::solve_linear_system;
pub use output::{EquilibriumRecord, SolutionOutput};
pub use pairs::{potential_support_pairs, support_count, SupportPair, SupportPairs};
pub use powerset::{binomial, powerset, Combinations, Powerset};
pub use solver::{support_enumeration, Equilibria, Equilibrium, SolveStats, SupportEnumSolver};
pub use verify::{is_ne, obey_support, support_matches, verify_candidate, Verdict};
