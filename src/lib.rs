//! # Bimatrix Solver
//!
//! Nash equilibria of two-player, non-zero-sum games in strategic form by
//! support enumeration.
//!
//! ## Features
//!
//! - **Lazy Enumeration**: Equilibria are produced as an iterator; stop after the first
//! - **Tagged Solves**: Singular indifference systems surface as `Indifference::NoSolution`
//! - **Tolerance Policy**: One configurable tolerance for feasibility and best-response checks
//! - **Parallel Driver**: Candidates evaluated on rayon, output kept in canonical order
//!
//! ## Quick Start
//!
//! ```
//! use bimatrix_solver::support::{BimatrixGame, SupportEnumConfig, SupportEnumSolver};
//! use ndarray::array;
//!
//! let game = BimatrixGame::zero_sum(array![[1.0, -1.0], [-1.0, 1.0]]).unwrap();
//! let solver = SupportEnumSolver::new(game, SupportEnumConfig::default()).unwrap();
//!
//! let first = solver.equilibria().next().unwrap();
//! assert_eq!(first.row_support, vec![0, 1]);
//! ```
//!
//! ## Modules
//!
//! - [`support`]: Support enumeration algorithm and game type
//! - [`games`]: Classic and random games for validation and benchmarks
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 Orchestrator (support_enumeration)           │
//! └──────────────────────────────────────────────────────────────┘
//!                │                                  │
//!                ▼                                  ▼
//!   ┌─────────────────────────┐        ┌─────────────────────────┐
//!   │ Indifference strategies │        │ obey_support / is_ne    │
//!   └─────────────────────────┘        └─────────────────────────┘
//!         │               │
//!         ▼               ▼
//!   ┌─────────────┐ ┌────────────────────┐
//!   │ Support     │ │ solve_indifference │
//!   │ pairs       │ │ (linear solve)     │
//!   └─────────────┘ └────────────────────┘
//!         │
//!         ▼
//!   ┌─────────────┐
//!   │ Powerset    │
//!   └─────────────┘
//! ```

#![warn(missing_docs)]

/// Support enumeration solver module.
///
/// This is the core module containing the algorithm and the game type.
pub mod support;

/// Game collection module.
///
/// Contains classic games with known equilibria and seeded random games.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use support::{
    support_enumeration, BimatrixGame, Equilibrium, GameError, SolveStats, SupportEnumConfig,
    SupportEnumSolver,
};
