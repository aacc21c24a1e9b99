//! Game collection for the support enumeration solver.
//!
//! These serve as:
//!
//! 1. **Validation**: Games with known Nash equilibria (matching pennies,
//!    rock-paper-scissors, ...) verify that the solver is correct.
//!
//! 2. **Benchmarks**: Seeded random games of any size for performance testing.
//!
//! ## Available Games
//!
//! - [`classic`]: Textbook games with known equilibria
//! - [`random`]: Seeded uniform random games

pub mod classic;
pub mod random;
