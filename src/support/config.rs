//! Configuration options for the support enumeration solver.
//!
//! This module centralizes the numerical tolerances used by the feasibility
//! and equilibrium checks, plus the threading options of the parallel driver.

use serde::{Deserialize, Serialize};

/// Default tolerance for comparisons against zero and against the support payoff.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default relative pivot magnitude under which an indifference system is singular.
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-12;

/// Configuration for the support enumeration solver.
///
/// # Example
/// ```
/// use bimatrix_solver::support::SupportEnumConfig;
///
/// let config = SupportEnumConfig::default().with_tolerance(1e-9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportEnumConfig {
    /// Tolerance used by `obey_support` and `is_ne`.
    ///
    /// The value is absolute. A probability is considered positive only if it
    /// exceeds this value, and a deviation only improves a player's payoff if it
    /// does so by more than this many payoff units. Games with very small or very
    /// large payoffs need a tolerance scaled to match.
    pub tolerance: f64,

    /// Relative pivot threshold for the indifference linear solve.
    ///
    /// Pivots smaller than `singular_tolerance * max|M|` mark the system as singular,
    /// and the candidate support pair is skipped.
    pub singular_tolerance: f64,

    /// Number of threads for `solve_parallel`.
    ///
    /// Set to `None` to use all available cores.
    pub num_threads: Option<usize>,
}

impl Default for SupportEnumConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
            num_threads: None,
        }
    }
}

impl SupportEnumConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the feasibility/equilibrium tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: set the singular pivot threshold.
    pub fn with_singular_tolerance(mut self, singular_tolerance: f64) -> Self {
        self.singular_tolerance = singular_tolerance;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance("tolerance", self.tolerance));
        }

        if !self.singular_tolerance.is_finite() || self.singular_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(
                "singular_tolerance",
                self.singular_tolerance,
            ));
        }

        if self.num_threads == Some(0) {
            return Err(ConfigError::InvalidThreads);
        }

        Ok(())
    }
}

/// Errors that can occur when validating solver configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A tolerance is negative or not finite.
    InvalidTolerance(&'static str, f64),
    /// Thread count was explicitly set to zero.
    InvalidThreads,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTolerance(name, val) => {
                write!(f, "{} {} must be a finite non-negative number", name, val)
            }
            ConfigError::InvalidThreads => write!(f, "Thread count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
