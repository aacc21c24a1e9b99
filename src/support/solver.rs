//! Support enumeration driver.
//!
//! Composes the support pair enumerator, the indifference solver and the
//! equilibrium checks into a lazy stream of equilibria, plus eager sequential
//! and parallel drivers that also collect statistics.

use std::time::Instant;

use log::{debug, info};
use ndarray::Array1;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::support::config::{ConfigError, SupportEnumConfig};
use crate::support::game::BimatrixGame;
use crate::support::indifference::{candidate_for, Candidate, IndifferenceStrategies};
use crate::support::pairs::{potential_support_pairs, support_count, SupportPair};
use crate::support::verify::{verify_candidate, Verdict};

/// A verified Nash equilibrium.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibrium {
    /// Row player's mixed strategy (length `m`).
    pub row_strategy: Array1<f64>,
    /// Column player's mixed strategy (length `n`).
    pub column_strategy: Array1<f64>,
    /// Support of the row strategy.
    pub row_support: Vec<usize>,
    /// Support of the column strategy.
    pub column_support: Vec<usize>,
    /// Expected payoffs (row player, column player).
    pub payoffs: (f64, f64),
}

impl Equilibrium {
    fn from_candidate(candidate: Candidate, game: &BimatrixGame) -> Self {
        let payoffs = game.payoffs(candidate.row_strategy.view(), candidate.column_strategy.view());
        Self {
            row_strategy: candidate.row_strategy,
            column_strategy: candidate.column_strategy,
            row_support: candidate.row_support,
            column_support: candidate.column_support,
            payoffs,
        }
    }
}

/// Statistics collected while enumerating supports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Support pairs examined.
    pub candidates: usize,
    /// Support pairs whose indifference system was singular.
    pub singular: usize,
    /// Candidates whose strategies did not match their claimed supports.
    pub infeasible: usize,
    /// Feasible candidates with a profitable deviation.
    pub rejected: usize,
    /// Equilibria found.
    pub equilibria: usize,
    /// Wall time spent (in seconds).
    pub elapsed_seconds: f64,
}

impl SolveStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Infeasible => self.infeasible += 1,
            Verdict::NotBestResponse => self.rejected += 1,
            Verdict::Equilibrium => self.equilibria += 1,
        }
    }
}

/// Lazy, restartable stream of equilibria in canonical support order.
///
/// Dropping the iterator early skips the remaining candidates entirely.
#[derive(Debug, Clone)]
pub struct Equilibria<'a> {
    game: &'a BimatrixGame,
    tolerance: f64,
    candidates: IndifferenceStrategies<'a>,
    infeasible: usize,
    rejected: usize,
    found: usize,
}

impl<'a> Equilibria<'a> {
    fn new(game: &'a BimatrixGame, config: &SupportEnumConfig) -> Self {
        Self {
            game,
            tolerance: config.tolerance,
            candidates: IndifferenceStrategies::new(game, config),
            infeasible: 0,
            rejected: 0,
            found: 0,
        }
    }

    /// Counters for the candidates consumed so far (elapsed time is left at zero).
    pub fn stats(&self) -> SolveStats {
        SolveStats {
            candidates: self.candidates.examined(),
            singular: self.candidates.singular(),
            infeasible: self.infeasible,
            rejected: self.rejected,
            equilibria: self.found,
            elapsed_seconds: 0.0,
        }
    }
}

impl Iterator for Equilibria<'_> {
    type Item = Equilibrium;

    fn next(&mut self) -> Option<Self::Item> {
        for candidate in self.candidates.by_ref() {
            match verify_candidate(&candidate, self.game, self.tolerance) {
                Verdict::Equilibrium => {
                    self.found += 1;
                    return Some(Equilibrium::from_candidate(candidate, self.game));
                }
                Verdict::Infeasible => {
                    self.infeasible += 1;
                    debug!(
                        "support {:?} x {:?} is infeasible",
                        candidate.row_support, candidate.column_support
                    );
                }
                Verdict::NotBestResponse => {
                    self.rejected += 1;
                    debug!(
                        "support {:?} x {:?} admits a profitable deviation",
                        candidate.row_support, candidate.column_support
                    );
                }
            }
        }
        None
    }
}

/// Lazily enumerate the equilibria of `game` found by support enumeration.
///
/// The sequence may be empty and is a pure function of its inputs.
///
/// # Example
/// ```
/// use bimatrix_solver::support::{support_enumeration, BimatrixGame, SupportEnumConfig};
/// use ndarray::array;
///
/// let game = BimatrixGame::zero_sum(array![[1.0, -1.0], [-1.0, 1.0]]).unwrap();
/// let config = SupportEnumConfig::default();
/// let eqs: Vec<_> = support_enumeration(&game, &config).collect();
/// assert_eq!(eqs.len(), 1);
/// assert_eq!(eqs[0].row_support, vec![0, 1]);
/// ```
pub fn support_enumeration<'a>(game: &'a BimatrixGame, config: &SupportEnumConfig) -> Equilibria<'a> {
    Equilibria::new(game, config)
}

/// Per-candidate result used by the parallel driver.
enum Outcome {
    Singular,
    Checked(Verdict, Candidate),
}

fn evaluate(game: &BimatrixGame, pair: &SupportPair, config: &SupportEnumConfig) -> Outcome {
    let (rows, columns) = pair;
    match candidate_for(game, rows, columns, config.singular_tolerance) {
        Some(candidate) => Outcome::Checked(verify_candidate(&candidate, game, config.tolerance), candidate),
        None => Outcome::Singular,
    }
}

/// Support enumeration solver for a single game.
///
/// # Example
/// ```
/// use bimatrix_solver::support::{BimatrixGame, SupportEnumConfig, SupportEnumSolver};
/// use ndarray::array;
///
/// let game = BimatrixGame::new(
///     array![[1.0, 0.0], [-2.0, 3.0]],
///     array![[3.0, 2.0], [-1.0, 0.0]],
/// ).unwrap();
/// let solver = SupportEnumSolver::new(game, SupportEnumConfig::default()).unwrap();
/// let (equilibria, stats) = solver.solve();
/// assert_eq!(equilibria.len(), 3);
/// assert_eq!(stats.candidates, 5);
/// ```
#[derive(Debug, Clone)]
pub struct SupportEnumSolver {
    game: BimatrixGame,
    config: SupportEnumConfig,
}

impl SupportEnumSolver {
    /// Create a solver, validating the configuration.
    pub fn new(game: BimatrixGame, config: SupportEnumConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { game, config })
    }

    /// The game being solved.
    pub fn game(&self) -> &BimatrixGame {
        &self.game
    }

    /// The solver configuration.
    pub fn config(&self) -> &SupportEnumConfig {
        &self.config
    }

    /// Number of support pairs the solver will examine.
    pub fn num_candidates(&self) -> u64 {
        let (m, n) = self.game.shape();
        support_count(m, n)
    }

    /// Lazy stream of equilibria.
    pub fn equilibria(&self) -> Equilibria<'_> {
        support_enumeration(&self.game, &self.config)
    }

    /// Enumerate all equilibria sequentially.
    pub fn solve(&self) -> (Vec<Equilibrium>, SolveStats) {
        self.solve_with_callback(u64::MAX, |_| {})
    }

    /// Enumerate all equilibria, calling `callback` every `callback_interval` candidates.
    pub fn solve_with_callback<F>(
        &self,
        callback_interval: u64,
        mut callback: F,
    ) -> (Vec<Equilibrium>, SolveStats)
    where
        F: FnMut(&SolveStats),
    {
        let start_time = Instant::now();
        let interval = callback_interval.max(1) as usize;
        let mut stream = self.equilibria();
        let mut equilibria = Vec::new();
        let mut last_reported = 0;

        // Candidates are only counted as the stream advances, so report after each pull.
        loop {
            let next = stream.next();
            let mut stats = stream.stats();
            if stats.candidates - last_reported >= interval {
                last_reported = stats.candidates;
                stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
                callback(&stats);
            }
            match next {
                Some(eq) => equilibria.push(eq),
                None => break,
            }
        }

        let mut stats = stream.stats();
        stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "support enumeration: {} equilibria from {} candidates in {:.3}s",
            stats.equilibria, stats.candidates, stats.elapsed_seconds
        );
        (equilibria, stats)
    }

    /// Enumerate all equilibria on a rayon pool.
    ///
    /// Results come back in the same order as [`solve`](Self::solve).
    pub fn solve_parallel(&self) -> (Vec<Equilibrium>, SolveStats) {
        let start_time = Instant::now();
        let (m, n) = self.game.shape();
        let pairs: Vec<SupportPair> = potential_support_pairs(m, n).collect();

        let run = || -> Vec<Outcome> {
            pairs
                .par_iter()
                .map(|pair| evaluate(&self.game, pair, &self.config))
                .collect()
        };
        let outcomes = match self.config.num_threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(run),
                Err(e) => {
                    debug!("falling back to the global rayon pool: {}", e);
                    run()
                }
            },
            None => run(),
        };

        let mut stats = SolveStats::new();
        let mut equilibria = Vec::new();
        for outcome in outcomes {
            stats.candidates += 1;
            match outcome {
                Outcome::Singular => stats.singular += 1,
                Outcome::Checked(verdict, candidate) => {
                    stats.record(verdict);
                    if verdict == Verdict::Equilibrium {
                        equilibria.push(Equilibrium::from_candidate(candidate, &self.game));
                    }
                }
            }
        }

        stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "parallel support enumeration: {} equilibria from {} candidates in {:.3}s",
            stats.equilibria, stats.candidates, stats.elapsed_seconds
        );
        (equilibria, stats)
    }
}
