//! Indifference strategies for candidate supports.
//!
//! For a fixed support pair, each player's mixed strategy is the one that makes
//! the *opponent* indifferent among the opponent's support strategies. The
//! row player's strategy is solved against `Bᵀ`, the column player's against `A`.

use log::debug;
use ndarray::{Array1, Array2, ArrayView2};

use crate::support::config::SupportEnumConfig;
use crate::support::game::BimatrixGame;
use crate::support::linalg::solve_linear_system;
use crate::support::pairs::{potential_support_pairs, SupportPairs};

/// Result of an indifference solve.
///
/// `NoSolution` is distinct from a legitimately all-zero vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Indifference {
    /// A vector over the matrix columns, zero outside the active columns, summing to 1.
    Solved(Array1<f64>),
    /// The system for this support had no unique solution.
    NoSolution,
}

impl Indifference {
    /// Whether the solve succeeded.
    pub fn is_solved(&self) -> bool {
        matches!(self, Indifference::Solved(_))
    }

    /// Borrow the solved vector, if any.
    pub fn as_solved(&self) -> Option<&Array1<f64>> {
        match self {
            Indifference::Solved(v) => Some(v),
            Indifference::NoSolution => None,
        }
    }

    /// Convert into an `Option`.
    pub fn into_option(self) -> Option<Array1<f64>> {
        match self {
            Indifference::Solved(v) => Some(v),
            Indifference::NoSolution => None,
        }
    }
}

/// Solve for a probability vector over the columns of `matrix` that equalizes the
/// expected payoff of every active row.
///
/// `matrix` holds the payoffs of the player being made indifferent, with that
/// player's strategies on the rows. The unknowns are the probabilities on
/// `columns`. The system has one equation per consecutive pair of `rows` (their
/// payoffs are equal) plus the normalization `sum = 1`. Entries outside
/// `columns` are exactly zero.
///
/// Each payoff-difference equation is divided by its largest entry before the
/// solve, so singularity is judged independently of the payoff scale.
///
/// Returns `NoSolution` if the sizes of `rows` and `columns` differ, either is
/// empty, an index is out of range, or the system is singular.
///
/// # Example
/// ```
/// use bimatrix_solver::support::{solve_indifference, Indifference};
/// use ndarray::array;
///
/// let m = array![[0.0, 1.0, -1.0], [1.0, 0.0, 1.0], [-1.0, 1.0, 0.0]];
/// let x = solve_indifference(m.view(), &[0, 1], &[0, 1], 1e-12);
/// assert_eq!(x, Indifference::Solved(array![0.5, 0.5, 0.0]));
/// ```
pub fn solve_indifference(
    matrix: ArrayView2<f64>,
    rows: &[usize],
    columns: &[usize],
    singular_tolerance: f64,
) -> Indifference {
    let (n_rows, n_cols) = matrix.dim();
    let k = columns.len();
    if k == 0 || rows.len() != k {
        return Indifference::NoSolution;
    }
    if rows.iter().any(|&r| r >= n_rows) || columns.iter().any(|&c| c >= n_cols) {
        return Indifference::NoSolution;
    }

    let mut system = Array2::<f64>::zeros((k, k));
    let mut rhs = Array1::<f64>::zeros(k);
    for (eq, pair) in rows.windows(2).enumerate() {
        for (j, &c) in columns.iter().enumerate() {
            system[[eq, j]] = matrix[[pair[0], c]] - matrix[[pair[1], c]];
        }
        let scale = system.row(eq).iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        if scale > 0.0 {
            system.row_mut(eq).mapv_inplace(|v| v / scale);
        }
    }
    system.row_mut(k - 1).fill(1.0);
    rhs[k - 1] = 1.0;

    match solve_linear_system(&system, &rhs, singular_tolerance) {
        Some(solution) => {
            let mut full = Array1::<f64>::zeros(n_cols);
            for (&c, &p) in columns.iter().zip(solution.iter()) {
                full[c] = p;
            }
            Indifference::Solved(full)
        }
        None => Indifference::NoSolution,
    }
}

/// A candidate strategy pair together with the support pair it was solved for.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Row player's strategy (length `m`).
    pub row_strategy: Array1<f64>,
    /// Column player's strategy (length `n`).
    pub column_strategy: Array1<f64>,
    /// Claimed support of the row strategy.
    pub row_support: Vec<usize>,
    /// Claimed support of the column strategy.
    pub column_support: Vec<usize>,
}

/// Solve both indifference systems for one support pair.
///
/// Returns `None` if either solve fails; no partial result is produced.
pub fn candidate_for(
    game: &BimatrixGame,
    rows: &[usize],
    columns: &[usize],
    singular_tolerance: f64,
) -> Option<Candidate> {
    let row_strategy = solve_indifference(
        game.column_payoffs().reversed_axes(),
        columns,
        rows,
        singular_tolerance,
    )
    .into_option()?;
    let column_strategy =
        solve_indifference(game.row_payoffs(), rows, columns, singular_tolerance).into_option()?;

    Some(Candidate {
        row_strategy,
        column_strategy,
        row_support: rows.to_vec(),
        column_support: columns.to_vec(),
    })
}

/// Lazy iterator over indifference candidates, one per solvable support pair.
#[derive(Debug, Clone)]
pub struct IndifferenceStrategies<'a> {
    game: &'a BimatrixGame,
    singular_tolerance: f64,
    pairs: SupportPairs,
    examined: usize,
    singular: usize,
}

impl<'a> IndifferenceStrategies<'a> {
    /// Create the iterator for `game`.
    pub fn new(game: &'a BimatrixGame, config: &SupportEnumConfig) -> Self {
        let (m, n) = game.shape();
        Self {
            game,
            singular_tolerance: config.singular_tolerance,
            pairs: potential_support_pairs(m, n),
            examined: 0,
            singular: 0,
        }
    }

    /// Support pairs consumed so far.
    pub fn examined(&self) -> usize {
        self.examined
    }

    /// Support pairs skipped because an indifference system was singular.
    pub fn singular(&self) -> usize {
        self.singular
    }
}

impl Iterator for IndifferenceStrategies<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        for (rows, columns) in self.pairs.by_ref() {
            self.examined += 1;
            match candidate_for(self.game, &rows, &columns, self.singular_tolerance) {
                Some(candidate) => return Some(candidate),
                None => {
                    self.singular += 1;
                    debug!("singular indifference system for support {:?} x {:?}", rows, columns);
                }
            }
        }
        None
    }
}

/// Enumerate indifference candidates for every support pair of `game`.
pub fn indifference_strategies<'a>(
    game: &'a BimatrixGame,
    config: &SupportEnumConfig,
) -> IndifferenceStrategies<'a> {
    IndifferenceStrategies::new(game, config)
}
