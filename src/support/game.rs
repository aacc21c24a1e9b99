//! Bimatrix game definition for the support enumeration solver.
//!
//! A bimatrix game is a pair of payoff matrices of equal shape: `A` holds the
//! row player's payoffs and `B` the column player's. Rows index the row
//! player's pure strategies, columns the column player's.

use std::fs;
use std::path::Path;

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// A validated two-player game in strategic form.
///
/// Construction checks shapes and values up front, so everything downstream
/// can assume `m, n >= 1`, equal shapes and finite payoffs.
#[derive(Debug, Clone, PartialEq)]
pub struct BimatrixGame {
    a: Array2<f64>,
    b: Array2<f64>,
}

/// Plain JSON form of a game: `{ "a": [[..], ..], "b": [[..], ..] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSpec {
    /// Row player's payoffs, one inner vector per row.
    pub a: Vec<Vec<f64>>,
    /// Column player's payoffs, one inner vector per row.
    pub b: Vec<Vec<f64>>,
}

impl BimatrixGame {
    /// Create a game from the two payoff matrices.
    ///
    /// # Errors
    /// Returns a `GameError` if either matrix is empty, the shapes differ, or
    /// any payoff is NaN or infinite.
    pub fn new(a: Array2<f64>, b: Array2<f64>) -> Result<Self, GameError> {
        if a.is_empty() || b.is_empty() {
            return Err(GameError::Empty);
        }
        if a.dim() != b.dim() {
            return Err(GameError::ShapeMismatch {
                a: a.dim(),
                b: b.dim(),
            });
        }
        for (player, matrix) in [(0, &a), (1, &b)] {
            if let Some(((row, col), _)) = matrix.indexed_iter().find(|(_, v)| !v.is_finite()) {
                return Err(GameError::NonFinite { player, row, col });
            }
        }

        Ok(Self { a, b })
    }

    /// Create a zero-sum game where the column player's payoffs are `-A`.
    pub fn zero_sum(a: Array2<f64>) -> Result<Self, GameError> {
        let b = a.mapv(|v| -v);
        Self::new(a, b)
    }

    /// Create a game from nested row vectors.
    pub fn from_rows(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Self, GameError> {
        Self::new(rows_to_matrix(a)?, rows_to_matrix(b)?)
    }

    /// Parse a game from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let spec: GameSpec =
            serde_json::from_str(json).map_err(|e| GameError::ParseError(e.to_string()))?;
        Self::from_rows(&spec.a, &spec.b)
    }

    /// Load a game from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| GameError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Number of pure strategies for (row player, column player).
    pub fn shape(&self) -> (usize, usize) {
        self.a.dim()
    }

    /// Row player's payoff matrix `A`.
    pub fn row_payoffs(&self) -> ArrayView2<'_, f64> {
        self.a.view()
    }

    /// Column player's payoff matrix `B`.
    pub fn column_payoffs(&self) -> ArrayView2<'_, f64> {
        self.b.view()
    }

    /// Expected payoffs `(σr·A·σc, σr·B·σc)` of a mixed strategy profile.
    ///
    /// # Panics
    /// Panics if the strategy lengths do not match the game shape.
    pub fn payoffs(&self, sigma_r: ArrayView1<f64>, sigma_c: ArrayView1<f64>) -> (f64, f64) {
        let row = sigma_r.dot(&self.a.dot(&sigma_c));
        let col = sigma_r.dot(&self.b.dot(&sigma_c));
        (row, col)
    }

    /// Export as the plain JSON form.
    pub fn to_spec(&self) -> GameSpec {
        GameSpec {
            a: matrix_to_rows(&self.a),
            b: matrix_to_rows(&self.b),
        }
    }
}

fn rows_to_matrix(rows: &[Vec<f64>]) -> Result<Array2<f64>, GameError> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    if let Some(bad) = rows.iter().position(|r| r.len() != n_cols) {
        return Err(GameError::RaggedRows {
            row: bad,
            expected: n_cols,
            found: rows[bad].len(),
        });
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|e| GameError::ParseError(e.to_string()))
}

fn matrix_to_rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|r| r.to_vec()).collect()
}

/// Errors raised while building or loading a game.
///
/// These are precondition failures; they are reported before any support
/// pair is examined.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// A payoff matrix has no rows or no columns.
    Empty,
    /// The two payoff matrices differ in shape.
    ShapeMismatch {
        /// Shape of `A`.
        a: (usize, usize),
        /// Shape of `B`.
        b: (usize, usize),
    },
    /// A payoff is NaN or infinite.
    NonFinite {
        /// 0 for `A`, 1 for `B`.
        player: usize,
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },
    /// Nested rows have inconsistent lengths.
    RaggedRows {
        /// Index of the first bad row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the bad row.
        found: usize,
    },
    /// Failed to read the game file.
    IoError(String),
    /// Failed to parse the game description.
    ParseError(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Empty => write!(f, "Payoff matrices must have at least one row and column"),
            GameError::ShapeMismatch { a, b } => write!(
                f,
                "Payoff matrix shapes differ: A is {}x{}, B is {}x{}",
                a.0, a.1, b.0, b.1
            ),
            GameError::NonFinite { player, row, col } => write!(
                f,
                "Payoff for player {} at ({}, {}) is not finite",
                player + 1,
                row,
                col
            ),
            GameError::RaggedRows { row, expected, found } => write!(
                f,
                "Row {} has {} entries, expected {}",
                row, found, expected
            ),
            GameError::IoError(e) => write!(f, "IO error: {}", e),
            GameError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_valid_game() {
        let game = BimatrixGame::new(array![[1.0, 0.0], [-2.0, 3.0]], array![[3.0, 2.0], [-1.0, 0.0]])
            .unwrap();
        assert_eq!(game.shape(), (2, 2));
        assert_eq!(game.row_payoffs()[[1, 1]], 3.0);
        assert_eq!(game.column_payoffs()[[1, 0]], -1.0);
    }

    #[test]
    fn test_rejects_malformed_input() {
        let empty = Array2::<f64>::zeros((0, 2));
        assert_eq!(BimatrixGame::new(empty.clone(), empty), Err(GameError::Empty));

        let err = BimatrixGame::new(Array2::zeros((2, 3)), Array2::zeros((3, 2))).unwrap_err();
        assert_eq!(err, GameError::ShapeMismatch { a: (2, 3), b: (3, 2) });

        let err = BimatrixGame::new(array![[1.0, 2.0]], array![[0.0, f64::NAN]]).unwrap_err();
        assert_eq!(err, GameError::NonFinite { player: 1, row: 0, col: 1 });

        let err = BimatrixGame::from_rows(&[vec![1.0, 2.0], vec![3.0]], &[vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, GameError::RaggedRows { row: 1, expected: 2, found: 1 }));
    }

    #[test]
    fn test_zero_sum() {
        let game = BimatrixGame::zero_sum(array![[1.0, -1.0], [-1.0, 1.0]]).unwrap();
        assert_eq!(game.column_payoffs(), array![[-1.0, 1.0], [1.0, -1.0]]);
    }

    #[test]
    fn test_payoffs() {
        let game = BimatrixGame::zero_sum(array![[1.0, -1.0], [-1.0, 1.0]]).unwrap();
        let half = array![0.5, 0.5];
        assert_eq!(game.payoffs(half.view(), half.view()), (0.0, 0.0));

        let pure = array![1.0, 0.0];
        assert_eq!(game.payoffs(pure.view(), pure.view()), (1.0, -1.0));
    }

    #[test]
    fn test_json_roundtrip() {
        let json = r#"{"a": [[2, 1], [0, 2]], "b": [[2, 0], [1, 2]]}"#;
        let game = BimatrixGame::from_json_str(json).unwrap();
        assert_eq!(game.shape(), (2, 2));

        let back = serde_json::to_string(&game.to_spec()).unwrap();
        assert_eq!(BimatrixGame::from_json_str(&back).unwrap(), game);

        assert!(matches!(
            BimatrixGame::from_json_str("{\"a\": 1}"),
            Err(GameError::ParseError(_))
        ));
    }
}
