//! Dense linear solve used by the indifference solver.
//!
//! Gaussian elimination with partial pivoting. Systems here are at most
//! `min(m, n)` square, so a direct solve is all that is needed.

use ndarray::{Array1, Array2};

/// Solve `M x = b` for square `M`.
///
/// Returns `None` when `M` is not square, the sizes disagree, or a pivot falls
/// below `singular_tolerance` times the largest absolute entry of `M`.
pub fn solve_linear_system(
    matrix: &Array2<f64>,
    rhs: &Array1<f64>,
    singular_tolerance: f64,
) -> Option<Array1<f64>> {
    let (rows, cols) = matrix.dim();
    if rows != cols || rows != rhs.len() {
        return None;
    }
    let n = rows;

    let scale = matrix.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if n == 0 || scale == 0.0 {
        return None;
    }
    let threshold = singular_tolerance * scale;

    let mut a = matrix.clone();
    let mut b = rhs.clone();

    for col in 0..n {
        // Partial pivoting: largest magnitude at or below the diagonal.
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot_row, col]].abs() <= threshold {
            return None;
        }
        if pivot_row != col {
            for k in 0..n {
                a.swap([col, k], [pivot_row, k]);
            }
            b.swap(col, pivot_row);
        }

        let pivot = a[[col, col]];
        for row in col + 1..n {
            let factor = a[[row, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * x[k]).sum();
        x[row] = (b[row] - tail) / a[[row, row]];
    }

    x.iter().all(|v| v.is_finite()).then_some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_solve_identity() {
        let m = array![[1.0, 0.0], [0.0, 1.0]];
        let b = array![3.0, -2.0];
        assert_eq!(solve_linear_system(&m, &b, 1e-12), Some(array![3.0, -2.0]));
    }

    #[test]
    fn test_solve_requires_pivoting() {
        let m = array![[0.0, 1.0, 1.0], [2.0, 1.0, 0.0], [1.0, 1.0, 1.0]];
        let b = array![2.0, 3.0, 3.0];
        let x = solve_linear_system(&m, &b, 1e-12).unwrap();
        let residual = m.dot(&x) - &b;
        assert!(residual.iter().all(|r| r.abs() < 1e-12));
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 1.0).abs() < 1e-12);
        assert!((x[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_singular_systems() {
        let m = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![1.0, 2.0];
        assert_eq!(solve_linear_system(&m, &b, 1e-12), None);

        let zero = Array2::<f64>::zeros((2, 2));
        assert_eq!(solve_linear_system(&zero, &b, 1e-12), None);
    }

    #[test]
    fn test_shape_mismatch() {
        let m = array![[1.0, 2.0, 3.0], [2.0, 4.0, 1.0]];
        assert_eq!(solve_linear_system(&m, &array![1.0, 2.0], 1e-12), None);
        let m = array![[1.0, 0.0], [0.0, 1.0]];
        assert_eq!(solve_linear_system(&m, &array![1.0, 2.0, 3.0], 1e-12), None);
    }
}
