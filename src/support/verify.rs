//! Feasibility and equilibrium checks for candidate strategy pairs.
//!
//! A candidate is accepted only if each strategy is a distribution supported
//! exactly on its claimed support, and no player gains more than the tolerance
//! by deviating to a pure strategy outside that support.

use ndarray::{ArrayView1, ArrayView2};

use crate::support::game::BimatrixGame;
use crate::support::indifference::{Candidate, Indifference};

/// Check a solver result against its claimed support.
///
/// `NoSolution` never obeys a support.
pub fn obey_support(strategy: &Indifference, support: &[usize], tolerance: f64) -> bool {
    match strategy {
        Indifference::Solved(v) => support_matches(v.view(), support, tolerance),
        Indifference::NoSolution => false,
    }
}

/// Whether the positive entries of `strategy` are exactly `support`.
///
/// Entries on the support must exceed `tolerance`; entries off the support must
/// lie within `[-tolerance, tolerance]`. Out-of-range support indices fail.
///
/// # Example
/// ```
/// use bimatrix_solver::support::support_matches;
/// use ndarray::array;
///
/// assert!(support_matches(array![0.0, 0.5].view(), &[1], 1e-10));
/// assert!(!support_matches(array![0.0, 0.5].view(), &[0], 1e-10));
/// ```
pub fn support_matches(strategy: ArrayView1<f64>, support: &[usize], tolerance: f64) -> bool {
    let mut in_support = vec![false; strategy.len()];
    for &i in support {
        match in_support.get_mut(i) {
            Some(flag) => *flag = true,
            None => return false,
        }
    }

    strategy
        .iter()
        .zip(in_support)
        .all(|(&p, inside)| if inside { p > tolerance } else { p.abs() <= tolerance })
}

/// Whether no pure strategy outside `support` beats the best pure strategy inside it.
///
/// `payoffs[i]` is the expected payoff of pure strategy `i` against the opponent's
/// mix. Only an improvement strictly greater than `tolerance` counts as a deviation.
fn no_profitable_deviation(payoffs: ArrayView1<f64>, support: &[usize], tolerance: f64) -> bool {
    let support_value = support
        .iter()
        .map(|&i| payoffs[i])
        .fold(f64::NEG_INFINITY, f64::max);

    payoffs
        .iter()
        .enumerate()
        .filter(|(i, _)| !support.contains(i))
        .all(|(_, &p)| p <= support_value + tolerance)
}

/// Check whether a strategy pair is a Nash equilibrium for `(A, B)`.
///
/// Both strategies must obey their supports, and for each player no pure strategy
/// outside the support may improve on the support payoff by more than `tolerance`.
/// The tolerance is absolute and is not rescaled by the payoff magnitudes.
/// Mismatched dimensions are reported as `false`.
pub fn is_ne(
    strategy_pair: (ArrayView1<f64>, ArrayView1<f64>),
    support_pair: (&[usize], &[usize]),
    payoff_matrices: (ArrayView2<f64>, ArrayView2<f64>),
    tolerance: f64,
) -> bool {
    let (sigma_r, sigma_c) = strategy_pair;
    let (rows, columns) = support_pair;
    let (a, b) = payoff_matrices;

    let (m, n) = a.dim();
    if b.dim() != (m, n) || sigma_r.len() != m || sigma_c.len() != n {
        return false;
    }

    if !support_matches(sigma_r, rows, tolerance) || !support_matches(sigma_c, columns, tolerance) {
        return false;
    }

    let row_payoffs = a.dot(&sigma_c);
    let column_payoffs = b.t().dot(&sigma_r);

    no_profitable_deviation(row_payoffs.view(), rows, tolerance)
        && no_profitable_deviation(column_payoffs.view(), columns, tolerance)
}

/// Outcome of checking one indifference candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A strategy does not match its claimed support.
    Infeasible,
    /// Some player has a profitable deviation outside the support.
    NotBestResponse,
    /// The candidate is a Nash equilibrium.
    Equilibrium,
}

/// Classify a candidate produced for `game`.
pub fn verify_candidate(candidate: &Candidate, game: &BimatrixGame, tolerance: f64) -> Verdict {
    let feasible = support_matches(candidate.row_strategy.view(), &candidate.row_support, tolerance)
        && support_matches(
            candidate.column_strategy.view(),
            &candidate.column_support,
            tolerance,
        );
    if !feasible {
        return Verdict::Infeasible;
    }

    let equilibrium = is_ne(
        (candidate.row_strategy.view(), candidate.column_strategy.view()),
        (candidate.row_support.as_slice(), candidate.column_support.as_slice()),
        (game.row_payoffs(), game.column_payoffs()),
        tolerance,
    );
    if equilibrium {
        Verdict::Equilibrium
    } else {
        Verdict::NotBestResponse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    const TOL: f64 = 1e-10;

    fn battle() -> (Array2<f64>, Array2<f64>) {
        (array![[2.0, 1.0], [0.0, 2.0]], array![[2.0, 0.0], [1.0, 2.0]])
    }

    fn check(
        a: &Array2<f64>,
        b: &Array2<f64>,
        sigma_r: &[f64],
        sigma_c: &[f64],
        rows: &[usize],
        columns: &[usize],
    ) -> bool {
        let sigma_r = ndarray::Array1::from_vec(sigma_r.to_vec());
        let sigma_c = ndarray::Array1::from_vec(sigma_c.to_vec());
        is_ne(
            (sigma_r.view(), sigma_c.view()),
            (rows, columns),
            (a.view(), b.view()),
            TOL,
        )
    }

    #[test]
    fn test_obey_support() {
        assert!(!obey_support(&Indifference::NoSolution, &[0, 1], TOL));
        assert!(!obey_support(&Indifference::Solved(array![1.0, 0.0]), &[0, 1], TOL));
        assert!(!obey_support(&Indifference::Solved(array![0.0, 0.5]), &[0], TOL));
        assert!(!obey_support(&Indifference::Solved(array![0.5, 0.0]), &[1], TOL));

        assert!(obey_support(&Indifference::Solved(array![1.0, 0.0]), &[0], TOL));
        assert!(obey_support(&Indifference::Solved(array![0.0, 0.5]), &[1], TOL));
        assert!(obey_support(&Indifference::Solved(array![0.5, 0.0]), &[0], TOL));
        assert!(obey_support(&Indifference::Solved(array![0.5, 0.5]), &[0, 1], TOL));
    }

    #[test]
    fn test_obey_support_tolerance() {
        // Tiny noise off the support is accepted, tiny mass on the support is not.
        assert!(support_matches(array![1.0, 1e-14].view(), &[0], TOL));
        assert!(support_matches(array![1.0, -1e-14].view(), &[0], TOL));
        assert!(!support_matches(array![1.0, 1e-14].view(), &[0, 1], TOL));
        assert!(!support_matches(array![1.2, -0.2].view(), &[0], TOL));
        assert!(!support_matches(array![1.2, -0.2].view(), &[0, 1], TOL));
        assert!(!support_matches(array![1.0, 0.0].view(), &[0, 2], TOL));
    }

    #[test]
    fn test_obey_support_all_zero_vector() {
        assert!(support_matches(array![0.0, 0.0].view(), &[], TOL));
        assert!(!obey_support(&Indifference::Solved(array![0.0, 0.0]), &[0], TOL));
    }

    #[test]
    fn test_is_ne_battle() {
        let (a, b) = battle();
        assert!(check(&a, &b, &[1.0, 0.0], &[1.0, 0.0], &[0], &[0]));
        assert!(check(&a, &b, &[1.0 / 3.0, 2.0 / 3.0], &[1.0 / 3.0, 2.0 / 3.0], &[0, 1], &[0, 1]));
        assert!(!check(&a, &b, &[0.0, 1.0], &[1.0, 0.0], &[1], &[0]));
        assert!(!check(&a, &b, &[1.0, 0.0], &[0.0, 1.0], &[0], &[1]));
    }

    #[test]
    fn test_is_ne_zero_sum() {
        let a = array![[1.0, -1.0], [-1.0, 1.0]];
        let b = a.mapv(|v| -v);
        assert!(check(&a, &b, &[0.5, 0.5], &[0.5, 0.5], &[0, 1], &[0, 1]));

        let a = array![[0.0, 1.0, -1.0], [-1.0, 0.0, 1.0], [1.0, -1.0, 0.0]];
        let b = a.mapv(|v| -v);
        let third = 1.0 / 3.0;
        assert!(check(&a, &b, &[third; 3], &[third; 3], &[0, 1, 2], &[0, 1, 2]));
        assert!(!check(&a, &b, &[1.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0], &[0]));
    }

    #[test]
    fn test_is_ne_rectangular() {
        let a = array![
            [160.0, 205.0, 44.0],
            [175.0, 180.0, 45.0],
            [201.0, 204.0, 50.0],
            [120.0, 207.0, 49.0]
        ];
        let b = array![[2.0, 2.0, 2.0], [1.0, 0.0, 0.0], [3.0, 4.0, 1.0], [4.0, 1.0, 2.0]];
        assert!(check(
            &a,
            &b,
            &[0.0, 0.0, 0.75, 0.25],
            &[1.0 / 28.0, 27.0 / 28.0, 0.0],
            &[2, 3],
            &[0, 1]
        ));
    }

    #[test]
    fn test_is_ne_rejects_wrong_support_or_shape() {
        let (a, b) = battle();
        // Correct equilibrium strategies but a claimed support that disagrees.
        assert!(!check(&a, &b, &[1.0, 0.0], &[1.0, 0.0], &[0, 1], &[0]));
        assert!(!check(&a, &b, &[1.0, 0.0, 0.0], &[1.0, 0.0], &[0], &[0]));
    }

    #[test]
    fn test_is_ne_marginal_deviation() {
        // Row 1 beats the support by less than the tolerance: still an equilibrium.
        let a = array![[1.0, 0.0], [1.0 + 1e-12, 0.0]];
        let b = array![[1.0, 0.0], [1.0, 0.0]];
        assert!(check(&a, &b, &[1.0, 0.0], &[1.0, 0.0], &[0], &[0]));

        // A deviation larger than the tolerance is rejected.
        let a = array![[1.0, 0.0], [1.0 + 1e-6, 0.0]];
        assert!(!check(&a, &b, &[1.0, 0.0], &[1.0, 0.0], &[0], &[0]));
    }

    #[test]
    fn test_verify_candidate() {
        let (a, b) = battle();
        let game = BimatrixGame::new(a, b).unwrap();
        let candidate = Candidate {
            row_strategy: array![0.0, 1.0],
            column_strategy: array![1.0, 0.0],
            row_support: vec![1],
            column_support: vec![0],
        };
        assert_eq!(verify_candidate(&candidate, &game, TOL), Verdict::NotBestResponse);

        let candidate = Candidate {
            row_strategy: array![1.5, -0.5],
            column_strategy: array![0.5, 0.5],
            row_support: vec![0, 1],
            column_support: vec![0, 1],
        };
        assert_eq!(verify_candidate(&candidate, &game, TOL), Verdict::Infeasible);

        let candidate = Candidate {
            row_strategy: array![0.0, 1.0],
            column_strategy: array![0.0, 1.0],
            row_support: vec![1],
            column_support: vec![1],
        };
        assert_eq!(verify_candidate(&candidate, &game, TOL), Verdict::Equilibrium);
    }
}
