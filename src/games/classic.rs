//! Classic two-player games with well-known equilibria.
//!
//! These serve as validation cases for the solver: each function returns the
//! game together with a short name used by the CLI.

use ndarray::array;

use crate::support::{BimatrixGame, GameError};

/// Names accepted by [`by_name`].
pub const CLASSIC_GAMES: [&str; 5] = [
    "matching-pennies",
    "rock-paper-scissors",
    "battle-of-the-sexes",
    "prisoners-dilemma",
    "coordination",
];

/// Matching pennies. Unique equilibrium: both players mix 1/2, 1/2.
pub fn matching_pennies() -> Result<BimatrixGame, GameError> {
    BimatrixGame::zero_sum(array![[1.0, -1.0], [-1.0, 1.0]])
}

/// Rock-paper-scissors. Unique equilibrium: both players mix uniformly.
pub fn rock_paper_scissors() -> Result<BimatrixGame, GameError> {
    BimatrixGame::zero_sum(array![[0.0, -1.0, 1.0], [1.0, 0.0, -1.0], [-1.0, 1.0, 0.0]])
}

/// Battle of the sexes. Two pure equilibria and one mixed (1/3, 2/3).
pub fn battle_of_the_sexes() -> Result<BimatrixGame, GameError> {
    BimatrixGame::new(array![[2.0, 1.0], [0.0, 2.0]], array![[2.0, 0.0], [1.0, 2.0]])
}

/// Prisoner's dilemma (cooperate, defect). Unique equilibrium: both defect.
pub fn prisoners_dilemma() -> Result<BimatrixGame, GameError> {
    BimatrixGame::new(array![[3.0, 0.0], [5.0, 1.0]], array![[3.0, 5.0], [0.0, 1.0]])
}

/// Coordination game with two pure equilibria and one at (1/2, 1/2).
pub fn coordination() -> Result<BimatrixGame, GameError> {
    BimatrixGame::new(array![[1.0, 0.0], [-2.0, 3.0]], array![[3.0, 2.0], [-1.0, 0.0]])
}

/// Look up a classic game by its CLI name.
pub fn by_name(name: &str) -> Option<Result<BimatrixGame, GameError>> {
    let game = match name {
        "matching-pennies" => matching_pennies(),
        "rock-paper-scissors" => rock_paper_scissors(),
        "battle-of-the-sexes" => battle_of_the_sexes(),
        "prisoners-dilemma" => prisoners_dilemma(),
        "coordination" => coordination(),
        _ => return None,
    };
    Some(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::{support_enumeration, Equilibrium, SupportEnumConfig};

    fn solve(game: &BimatrixGame) -> Vec<Equilibrium> {
        support_enumeration(game, &SupportEnumConfig::default()).collect()
    }

    fn assert_close(actual: &ndarray::Array1<f64>, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_all_names_resolve() {
        for name in CLASSIC_GAMES {
            assert!(by_name(name).unwrap().is_ok(), "{}", name);
        }
        assert!(by_name("chess").is_none());
    }

    #[test]
    fn test_matching_pennies() {
        let eqs = solve(&matching_pennies().unwrap());
        assert_eq!(eqs.len(), 1);
        assert_close(&eqs[0].row_strategy, &[0.5, 0.5]);
        assert_close(&eqs[0].column_strategy, &[0.5, 0.5]);
    }

    #[test]
    fn test_rock_paper_scissors() {
        let eqs = solve(&rock_paper_scissors().unwrap());
        assert_eq!(eqs.len(), 1);
        let third = 1.0 / 3.0;
        assert_close(&eqs[0].row_strategy, &[third; 3]);
        assert_close(&eqs[0].column_strategy, &[third; 3]);
    }

    #[test]
    fn test_battle_of_the_sexes() {
        let eqs = solve(&battle_of_the_sexes().unwrap());
        assert_eq!(eqs.len(), 3);
        assert_close(&eqs[0].row_strategy, &[1.0, 0.0]);
        assert_close(&eqs[1].row_strategy, &[0.0, 1.0]);
        assert_close(&eqs[2].row_strategy, &[1.0 / 3.0, 2.0 / 3.0]);
        assert_close(&eqs[2].column_strategy, &[1.0 / 3.0, 2.0 / 3.0]);
    }

    #[test]
    fn test_prisoners_dilemma() {
        let eqs = solve(&prisoners_dilemma().unwrap());
        assert_eq!(eqs.len(), 1);
        assert_close(&eqs[0].row_strategy, &[0.0, 1.0]);
        assert_close(&eqs[0].column_strategy, &[0.0, 1.0]);
    }
}
