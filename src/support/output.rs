//! JSON output for solved games.

use std::fs::File;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::support::config::SupportEnumConfig;
use crate::support::game::{BimatrixGame, GameSpec};
use crate::support::solver::{Equilibrium, SolveStats};

/// One equilibrium in plain JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquilibriumRecord {
    /// Row player's mixed strategy.
    pub row_strategy: Vec<f64>,
    /// Column player's mixed strategy.
    pub column_strategy: Vec<f64>,
    /// Support of the row strategy.
    pub row_support: Vec<usize>,
    /// Support of the column strategy.
    pub column_support: Vec<usize>,
    /// Expected payoffs (row player, column player).
    pub payoffs: (f64, f64),
}

impl EquilibriumRecord {
    /// Build a record for an equilibrium.
    pub fn new(eq: &Equilibrium) -> Self {
        Self {
            row_strategy: eq.row_strategy.to_vec(),
            column_strategy: eq.column_strategy.to_vec(),
            row_support: eq.row_support.clone(),
            column_support: eq.column_support.clone(),
            payoffs: eq.payoffs,
        }
    }
}

/// Complete solver output: the game, the settings, the equilibria and stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionOutput {
    /// Display name of the game.
    pub name: String,
    /// Payoff matrices.
    pub game: GameSpec,
    /// Settings used for the solve.
    pub config: SupportEnumConfig,
    /// Enumeration statistics.
    pub stats: SolveStats,
    /// Equilibria in canonical support order.
    pub equilibria: Vec<EquilibriumRecord>,
}

impl SolutionOutput {
    /// Assemble the output for a solved game.
    pub fn new(
        name: &str,
        game: &BimatrixGame,
        config: &SupportEnumConfig,
        equilibria: &[Equilibrium],
        stats: SolveStats,
    ) -> Self {
        Self {
            name: name.to_string(),
            game: game.to_spec(),
            config: *config,
            stats,
            equilibria: equilibria
                .iter()
                .map(EquilibriumRecord::new)
                .collect(),
        }
    }

    /// Write the output as pretty-printed JSON.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n========================================");
        println!("  {} - {} equilibria", self.name, self.equilibria.len());
        println!(
            "  Candidates: {} | Singular: {} | Infeasible: {} | Rejected: {}",
            self.stats.candidates, self.stats.singular, self.stats.infeasible, self.stats.rejected
        );
        println!("========================================\n");

        for (i, eq) in self.equilibria.iter().enumerate() {
            println!("Equilibrium {}:", i + 1);
            println!("  Row:    {}", format_strategy(&eq.row_strategy));
            println!("  Column: {}", format_strategy(&eq.column_strategy));
            println!("  Payoffs: ({:.4}, {:.4})", eq.payoffs.0, eq.payoffs.1);
        }
    }
}

fn format_strategy(strategy: &[f64]) -> String {
    let parts: Vec<String> = strategy.iter().map(|p| format!("{:.4}", p)).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::solver::SupportEnumSolver;
    use ndarray::array;

    #[test]
    fn test_output_json() {
        let game = BimatrixGame::zero_sum(array![[1.0, -1.0], [-1.0, 1.0]]).unwrap();
        let config = SupportEnumConfig::default();
        let solver = SupportEnumSolver::new(game.clone(), config).unwrap();
        let (eqs, stats) = solver.solve();

        let output = SolutionOutput::new("Matching Pennies", &game, &config, &eqs, stats);
        assert_eq!(output.equilibria.len(), 1);
        assert_eq!(output.equilibria[0].row_support, vec![0, 1]);
        assert!(output.equilibria[0].payoffs.0.abs() < 1e-9);

        let json = serde_json::to_string(&output).unwrap();
        let parsed: SolutionOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "Matching Pennies");
        assert_eq!(parsed.stats.candidates, 5);
        assert_eq!(parsed.game.a, vec![vec![1.0, -1.0], vec![-1.0, 1.0]]);
    }

    #[test]
    fn test_format_strategy() {
        assert_eq!(format_strategy(&[0.5, 0.25]), "[0.5000, 0.2500]");
    }
}
