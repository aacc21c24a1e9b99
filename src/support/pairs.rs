//! Enumeration of candidate support pairs.
//!
//! For every size `k` from 1 to `min(m, n)`, each `k`-subset of rows is paired
//! with each `k`-subset of columns. Row subsets vary slower than column subsets.

use crate::support::powerset::{binomial, Combinations};

/// A candidate support pair: (row player's support, column player's support).
pub type SupportPair = (Vec<usize>, Vec<usize>);

/// Lazy iterator over equal-size support pairs of an `m x n` game.
#[derive(Debug, Clone)]
pub struct SupportPairs {
    m: usize,
    n: usize,
    k: usize,
    rows: Combinations,
    current_rows: Option<Vec<usize>>,
    columns: Combinations,
}

impl SupportPairs {
    /// Create the enumerator for a game with `m` rows and `n` columns.
    pub fn new(m: usize, n: usize) -> Self {
        let mut pairs = Self {
            m,
            n,
            k: 1,
            rows: Combinations::new(m, 1),
            current_rows: None,
            columns: Combinations::new(n, 1),
        };
        pairs.current_rows = pairs.rows.next();
        pairs
    }

    /// Total number of pairs this enumerator yields from the start.
    pub fn total(&self) -> u64 {
        support_count(self.m, self.n)
    }
}

impl Iterator for SupportPairs {
    type Item = SupportPair;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.k > self.m.min(self.n) {
                return None;
            }

            if let Some(rows) = &self.current_rows {
                if let Some(columns) = self.columns.next() {
                    return Some((rows.clone(), columns));
                }
                self.current_rows = self.rows.next();
                self.columns = Combinations::new(self.n, self.k);
                continue;
            }

            self.k += 1;
            self.rows = Combinations::new(self.m, self.k);
            self.current_rows = self.rows.next();
            self.columns = Combinations::new(self.n, self.k);
        }
    }
}

/// Enumerate the equal-size support pairs of an `m x n` game in canonical order.
///
/// # Example
/// ```
/// use bimatrix_solver::support::potential_support_pairs;
///
/// let pairs: Vec<_> = potential_support_pairs(2, 2).collect();
/// assert_eq!(pairs.len(), 5);
/// assert_eq!(pairs[4], (vec![0, 1], vec![0, 1]));
/// ```
pub fn potential_support_pairs(m: usize, n: usize) -> SupportPairs {
    SupportPairs::new(m, n)
}

/// Number of candidate pairs: `sum over k of C(m, k) * C(n, k)`, saturating.
pub fn support_count(m: usize, n: usize) -> u64 {
    (1..=m.min(n)).fold(0u64, |acc, k| {
        acc.saturating_add(binomial(m, k).saturating_mul(binomial(n, k)))
    })
}
