//! Canonical enumeration of index subsets.
//!
//! Subsets are emitted as strictly increasing `Vec<usize>`, ordered by size
//! and, within a size, lexicographically.

/// Lazy iterator over all size-`k` subsets of `{0, .., n-1}` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    /// Create an iterator over the `k`-subsets of `{0, .., n-1}`.
    ///
    /// Yields nothing when `k > n`, and exactly one empty subset when `k == 0`.
    pub fn new(n: usize, k: usize) -> Self {
        let current = (k <= n).then(|| (0..k).collect());
        Self { n, current }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let k = current.len();

        // Advance the rightmost index that still has room, then reset the tail.
        let mut successor = current.clone();
        let pivot = (0..k).rev().find(|&i| successor[i] < self.n - k + i);
        if let Some(i) = pivot {
            successor[i] += 1;
            for j in i + 1..k {
                successor[j] = successor[j - 1] + 1;
            }
            self.current = Some(successor);
        }

        Some(current)
    }
}

/// Lazy iterator over every subset of `{0, .., n-1}`, empty subset first.
#[derive(Debug, Clone)]
pub struct Powerset {
    n: usize,
    size: usize,
    inner: Combinations,
}

impl Iterator for Powerset {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(subset) = self.inner.next() {
                return Some(subset);
            }
            if self.size >= self.n {
                return None;
            }
            self.size += 1;
            self.inner = Combinations::new(self.n, self.size);
        }
    }
}

/// Enumerate all `2^n` subsets of `{0, .., n-1}`.
///
/// # Example
/// ```
/// use bimatrix_solver::support::powerset;
///
/// let subsets: Vec<Vec<usize>> = powerset(2).collect();
/// assert_eq!(subsets, vec![vec![], vec![0], vec![1], vec![0, 1]]);
/// ```
pub fn powerset(n: usize) -> Powerset {
    Powerset {
        n,
        size: 0,
        inner: Combinations::new(n, 0),
    }
}

/// Binomial coefficient `C(n, k)`, saturating on overflow.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut result: u64 = 1;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by (i + 1).
        result = match result.checked_mul(n - i) {
            Some(v) => v / (i + 1),
            None => return u64::MAX,
        };
    }
    result
}
