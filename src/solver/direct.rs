//! Closed-form rank solver.
//!
//! Solves `(I - d*W) * x = (1-d) * 1` by Gaussian elimination with partial
//! pivoting instead of iterating to convergence — exact to floating-point
//! precision, with no tolerance parameter. The system matrix is strictly
//! diagonally dominant (diagonal 1, off-diagonal column mass at most `d`),
//! so it is always invertible for valid input.

use super::{into_damped_system, RankVector};
use crate::errors::{Error, Result};
use crate::graph::DenseGraph;

/// Direct linear-solve ranker.
#[derive(Debug, Clone, Copy)]
pub struct DirectSolver {
    /// Damping factor, must satisfy 0 < d < 1.
    pub damping: f64,
}

impl Default for DirectSolver {
    fn default() -> Self {
        Self { damping: 0.85 }
    }
}

impl DirectSolver {
    /// Create a solver with the default damping of 0.85.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Compute the rank vector for a similarity graph.
    ///
    /// Takes the graph by value: ranking rewrites it into the system matrix
    /// and the original weights are gone afterwards. Callers that need the
    /// graph again must clone before ranking.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if the damping factor is outside (0, 1).
    /// - [`Error::DegenerateInput`] for a 0x0 graph — an empty rank vector
    ///   would be indistinguishable from a deferred failure.
    /// - [`Error::InvalidGraph`] if any entry is negative or non-finite,
    ///   checked before any numeric work.
    pub fn rank(&self, mut graph: DenseGraph) -> Result<RankVector> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(Error::config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if graph.is_empty() {
            return Err(Error::degenerate("cannot rank a 0x0 graph"));
        }
        graph.validate()?;

        into_damped_system(&mut graph, self.damping);
        let b = vec![1.0 - self.damping; graph.len()];
        Ok(RankVector::new(solve(&mut graph, b)))
    }
}

/// Solve `A * x = b` in place by Gaussian elimination with partial pivoting.
///
/// `A` must be strictly diagonally dominant, which guarantees a non-zero
/// pivot in every column; the transform in [`into_damped_system`] always
/// produces such a matrix.
fn solve(a: &mut DenseGraph, mut b: Vec<f64>) -> Vec<f64> {
    let n = a.len();

    // Forward elimination.
    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = a.get(col, col).abs();
        for row in (col + 1)..n {
            let mag = a.get(row, col).abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }
        debug_assert!(pivot_mag > 0.0, "diagonally dominant system lost its pivot");
        a.swap_rows(col, pivot_row);
        b.swap(col, pivot_row);

        let pivot = a.get(col, col);
        for row in (col + 1)..n {
            let factor = a.get(row, col) / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                let v = a.get(row, k) - factor * a.get(col, k);
                a.set(row, k, v);
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in (row + 1)..n {
            acc -= a.get(row, k) * x[k];
        }
        x[row] = acc / a.get(row, row);
    }
    x
}
