//! Iterative rank solver.
//!
//! Power-iteration fallback for graphs large enough that a dense O(N^3)
//! elimination is prohibitive. Iterates `x = (1-d)*1 + d*W*x` until the L1
//! delta drops below a threshold. Shares the direct solver's fixed point, so
//! the two agree to within the convergence tolerance — choosing this solver
//! is an explicit caller decision, never an automatic substitution.

use super::{into_damped_system, RankVector};
use crate::errors::{Error, Result};
use crate::graph::DenseGraph;

/// Power-iteration ranker.
#[derive(Debug, Clone, Copy)]
pub struct PowerSolver {
    /// Damping factor, must satisfy 0 < d < 1.
    pub damping: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// L1 convergence threshold.
    pub threshold: f64,
}

impl Default for PowerSolver {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-10,
        }
    }
}

/// Result of a power iteration, including convergence diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerOutcome {
    /// The computed scores.
    pub ranks: RankVector,
    /// Iterations performed.
    pub iterations: usize,
    /// Final L1 delta between successive iterates.
    pub delta: f64,
    /// Whether the delta dropped below the threshold.
    pub converged: bool,
}

impl PowerSolver {
    /// Create a solver with default damping, iterations, and threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iteration count.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Compute the rank vector by damped iteration.
    ///
    /// Takes the graph by value and rewrites it into the normalized walk
    /// matrix, consuming it like the direct solver does. Returns the result
    /// even when convergence was not reached, with `converged = false`.
    ///
    /// Rejects the same inputs as [`DirectSolver::rank`]: out-of-range
    /// damping, a 0x0 graph, and negative or non-finite entries.
    ///
    /// [`DirectSolver::rank`]: super::direct::DirectSolver::rank
    pub fn rank(&self, mut graph: DenseGraph) -> Result<PowerOutcome> {
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

        let n = graph.len();
        // Reuse the system transform, then recover d*W = I - system matrix:
        // off-diagonal entries are -d*w, the diagonal is d*w = 0.
        into_damped_system(&mut graph, self.damping);

        let base = 1.0 - self.damping;
        let mut scores = vec![base; n];
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            for (i, out) in new_scores.iter_mut().enumerate() {
                let mut acc = base;
                for (j, &s) in scores.iter().enumerate() {
                    if i != j {
                        acc -= graph.get(i, j) * s;
                    }
                }
                *out = acc;
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        Ok(PowerOutcome {
            ranks: RankVector::new(scores),
            iterations,
            delta,
            converged: delta <= self.threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::direct::DirectSolver;

    fn linked_pair_with_isolate() -> DenseGraph {
        DenseGraph::from_raw(
            3,
            vec![
                1.0, 1.0, 0.0, //
                1.0, 1.0, 0.0, //
                0.0, 0.0, 1.0,
            ],
        )
    }

    #[test]
    fn test_agrees_with_direct_solver() {
        let direct = DirectSolver::new().rank(linked_pair_with_isolate()).unwrap();
        let power = PowerSolver::new().rank(linked_pair_with_isolate()).unwrap();

        assert!(power.converged);
        for i in 0..3 {
            assert!(
                (direct.score(i) - power.ranks.score(i)).abs() < 1e-8,
                "node {i}: direct {} vs power {}",
                direct.score(i),
                power.ranks.score(i)
            );
        }
    }

    #[test]
    fn test_isolated_node_converges_to_base_mass() {
        let outcome = PowerSolver::new().rank(linked_pair_with_isolate()).unwrap();
        assert!((outcome.ranks.score(2) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_max_iterations_returns_partial_result() {
        let outcome = PowerSolver::new()
            .with_max_iterations(1)
            .with_threshold(0.0)
            .rank(linked_pair_with_isolate())
            .unwrap();

        assert_eq!(outcome.iterations, 1);
        assert!(!outcome.converged);
        assert_eq!(outcome.ranks.len(), 3);
    }

    #[test]
    fn test_rejects_same_inputs_as_direct() {
        assert!(PowerSolver::new().rank(DenseGraph::zeros(0)).is_err());

        let negative = DenseGraph::from_raw(2, vec![1.0, -1.0, -1.0, 1.0]);
        assert!(PowerSolver::new().rank(negative).is_err());

        assert!(PowerSolver::new()
            .with_damping(1.0)
            .rank(DenseGraph::zeros(2))
            .is_err());
    }
}
