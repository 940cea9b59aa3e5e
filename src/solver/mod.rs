//! Rank solvers.
//!
//! Both solvers compute the stationary importance vector of the damped
//! recurrence `x = (1-d)*1 + d*W*x`, where `W` is the input graph with its
//! diagonal zeroed and each originally non-zero column scaled to sum to 1.
//!
//! [`direct::DirectSolver`] solves the equivalent linear system in closed
//! form and is the default. [`power::PowerSolver`] iterates to a tolerance
//! and is an explicit opt-in for very large graphs where a dense O(N^3)
//! elimination is prohibitive — never a silent substitution.

pub mod direct;
pub mod power;

use crate::graph::DenseGraph;
use serde::{Deserialize, Serialize};

/// Per-node importance scores, indexed like the graph's rows.
///
/// Scores are always finite; they are not guaranteed positive in general,
/// though non-negative graphs produce scores of at least `1 - d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankVector {
    /// Score per node.
    pub scores: Vec<f64>,
}

impl RankVector {
    /// Wrap a score vector.
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether there are no scores.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score for a node, or 0.0 if out of range.
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}

/// Rewrite `graph` in place into the damped system matrix `I - d*W`.
///
/// Per column j: zero the diagonal, divide by the column sum when it is
/// non-zero (isolated columns stay all-zero and contribute no rank mass),
/// multiply by `-d`, then set the diagonal back to exactly 1.
///
/// The result is strictly diagonally dominant: every off-diagonal column has
/// magnitude at most `d < 1` while the diagonal is 1.
pub(crate) fn into_damped_system(graph: &mut DenseGraph, damping: f64) {
    let n = graph.len();
    for j in 0..n {
        graph.set(j, j, 0.0);
        let link_sum = graph.column_sum(j);
        if link_sum != 0.0 {
            for i in 0..n {
                let v = graph.get(i, j);
                graph.set(i, j, v / link_sum * -damping);
            }
        }
        // A zero link_sum means every entry in the column is already zero
        // (entries are validated non-negative): the node is isolated and
        // contributes no rank mass.
        graph.set(j, j, 1.0);
    }
}
