//! Dense similarity graphs.
//!
//! A [`DenseGraph`] is the Gram matrix of a feature matrix: `M * M^T` relates
//! corpus units over shared terms (sentence graph), `M^T * M` relates terms
//! over shared units (word graph). Both are symmetric and non-negative with
//! self-similarity on the diagonal.
//!
//! Graphs are single-use, O(N^2) artifacts: the solver takes them by value
//! and transforms them in place, so a graph is consumed by ranking.

use crate::errors::{Error, Result};
use crate::vectorizer::FeatureMatrix;

/// Dense square symmetric non-negative weighted graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGraph {
    n: usize,
    data: Vec<f64>,
}

impl DenseGraph {
    /// Build the unit-to-unit similarity graph `M * M^T`.
    ///
    /// Entry (i, j) is the dot product of unit rows i and j over shared
    /// features. No normalization — the TF-IDF weighting already controls
    /// scale for the sentence graph.
    pub fn sentence_graph(matrix: &FeatureMatrix) -> Self {
        let n = matrix.rows();
        let mut graph = Self::zeros(n);
        for i in 0..n {
            let row_i = matrix.row(i);
            for j in i..n {
                let dot: f64 = row_i
                    .iter()
                    .zip(matrix.row(j))
                    .map(|(a, b)| a * b)
                    .sum();
                graph.set(i, j, dot);
                graph.set(j, i, dot);
            }
        }
        graph
    }

    /// Build the term-to-term co-occurrence graph `M^T * M`.
    ///
    /// Entry (i, j) is the dot product of term columns i and j over shared
    /// units. Callers normalize the matrix columns first (see
    /// [`FeatureMatrix::normalize_columns_l2`]).
    pub fn word_graph(matrix: &FeatureMatrix) -> Self {
        let n = matrix.cols();
        let rows = matrix.rows();
        let mut graph = Self::zeros(n);
        for i in 0..n {
            for j in i..n {
                let dot: f64 = (0..rows).map(|r| matrix.get(r, i) * matrix.get(r, j)).sum();
                graph.set(i, j, dot);
                graph.set(j, i, dot);
            }
        }
        graph
    }

    /// Create an all-zero graph over `n` nodes.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Build a graph from a flat row-major buffer of length `n * n`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match `n * n`.
    pub fn from_raw(n: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), n * n, "buffer length must equal n * n");
        Self { n, data }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Read the weight between nodes i and j.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Write the weight between nodes i and j.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }

    /// Sum of column j.
    pub fn column_sum(&self, j: usize) -> f64 {
        (0..self.n).map(|i| self.get(i, j)).sum()
    }

    /// Reject graphs with negative or non-finite entries.
    ///
    /// Such entries make the column-stochastic normalization undefined, so
    /// ranking must fail fast instead of propagating NaN/Inf into the solve.
    pub fn validate(&self) -> Result<()> {
        for i in 0..self.n {
            for j in 0..self.n {
                let value = self.get(i, j);
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidGraph {
                        row: i,
                        col: j,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Swap rows i and j (used by the pivoting elimination).
    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (i, j) = (i.min(j), i.max(j));
        let (head, tail) = self.data.split_at_mut(j * self.n);
        head[i * self.n..(i + 1) * self.n].swap_with_slice(&mut tail[..self.n]);
    }
}
