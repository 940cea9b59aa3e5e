//! Corpus vectorization.
//!
//! Turns an ordered sequence of token-strings (one string per unit: a
//! sentence's space-joined noun bag) into a dense feature matrix plus the
//! [`Vocabulary`] shared by every downstream stage.
//!
//! A [`Vectorizer`] is a short-lived value: build one per document so the
//! vocabulary's dense index space never leaks across documents.

use crate::errors::{Error, Result};
use crate::types::Vocabulary;
use rustc_hash::FxHashMap;

// ============================================================================
// Weighting
// ============================================================================

/// Term weighting scheme for the feature matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Term frequency scaled by smoothed inverse document frequency
    /// (`ln((1 + n) / (1 + df)) + 1`), rows L2-normalized.
    ///
    /// Feeds the sentence-similarity graph.
    TfIdf,
    /// Raw term counts per unit, no cross-corpus scaling.
    ///
    /// Feeds the word co-occurrence graph; callers normalize columns via
    /// [`FeatureMatrix::normalize_columns_l2`] before the Gram product.
    Counts,
}

// ============================================================================
// Feature matrix
// ============================================================================

/// Dense row-major matrix of non-negative term weights.
///
/// Rows follow corpus order; columns follow [`Vocabulary`] index order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl FeatureMatrix {
    /// Create a zeroed matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of rows (corpus units).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (vocabulary size).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read the entry at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Write the entry at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Borrow a full row.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Scale each column to unit Euclidean norm.
    ///
    /// All-zero columns are left untouched. This controls for words of very
    /// different raw frequency before the word-graph Gram product.
    pub fn normalize_columns_l2(&mut self) {
        for col in 0..self.cols {
            let norm: f64 = (0..self.rows)
                .map(|row| {
                    let v = self.get(row, col);
                    v * v
                })
                .sum::<f64>()
                .sqrt();
            if norm > 0.0 {
                for row in 0..self.rows {
                    let v = self.get(row, col);
                    self.set(row, col, v / norm);
                }
            }
        }
    }

    /// Scale each row to unit Euclidean norm. All-zero rows stay zero.
    fn normalize_rows_l2(&mut self) {
        for row in 0..self.rows {
            let norm: f64 = self.row(row).iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                let start = row * self.cols;
                for v in &mut self.data[start..start + self.cols] {
                    *v /= norm;
                }
            }
        }
    }
}

// ============================================================================
// Vectorizer
// ============================================================================

/// Builds a [`FeatureMatrix`] and its [`Vocabulary`] from a token corpus.
#[derive(Debug, Clone, Copy)]
pub struct Vectorizer {
    weighting: Weighting,
}

impl Vectorizer {
    /// Create a vectorizer with the given weighting scheme.
    pub fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }

    /// Build the vocabulary and feature matrix for a corpus.
    ///
    /// Each unit is split on whitespace; tokens are used verbatim (no
    /// filtering or stemming — that is the caller's collaborator contract).
    /// Vocabulary indices follow first-occurrence order.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateInput`] if the corpus is empty or no unit yields a
    /// single token — the would-be matrix has a zero dimension and the
    /// downstream solve cannot represent that.
    pub fn fit_transform<S: AsRef<str>>(
        &self,
        units: &[S],
    ) -> Result<(FeatureMatrix, Vocabulary)> {
        if units.is_empty() {
            return Err(Error::degenerate("empty corpus"));
        }

        // First pass: vocabulary plus per-unit term counts.
        let mut vocab = Vocabulary::new();
        let mut unit_counts: Vec<FxHashMap<usize, f64>> = Vec::with_capacity(units.len());
        for unit in units {
            let mut counts: FxHashMap<usize, f64> = FxHashMap::default();
            for token in unit.as_ref().split_whitespace() {
                let idx = vocab.get_or_insert(token);
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
            unit_counts.push(counts);
        }

        if vocab.is_empty() {
            return Err(Error::degenerate(format!(
                "no tokens in any of {} units",
                units.len()
            )));
        }

        let mut matrix = FeatureMatrix::zeros(units.len(), vocab.len());
        match self.weighting {
            Weighting::Counts => {
                for (row, counts) in unit_counts.iter().enumerate() {
                    for (&col, &count) in counts {
                        matrix.set(row, col, count);
                    }
                }
            }
            Weighting::TfIdf => {
                // Document frequency per column.
                let mut df = vec![0usize; vocab.len()];
                for counts in &unit_counts {
                    for &col in counts.keys() {
                        df[col] += 1;
                    }
                }

                let n = units.len() as f64;
                let idf: Vec<f64> = df
                    .iter()
                    .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
                    .collect();

                for (row, counts) in unit_counts.iter().enumerate() {
                    for (&col, &count) in counts {
                        matrix.set(row, col, count * idf[col]);
                    }
                }
                matrix.normalize_rows_l2();
            }
        }

        Ok((matrix, vocab))
    }
}
