//! Core types shared across the ranking pipeline.
//!
//! This module defines the caller-facing configuration and the vocabulary
//! (token <-> dense column index bijection) that ties the feature matrix to
//! human-readable terms.

use crate::errors::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Caller-facing configuration for a per-document ranking run.
///
/// All values are validated up front; an out-of-range value is an
/// [`Error::InvalidConfig`], never a silently clamped default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Damping factor for the random-walk recurrence. Must satisfy 0 < d < 1.
    pub damping: f64,
    /// Number of sentences in the extractive summary.
    pub summary_len: usize,
    /// Number of keywords to return.
    pub keyword_count: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            summary_len: 3,
            keyword_count: 10,
        }
    }
}

impl RankConfig {
    /// Create a config with the default damping and selection counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the summary length.
    pub fn with_summary_len(mut self, summary_len: usize) -> Self {
        self.summary_len = summary_len;
        self
    }

    /// Set the keyword count.
    pub fn with_keyword_count(mut self, keyword_count: usize) -> Self {
        self.keyword_count = keyword_count;
        self
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(Error::config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if self.summary_len == 0 {
            return Err(Error::config("summary_len must be greater than 0"));
        }
        if self.keyword_count == 0 {
            return Err(Error::config("keyword_count must be greater than 0"));
        }
        Ok(())
    }
}

// ============================================================================
// Vocabulary
// ============================================================================

/// Bijection between tokens and dense, contiguous, zero-based column indices.
///
/// Built once per corpus by the vectorizer and read-only afterwards. The
/// reverse map translates ranked word indices back to surface strings.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Maps token -> column index.
    index: FxHashMap<String, usize>,
    /// Maps column index -> token.
    terms: Vec<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a token, returning its column index.
    pub fn get_or_insert(&mut self, token: &str) -> usize {
        if let Some(&idx) = self.index.get(token) {
            return idx;
        }
        let idx = self.terms.len();
        self.index.insert(token.to_string(), idx);
        self.terms.push(token.to_string());
        idx
    }

    /// Look up the column index for a token.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Look up the token for a column index.
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(|s| s.as_str())
    }

    /// Iterate over terms in column order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|s| s.as_str())
    }

    /// Number of unique tokens.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
