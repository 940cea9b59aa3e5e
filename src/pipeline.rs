//! Per-document orchestration.
//!
//! [`TextRank`] wires the stages together for one document: vectorize the
//! noun bags, build the two Gram graphs, solve for the rank vectors, and
//! select under the two ordering policies. Everything is a pure, blocking,
//! in-memory computation — callers processing many documents parallelize at
//! the document boundary via [`analyze_batch`].
//!
//! A `TextRank` value carries only configuration; vectorizers and graphs are
//! built fresh per call, so no vocabulary state leaks between documents.

use crate::errors::{Error, Result};
use crate::graph::DenseGraph;
use crate::select::{top_k_by_position, top_k_by_rank};
use crate::solver::direct::DirectSolver;
use crate::solver::RankVector;
use crate::types::RankConfig;
use crate::vectorizer::{Vectorizer, Weighting};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Emit a debug event for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr, $($field:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(stage = $name, $($field)*);
    };
}

// ============================================================================
// Inputs and outputs
// ============================================================================

/// One document ready for analysis.
///
/// `sentences` are the original sentence strings in reading order;
/// `nouns` holds one space-joined noun bag per sentence, already filtered of
/// stop-words and short tokens by the caller's extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Original sentences, in order.
    pub sentences: Vec<String>,
    /// Space-joined noun tokens, one entry per sentence.
    pub nouns: Vec<String>,
}

/// Everything a ranking run produces for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Summary sentences in original document order.
    pub summary: Vec<String>,
    /// Keywords in descending rank order.
    pub keywords: Vec<String>,
    /// Per-sentence importance scores.
    pub sentence_ranks: RankVector,
    /// Per-vocabulary-term importance scores.
    pub word_ranks: RankVector,
}

// ============================================================================
// TextRank
// ============================================================================

/// Per-document summary and keyword extractor.
#[derive(Debug, Clone)]
pub struct TextRank {
    config: RankConfig,
}

impl Default for TextRank {
    fn default() -> Self {
        // The default config is always valid.
        Self {
            config: RankConfig::default(),
        }
    }
}

impl TextRank {
    /// Create an extractor after validating the configuration.
    pub fn new(config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Run the full pipeline: summary, keywords, and both rank vectors.
    ///
    /// `sentences` and `nouns` must be the same length — downstream indices
    /// refer to both. Graph size is O(N^2) in sentences and vocabulary terms;
    /// capping either is the caller's responsibility.
    pub fn analyze(&self, sentences: &[String], nouns: &[String]) -> Result<DocumentAnalysis> {
        if sentences.len() != nouns.len() {
            return Err(Error::degenerate(format!(
                "{} sentences but {} noun bags",
                sentences.len(),
                nouns.len()
            )));
        }

        let sentence_ranks = self.rank_sentences(nouns)?;
        let summary = top_k_by_position(&sentence_ranks, self.config.summary_len)?
            .into_iter()
            .map(|idx| sentences[idx].clone())
            .collect();

        let (word_ranks, keywords) = self.rank_words(nouns)?;

        Ok(DocumentAnalysis {
            summary,
            keywords,
            sentence_ranks,
            word_ranks,
        })
    }

    /// Extract only the summary: top sentences in original document order.
    pub fn summarize(&self, sentences: &[String], nouns: &[String]) -> Result<Vec<String>> {
        if sentences.len() != nouns.len() {
            return Err(Error::degenerate(format!(
                "{} sentences but {} noun bags",
                sentences.len(),
                nouns.len()
            )));
        }
        let ranks = self.rank_sentences(nouns)?;
        Ok(top_k_by_position(&ranks, self.config.summary_len)?
            .into_iter()
            .map(|idx| sentences[idx].clone())
            .collect())
    }

    /// Extract only the keywords, in descending rank order.
    pub fn keywords(&self, nouns: &[String]) -> Result<Vec<String>> {
        let (_, keywords) = self.rank_words(nouns)?;
        Ok(keywords)
    }

    /// TF-IDF sentence-similarity graph -> sentence rank vector.
    fn rank_sentences(&self, nouns: &[String]) -> Result<RankVector> {
        let (matrix, _) = Vectorizer::new(Weighting::TfIdf).fit_transform(nouns)?;
        let graph = DenseGraph::sentence_graph(&matrix);
        trace_stage!("sentence_graph", nodes = graph.len());

        let ranks = DirectSolver::new()
            .with_damping(self.config.damping)
            .rank(graph)?;
        trace_stage!("sentence_rank", nodes = ranks.len());
        Ok(ranks)
    }

    /// Column-normalized count co-occurrence graph -> word ranks + keywords.
    fn rank_words(&self, nouns: &[String]) -> Result<(RankVector, Vec<String>)> {
        let (mut matrix, vocab) = Vectorizer::new(Weighting::Counts).fit_transform(nouns)?;
        matrix.normalize_columns_l2();
        let graph = DenseGraph::word_graph(&matrix);
        trace_stage!("word_graph", nodes = graph.len());

        let ranks = DirectSolver::new()
            .with_damping(self.config.damping)
            .rank(graph)?;
        trace_stage!("word_rank", nodes = ranks.len());

        let keywords = top_k_by_rank(&ranks, self.config.keyword_count)?
            .into_iter()
            .map(|idx| {
                // Selected indices come from the ranks, which share the
                // vocabulary's index space.
                vocab.term(idx).unwrap_or_default().to_string()
            })
            .collect();
        Ok((ranks, keywords))
    }
}

// ============================================================================
// Batch processing
// ============================================================================

/// Analyze a batch of documents in parallel, one solver invocation per
/// document.
///
/// Each document is independent and side-effect-free, so parallelism lives
/// here rather than inside a single graph solve. Failures are reported per
/// document; one degenerate document never aborts the batch.
pub fn analyze_batch(
    config: &RankConfig,
    documents: &[Document],
) -> Result<Vec<Result<DocumentAnalysis>>> {
    let engine = TextRank::new(config.clone())?;
    Ok(documents
        .par_iter()
        .map(|doc| engine.analyze(&doc.sentences, &doc.nouns))
        .collect())
}
