//! # textrank-solve
//!
//! Extractive summarization and keyword ranking over weighted similarity
//! graphs, solved in closed form.
//!
//! Sentences (and words) become nodes of a dense symmetric graph built as
//! the Gram matrix of a term feature matrix. Node importance is the fixed
//! point of the damped recurrence `x = (1-d)*1 + d*W*x`, obtained by a
//! direct linear solve — exact to floating-point precision, with no
//! convergence-tolerance knob.
//!
//! The crate expects already-split sentences and already-filtered noun bags;
//! crawling, HTML stripping, and tokenization belong to the caller.
//!
//! ## Example
//!
//! ```
//! use textrank_solve::{RankConfig, TextRank};
//!
//! let sentences: Vec<String> = [
//!     "Graphs connect sentences that share vocabulary.",
//!     "A damped walk over the graph scores each sentence.",
//!     "Cooking pasta requires salted water.",
//! ]
//! .iter()
//! .map(|s| s.to_string())
//! .collect();
//!
//! let nouns: Vec<String> = [
//!     "graph sentence vocabulary",
//!     "walk graph sentence score",
//!     "pasta water",
//! ]
//! .iter()
//! .map(|s| s.to_string())
//! .collect();
//!
//! let engine = TextRank::new(RankConfig::default().with_summary_len(2))?;
//! let analysis = engine.analyze(&sentences, &nouns)?;
//!
//! assert_eq!(analysis.summary.len(), 2);
//! assert!(!analysis.keywords.is_empty());
//! # Ok::<(), textrank_solve::Error>(())
//! ```

pub mod errors;
pub mod graph;
pub mod pipeline;
pub mod select;
pub mod solver;
pub mod types;
pub mod vectorizer;

// Re-export commonly used types.
pub use errors::{Error, Result};
pub use graph::DenseGraph;
pub use pipeline::{analyze_batch, Document, DocumentAnalysis, TextRank};
pub use select::{top_k_by_position, top_k_by_rank};
pub use solver::direct::DirectSolver;
pub use solver::power::{PowerOutcome, PowerSolver};
pub use solver::RankVector;
pub use types::{RankConfig, Vocabulary};
pub use vectorizer::{FeatureMatrix, Vectorizer, Weighting};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
