//! Error types for the ranking engine.
//!
//! One enum for the whole crate, `thiserror` only. Every variant carries
//! enough context (offending dimension or value) for the caller to decide
//! whether to skip the document or abort.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the vectorizer, graph builder, solver, and selector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input corpus cannot produce a well-shaped matrix: it is empty,
    /// every unit is empty/whitespace, or the combined vocabulary is empty.
    ///
    /// Raised before any numeric work begins — the linear solve cannot handle
    /// a 0x0 or ill-shaped system, and the caller should hear about it
    /// explicitly rather than receive an empty rank vector.
    #[error("degenerate input: {reason}")]
    DegenerateInput {
        /// What made the input degenerate.
        reason: String,
    },

    /// A graph entry is negative or non-finite, which would make the
    /// stochastic normalization (and therefore the rank ordering) undefined.
    #[error("invalid graph entry {value} at ({row}, {col})")]
    InvalidGraph {
        /// Row index of the offending entry.
        row: usize,
        /// Column index of the offending entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// A caller-supplied parameter is out of range: damping outside (0, 1)
    /// or a zero selection count.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What was out of range.
        reason: String,
    },
}

impl Error {
    /// Build a [`Error::DegenerateInput`] from anything printable.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Error::DegenerateInput {
            reason: reason.into(),
        }
    }

    /// Build an [`Error::InvalidConfig`] from anything printable.
    pub fn config(reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            reason: reason.into(),
        }
    }
}
