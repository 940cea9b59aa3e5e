//! Top-K selection over a rank vector.
//!
//! Two ordering policies share the same selected index set:
//!
//! - **Rank order** (keywords): descending score, ties broken by ascending
//!   original index. Deterministic.
//! - **Position order** (summaries): the same top-K set, re-sorted by
//!   ascending original index so the excerpt reads chronologically. The
//!   re-sort is a deliberate, distinct policy, not a variation of the first.

use crate::errors::{Error, Result};
use crate::solver::RankVector;
use std::cmp::Ordering;

/// Select the top `k` node indices in descending rank order.
///
/// If `k` exceeds the number of nodes, all nodes are returned. `k == 0` is
/// an [`Error::InvalidConfig`].
pub fn top_k_by_rank(ranks: &RankVector, k: usize) -> Result<Vec<usize>> {
    select(ranks, k)
}

/// Select the top `k` node indices, re-sorted into ascending original order.
///
/// Chooses exactly the index set [`top_k_by_rank`] would for the same `k`,
/// then restores document order.
pub fn top_k_by_position(ranks: &RankVector, k: usize) -> Result<Vec<usize>> {
    let mut selected = select(ranks, k)?;
    selected.sort_unstable();
    Ok(selected)
}

fn select(ranks: &RankVector, k: usize) -> Result<Vec<usize>> {
    if k == 0 {
        return Err(Error::config("selection count must be greater than 0"));
    }

    let mut indexed: Vec<(usize, f64)> = ranks
        .scores
        .iter()
        .copied()
        .enumerate()
        .collect();
    indexed.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    indexed.truncate(k);
    Ok(indexed.into_iter().map(|(idx, _)| idx).collect())
}
