// src/rank/order.rs
//! Deterministic ordering of final scores.

use serde::Serialize;

/// One ranked document, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDoc {
    pub name: String,
    pub score: f64,
}

/// Sorts documents by final score, descending.
///
/// The sort is stable, so equal scores keep their discovery order and
/// repeated runs over the same scores produce the identical sequence.
#[must_use]
pub fn order(names: &[String], scores: &[f64]) -> Vec<RankedDoc> {
    let mut ranked: Vec<RankedDoc> = names
        .iter()
        .zip(scores)
        .map(|(name, &score)| RankedDoc {
            name: name.clone(),
            score,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
