// src/rank/scores.rs
//! Base score initialization from content weight.

/// Normalized base scores plus the documents that needed the zero-word
/// clamp.
#[derive(Debug, Clone)]
pub struct BaseScores {
    /// One entry per document, summing to 1.
    pub values: Vec<f64>,
    /// Indices of documents with no extractable text. They stay in the
    /// corpus as link targets but contribute a raw base of 0.
    pub zero_word_docs: Vec<usize>,
}

/// Computes each document's base score as its log2 word count,
/// normalized so the scores sum to 1 across the corpus.
///
/// The logarithm ties intrinsic importance to content volume while
/// dampening very long documents. Word counts are clamped to a minimum
/// of 1 (log2 of zero is undefined); a clamped document contributes a
/// raw base of 0. If every raw base is 0 the distribution degenerates,
/// and we fall back to uniform `1/n` so the unit-sum invariant holds.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn initialize(word_counts: &[usize]) -> BaseScores {
    let zero_word_docs: Vec<usize> = word_counts
        .iter()
        .enumerate()
        .filter(|(_, &wc)| wc == 0)
        .map(|(i, _)| i)
        .collect();

    let raw: Vec<f64> = word_counts
        .iter()
        .map(|&wc| (wc.max(1) as f64).log2())
        .collect();

    let total: f64 = raw.iter().sum();
    let n = word_counts.len() as f64;

    let values = if total > 0.0 {
        raw.iter().map(|&r| r / total).collect()
    } else {
        word_counts.iter().map(|_| 1.0 / n).collect()
    };

    BaseScores {
        values,
        zero_word_docs,
    }
}
