// src/rank/weights.rs
//! Column-stochastic link-transition weight matrix.

use super::corpus::CorpusIndex;
use crate::html::RawLink;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

/// Weight class of a resolved link, from its structural context.
///
/// Links presented with visual emphasis transfer more importance than
/// incidental links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    Plain,
    Emphasized,
}

impl LinkClass {
    #[must_use]
    pub fn from_emphasis(emphasized: bool) -> Self {
        if emphasized {
            LinkClass::Emphasized
        } else {
            LinkClass::Plain
        }
    }

    /// Per-link weight contributed before column normalization.
    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            LinkClass::Plain => 1.0,
            LinkClass::Emphasized => 2.0,
        }
    }
}

/// n×n transition matrix, `weight(target, source)` = probability mass
/// flowing from source to target. Every column sums to 1, built once
/// and immutable thereafter.
#[derive(Debug, Clone)]
pub struct WeightMatrix {
    /// Column-major: `cols[source][target]`.
    cols: Vec<Vec<f64>>,
}

impl WeightMatrix {
    /// Builds the matrix from each document's outbound links.
    ///
    /// `links_per_doc` is indexed by source document; columns are
    /// independent and built in parallel. Links whose targets do not
    /// resolve within the corpus are dropped silently and do not count
    /// toward "has outlinks". A source with no surviving links becomes
    /// a dangling column: its mass is redistributed uniformly over the
    /// whole corpus.
    #[must_use]
    pub fn build(index: &CorpusIndex, links_per_doc: &[Vec<RawLink>]) -> Self {
        let n = index.len();
        let cols = links_per_doc
            .par_iter()
            .map(|links| build_column(index, links, n))
            .collect();
        Self { cols }
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.cols.len()
    }

    /// Mass flowing from `source` to `target`.
    #[must_use]
    pub fn weight(&self, target: usize, source: usize) -> f64 {
        self.cols[source][target]
    }

    /// One source document's full outbound distribution.
    #[must_use]
    pub fn column(&self, source: usize) -> &[f64] {
        &self.cols[source]
    }
}

#[allow(clippy::cast_precision_loss)]
fn build_column(index: &CorpusIndex, links: &[RawLink], n: usize) -> Vec<f64> {
    let resolved: Vec<(usize, f64)> = links
        .iter()
        .filter_map(|link| {
            index
                .resolve(&link.target)
                .map(|target| (target, LinkClass::from_emphasis(link.emphasized).weight()))
        })
        .collect();

    if resolved.is_empty() {
        return vec![1.0 / n as f64; n];
    }

    // Repeated links to the same target accumulate additively, self-links
    // included. No deduplication.
    let mut column = vec![0.0; n];
    for (target, weight) in resolved {
        column[target] += weight;
    }

    let total: f64 = column.iter().sum();
    for entry in &mut column {
        *entry /= total;
    }
    column
}
