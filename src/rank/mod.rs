// src/rank/mod.rs
//! The ranking engine: corpus index, base scores, weight matrix,
//! power iteration, ordering.

pub mod corpus;
pub mod iterate;
pub mod order;
pub mod scores;
pub mod weights;

pub use corpus::CorpusIndex;
pub use iterate::Convergence;
pub use order::RankedDoc;
pub use weights::WeightMatrix;

use crate::config::Config;
use crate::discovery;
use crate::error::{RankError, Result};
use crate::html::{self, DocDigest, RawLink};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

/// Result of a full ranking run.
#[derive(Debug, Clone)]
pub struct RankReport {
    /// Documents in descending score order.
    pub rankings: Vec<RankedDoc>,
    pub doc_count: usize,
    pub sweeps: usize,
    pub convergence: Convergence,
    /// Names of documents with no extractable text (ranked by links only).
    pub zero_word_docs: Vec<String>,
}

/// Orchestrates discovery, digestion, and ranking.
pub struct RankEngine {
    config: Config,
}

impl RankEngine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the whole pipeline against the configured corpus root.
    ///
    /// # Errors
    /// Returns `EmptyCorpus` when discovery finds nothing, or an I/O
    /// error if a discovered file cannot be read.
    pub fn rank(&self) -> Result<RankReport> {
        let files = discovery::discover(&self.config)?;

        let digests: Result<Vec<DocDigest>> = files
            .par_iter()
            .map(|file| html::digest_file(&file.path()))
            .collect();

        self.rank_digests(digests?)
    }

    /// Ranks pre-digested documents. Digest order is discovery order
    /// and fixes each document's index for the run.
    ///
    /// # Errors
    /// Returns `EmptyCorpus` for an empty digest list.
    pub fn rank_digests(&self, digests: Vec<DocDigest>) -> Result<RankReport> {
        if digests.is_empty() {
            return Err(RankError::EmptyCorpus(self.config.root.clone()));
        }

        let names: Vec<String> = digests.iter().map(|d| d.name.clone()).collect();
        let word_counts: Vec<usize> = digests.iter().map(|d| d.word_count).collect();
        let links_per_doc: Vec<Vec<RawLink>> =
            digests.into_iter().map(|d| d.links).collect();

        let index = CorpusIndex::build(names.iter().map(String::as_str));
        let base = scores::initialize(&word_counts);
        let matrix = WeightMatrix::build(&index, &links_per_doc);

        let outcome = iterate::run(
            &base.values,
            &matrix,
            self.config.damping,
            self.config.max_sweeps,
        );

        let rankings = order::order(&names, &outcome.scores);

        Ok(RankReport {
            rankings,
            doc_count: names.len(),
            sweeps: outcome.sweeps,
            convergence: outcome.convergence,
            zero_word_docs: base
                .zero_word_docs
                .iter()
                .map(|&i| names[i].clone())
                .collect(),
        })
    }
}
