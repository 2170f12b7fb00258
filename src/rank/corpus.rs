// src/rank/corpus.rs
//! Case-insensitive document identifier index.

use std::collections::HashMap;

/// Maps normalized (lower-cased) document names to dense indices.
///
/// Indices follow discovery order and stay fixed for the run. Lookup is
/// case-insensitive on the full key; there is no partial-path matching,
/// so a link target must spell out the exact filename to resolve. When
/// two files normalize to the same key the later registration wins.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    ids: HashMap<String, usize>,
    len: usize,
}

impl CorpusIndex {
    /// Builds the index from document names in discovery order.
    #[must_use]
    pub fn build<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ids = HashMap::new();
        let mut len = 0;
        for (index, name) in names.into_iter().enumerate() {
            ids.insert(name.to_lowercase(), index);
            len = index + 1;
        }
        Self { ids, len }
    }

    /// Resolves a raw link target to a document index, or `None` for
    /// targets outside the corpus.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<usize> {
        self.ids.get(&raw.to_lowercase()).copied()
    }

    /// Number of documents in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
