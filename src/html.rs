// src/html.rs
//! HTML digestion: per-document word counts and outbound links.
//!
//! Each file is parsed once into a kuchiki DOM. html5ever recovers from
//! malformed markup, so any text file yields a usable (possibly empty)
//! digest rather than a parse failure.

use crate::error::{RankError, Result};
use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;
use std::fs;
use std::path::Path;

/// Ancestor elements that mark an anchor as editorially emphasized.
pub const EMPHASIS_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "em", "b"];

/// An anchor's raw target reference plus its emphasis context.
///
/// The target is the verbatim `href` value; resolution against the
/// corpus happens later, during matrix construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink {
    pub target: String,
    pub emphasized: bool,
}

/// Everything the ranker needs from one document.
#[derive(Debug, Clone)]
pub struct DocDigest {
    pub name: String,
    pub word_count: usize,
    pub links: Vec<RawLink>,
}

/// Reads and digests a single corpus file.
///
/// Content is decoded lossily so legacy encodings degrade to replacement
/// characters instead of aborting the run.
///
/// # Errors
/// Returns an I/O error carrying the offending path if the file cannot
/// be read.
pub fn digest_file(path: &Path) -> Result<DocDigest> {
    let bytes = fs::read(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let html = String::from_utf8_lossy(&bytes);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(digest_html(name, &html))
}

/// Digests in-memory HTML under the given document name.
#[must_use]
pub fn digest_html(name: String, html: &str) -> DocDigest {
    let root = kuchiki::parse_html().one(html);
    DocDigest {
        name,
        word_count: word_count(&root),
        links: outbound_links(&root),
    }
}

/// Whitespace-delimited token count of the document's extracted text.
fn word_count(root: &NodeRef) -> usize {
    root.text_contents().split_whitespace().count()
}

/// Ordered `href` targets of every anchor element, with emphasis context.
///
/// Anchors without an `href` attribute carry no target and are skipped.
fn outbound_links(root: &NodeRef) -> Vec<RawLink> {
    let Ok(anchors) = root.select("a") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for anchor in anchors {
        let attrs = anchor.attributes.borrow();
        let Some(href) = attrs.get("href") else {
            continue;
        };
        links.push(RawLink {
            target: href.to_string(),
            emphasized: has_emphasis_ancestor(anchor.as_node()),
        });
    }
    links
}

fn has_emphasis_ancestor(node: &NodeRef) -> bool {
    node.ancestors().any(|ancestor| {
        ancestor
            .as_element()
            .map_or(false, |el| EMPHASIS_TAGS.contains(&&*el.name.local))
    })
}
