// tests/unit_corpus.rs
//! Tests for the case-insensitive document index.

use docrank_core::rank::CorpusIndex;

fn index(names: &[&str]) -> CorpusIndex {
    CorpusIndex::build(names.iter().copied())
}

#[test]
fn test_indices_follow_discovery_order() {
    let idx = index(&["alpha.html", "beta.html", "gamma.html"]);
    assert_eq!(idx.resolve("alpha.html"), Some(0));
    assert_eq!(idx.resolve("beta.html"), Some(1));
    assert_eq!(idx.resolve("gamma.html"), Some(2));
    assert_eq!(idx.len(), 3);
}

#[test]
fn test_resolution_is_case_insensitive() {
    let idx = index(&["Index.HTML"]);
    assert_eq!(idx.resolve("index.html"), Some(0));
    assert_eq!(idx.resolve("INDEX.HTML"), Some(0));
    assert_eq!(idx.resolve("Index.HTML"), Some(0));
}

#[test]
fn test_unknown_target_is_unresolved() {
    let idx = index(&["a.html"]);
    assert_eq!(idx.resolve("b.html"), None);
    assert_eq!(idx.resolve("https://example.com/a.html"), None);
}

#[test]
fn test_no_partial_path_matching() {
    let idx = index(&["page.html"]);
    assert_eq!(
        idx.resolve("sub/page.html"),
        None,
        "full-key lookup must not match path suffixes"
    );
}

#[test]
fn test_duplicate_normalized_names_last_wins() {
    let idx = index(&["Page.html", "page.HTML"]);
    assert_eq!(idx.resolve("page.html"), Some(1));
    assert_eq!(idx.len(), 2, "both documents keep their dense indices");
}

#[test]
fn test_empty_index() {
    let idx = index(&[]);
    assert!(idx.is_empty());
    assert_eq!(idx.resolve("anything"), None);
}
