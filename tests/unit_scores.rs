// tests/unit_scores.rs
//! Tests for base score initialization.

use docrank_core::rank::scores;

const TOLERANCE: f64 = 1e-12;

#[test]
fn test_base_scores_sum_to_one() {
    let base = scores::initialize(&[10, 200, 3000, 7]);
    let total: f64 = base.values.iter().sum();
    assert!(
        (total - 1.0).abs() < TOLERANCE,
        "base scores should sum to 1, got {total}"
    );
}

#[test]
fn test_equal_word_counts_share_equally() {
    let base = scores::initialize(&[10, 10]);
    assert!((base.values[0] - 0.5).abs() < TOLERANCE);
    assert!((base.values[1] - 0.5).abs() < TOLERANCE);
}

#[test]
fn test_log_scale_ratio() {
    // log2(4) = 2, log2(16) = 4, so the shares are 1/3 and 2/3.
    let base = scores::initialize(&[4, 16]);
    assert!((base.values[0] - 1.0 / 3.0).abs() < TOLERANCE);
    assert!((base.values[1] - 2.0 / 3.0).abs() < TOLERANCE);
}

#[test]
fn test_zero_word_document_is_clamped() {
    let base = scores::initialize(&[0, 4]);
    assert!(
        base.values[0].abs() < TOLERANCE,
        "zero-word doc contributes no base mass"
    );
    assert!((base.values[1] - 1.0).abs() < TOLERANCE);
    assert_eq!(base.zero_word_docs, vec![0]);
}

#[test]
fn test_degenerate_corpus_falls_back_to_uniform() {
    // Every raw base is log2(1) = 0; the unit-sum invariant still holds.
    let base = scores::initialize(&[1, 1, 0]);
    for &v in &base.values {
        assert!((v - 1.0 / 3.0).abs() < TOLERANCE);
    }
    assert_eq!(base.zero_word_docs, vec![2]);
}

#[test]
fn test_longer_documents_weigh_more_but_sublinearly() {
    let base = scores::initialize(&[100, 10000]);
    assert!(base.values[1] > base.values[0]);
    assert!(
        base.values[1] < base.values[0] * 100.0,
        "log scale should dampen a 100x word count advantage"
    );
}
