// tests/unit_iterate.rs
//! Tests for the damped power iteration.

use docrank_core::html::RawLink;
use docrank_core::rank::iterate::{self, Convergence};
use docrank_core::rank::{CorpusIndex, WeightMatrix};

fn link(target: &str) -> RawLink {
    RawLink {
        target: target.to_string(),
        emphasized: false,
    }
}

fn emphasized_link(target: &str) -> RawLink {
    RawLink {
        target: target.to_string(),
        emphasized: true,
    }
}

fn matrix(names: &[&str], links_per_doc: &[Vec<RawLink>]) -> WeightMatrix {
    let index = CorpusIndex::build(names.iter().copied());
    WeightMatrix::build(&index, links_per_doc)
}

/// Two documents, equal base: A links to B once, B is dangling.
fn two_doc_matrix() -> WeightMatrix {
    matrix(&["a.html", "b.html"], &[vec![link("b.html")], vec![]])
}

#[test]
fn test_two_document_scenario() {
    let m = two_doc_matrix();
    let outcome = iterate::run(&[0.5, 0.5], &m, 0.7, 1000);

    assert_eq!(outcome.convergence, Convergence::Converged);
    assert!(
        outcome.scores[1] > outcome.scores[0],
        "B receives all of A's transferred mass plus its own base"
    );
    // Fixed point of the recurrence: a = 0.15 + 0.35b, b = 0.15 + 0.7a + 0.35b.
    assert!((outcome.scores[0] - 10.0 / 27.0).abs() < 0.01);
    assert!((outcome.scores[1] - 17.0 / 27.0).abs() < 0.01);
}

#[test]
fn test_score_mass_is_preserved() {
    let m = two_doc_matrix();
    let outcome = iterate::run(&[0.5, 0.5], &m, 0.7, 1000);
    let total: f64 = outcome.scores.iter().sum();
    let epsilon = 0.01 / 2.0;
    assert!(
        (total - 1.0).abs() < 2.0 * epsilon,
        "scores should sum to 1 after convergence, got {total}"
    );
}

#[test]
fn test_single_document_converges_immediately() {
    let m = matrix(&["only.html"], &[vec![]]);
    let outcome = iterate::run(&[1.0], &m, 0.7, 1000);

    assert_eq!(outcome.convergence, Convergence::Converged);
    assert_eq!(outcome.sweeps, 1);
    assert!((outcome.scores[0] - 1.0).abs() < 1e-12);
}

#[test]
fn test_zero_damping_reproduces_base_scores() {
    let m = two_doc_matrix();
    let base = [0.25, 0.75];
    let outcome = iterate::run(&base, &m, 0.0, 1000);

    assert_eq!(outcome.convergence, Convergence::Converged);
    assert_eq!(outcome.sweeps, 1, "teleport-only update is its own fixed point");
    assert!((outcome.scores[0] - base[0]).abs() < 1e-12);
    assert!((outcome.scores[1] - base[1]).abs() < 1e-12);
}

#[test]
fn test_lower_damping_converges_faster() {
    let m = two_doc_matrix();
    let fast = iterate::run(&[0.5, 0.5], &m, 0.2, 1000);
    let slow = iterate::run(&[0.5, 0.5], &m, 0.9, 1000);

    assert_eq!(fast.convergence, Convergence::Converged);
    assert_eq!(slow.convergence, Convergence::Converged);
    assert!(
        fast.sweeps <= slow.sweeps,
        "F=0.2 took {} sweeps, F=0.9 took {}",
        fast.sweeps,
        slow.sweeps
    );
}

#[test]
fn test_sweep_bound_yields_best_effort_scores() {
    let m = two_doc_matrix();
    let outcome = iterate::run(&[0.5, 0.5], &m, 0.7, 1);

    assert_eq!(outcome.convergence, Convergence::MaxSweepsReached);
    assert_eq!(outcome.sweeps, 1);
    // Exactly one committed sweep from the base distribution.
    assert!((outcome.scores[0] - 0.325).abs() < 1e-12);
    assert!((outcome.scores[1] - 0.675).abs() < 1e-12);
}

#[test]
fn test_emphasis_never_lowers_target_score() {
    // A links to B and C; raising the A->C class from plain to
    // emphasized (all else fixed) must not decrease C's converged score.
    let names = ["a.html", "b.html", "c.html"];
    let base = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];

    let plain = matrix(
        &names,
        &[vec![link("b.html"), link("c.html")], vec![], vec![]],
    );
    let boosted = matrix(
        &names,
        &[vec![link("b.html"), emphasized_link("c.html")], vec![], vec![]],
    );

    let plain_outcome = iterate::run(&base, &plain, 0.7, 1000);
    let boosted_outcome = iterate::run(&base, &boosted, 0.7, 1000);

    assert!(
        boosted_outcome.scores[2] >= plain_outcome.scores[2] - 1e-9,
        "emphasized inbound link lowered the target's score: {} -> {}",
        plain_outcome.scores[2],
        boosted_outcome.scores[2]
    );
}

#[test]
fn test_dangling_source_contributes_uniform_share() {
    // Doc 0 is dangling in a 4-document corpus; after one sweep each
    // target's term from that source is 0.25 * score(source).
    let names = ["a.html", "b.html", "c.html", "d.html"];
    let m = matrix(
        &names,
        &[
            vec![],
            vec![link("a.html")],
            vec![link("a.html")],
            vec![link("a.html")],
        ],
    );

    let base = [0.4, 0.2, 0.2, 0.2];
    let outcome = iterate::run(&base, &m, 1.0, 1);

    // With F=1 the pending score is purely transferred mass. Targets
    // b, c, d receive mass only from the dangling doc 0.
    for target in 1..4 {
        assert!(
            (outcome.scores[target] - 0.25 * base[0]).abs() < 1e-12,
            "target {target} should receive exactly 1/n of the dangling source's score"
        );
    }
}
