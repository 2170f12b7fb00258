// src/rank/iterate.rs
//! Damped power iteration over the weight matrix.

use super::weights::WeightMatrix;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

/// Terminal state of the iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// Every per-document delta fell below epsilon.
    Converged,
    /// The safety bound was hit first; scores are best-effort.
    MaxSweepsReached,
}

#[derive(Debug, Clone)]
pub struct IterationOutcome {
    pub scores: Vec<f64>,
    pub sweeps: usize,
    pub convergence: Convergence,
}

/// Iterates `score_i = (1 - F) * base_i + F * Σ_j score_j * w[i][j]`
/// to a fixed point.
///
/// Each sweep is synchronous: every pending score is computed from the
/// previous sweep's committed scores, then the whole buffer replaces
/// them at once. Partially-updated scores are never read within a
/// sweep, so results do not depend on document order.
///
/// Convergence tolerance is `0.01 / n`, scaling inversely with corpus
/// size. The update is a contraction for damping < 1, so the sweep
/// bound exists only as a guard against pathological inputs; hitting it
/// reports `MaxSweepsReached` with the last committed scores rather
/// than looping forever.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn run(
    base: &[f64],
    matrix: &WeightMatrix,
    damping: f64,
    max_sweeps: usize,
) -> IterationOutcome {
    let n = base.len();
    let epsilon = 0.01 / n as f64;

    let mut scores = base.to_vec();

    for sweep in 1..=max_sweeps {
        let pending = compute_pending(&scores, base, matrix, damping);

        let max_delta = scores
            .iter()
            .zip(&pending)
            .map(|(committed, next)| (next - committed).abs())
            .fold(0.0_f64, f64::max);

        // Commit: the pending buffer becomes the sweep's result wholesale.
        scores = pending;

        if max_delta <= epsilon {
            return IterationOutcome {
                scores,
                sweeps: sweep,
                convergence: Convergence::Converged,
            };
        }
    }

    IterationOutcome {
        scores,
        sweeps: max_sweeps,
        convergence: Convergence::MaxSweepsReached,
    }
}

/// One synchronous sweep. Per-document terms only read the previous
/// sweep's committed scores and the immutable matrix, so they are
/// computed in parallel; each document's dot product stays sequential,
/// keeping results deterministic.
fn compute_pending(
    scores: &[f64],
    base: &[f64],
    matrix: &WeightMatrix,
    damping: f64,
) -> Vec<f64> {
    let n = base.len();
    (0..n)
        .into_par_iter()
        .map(|target| {
            let transferred: f64 = (0..n)
                .map(|source| scores[source] * matrix.weight(target, source))
                .sum();
            (1.0 - damping) * base[target] + damping * transferred
        })
        .collect()
}
