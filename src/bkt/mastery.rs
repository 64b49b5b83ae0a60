//! Bayesian Knowledge Tracing update, generalized to a soft observation.
//!
//! The standard BKT evidence step assumes a boolean observation. Latency
//! adjustment produces a fractional correctness, so the two conditional Bayes
//! updates are blended by that fraction before the learning transition is
//! applied.

use crate::bkt::config::BktParams;
use crate::bkt::types::MasteryRecord;

/// Bayes posterior for a fully correct observation.
fn bayes_correct(prior: f64, params: &BktParams) -> f64 {
    let numerator = prior * (1.0 - params.s);
    let denominator = numerator + (1.0 - prior) * params.g;
    if denominator <= f64::EPSILON {
        return prior;
    }
    numerator / denominator
}

/// Bayes posterior for a fully incorrect observation.
fn bayes_incorrect(prior: f64, params: &BktParams) -> f64 {
    let numerator = prior * params.s;
    let denominator = numerator + (1.0 - prior) * (1.0 - params.g);
    if denominator <= f64::EPSILON {
        return prior;
    }
    numerator / denominator
}

/// Advance `prior` by one observation of `adjusted_correct` in [0, 1].
///
/// Evidence step blends the correct and incorrect Bayes branches; the
/// transition step can only raise the result. Always returns a value in
/// [0, 1]; an out-of-range intermediate trips the arithmetic guard, which is
/// logged and clamped rather than surfaced as a failure.
pub fn update(prior: f64, adjusted_correct: f64, params: &BktParams) -> f64 {
    let prior = prior.clamp(0.0, 1.0);
    let weight = adjusted_correct.clamp(0.0, 1.0);

    let evidence =
        weight * bayes_correct(prior, params) + (1.0 - weight) * bayes_incorrect(prior, params);
    let posterior = evidence + (1.0 - evidence) * params.t;

    if !posterior.is_finite() || !(0.0..=1.0).contains(&posterior) {
        tracing::warn!(
            prior,
            adjusted_correct = weight,
            posterior,
            "arithmetic guard clamped BKT posterior"
        );
        if !posterior.is_finite() {
            return prior;
        }
    }
    posterior.clamp(0.0, 1.0)
}

/// Apply one answer to a mastery record: overwrite the probability and push
/// the raw (not adjusted) correctness into the recent-outcome window.
pub fn apply(record: &mut MasteryRecord, raw_correct: bool, adjusted_correct: f64, params: &BktParams) {
    record.probability = update(record.probability, adjusted_correct, params);
    record.push_outcome(raw_correct);
}
