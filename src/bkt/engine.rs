//! The engine ties the core components together over a caller-owned session.
//!
//! The engine itself holds only immutable inputs (parameters, latency window,
//! exercise pool). Session state is passed in by reference; the host owns its
//! lifecycle and must serialize access to a given instance for the duration of
//! each logical operation.

use std::collections::HashSet;

use crate::bkt::config::BktConfig;
use crate::bkt::error::CoreError;
use crate::bkt::types::{Exercise, MasterySnapshot, Selection, SessionState};
use crate::bkt::{explain, latency, mastery, selector};

pub struct BktEngine {
    config: BktConfig,
    pool: Vec<Exercise>,
}

impl BktEngine {
    pub fn new(config: BktConfig, pool: Vec<Exercise>) -> Self {
        Self { config, pool }
    }

    pub fn pool(&self) -> &[Exercise] {
        &self.pool
    }

    /// Skills present in the pool, deduplicated.
    pub fn skills(&self) -> Vec<&str> {
        let mut skills: Vec<&str> = self.pool.iter().map(|ex| ex.skill.as_str()).collect();
        skills.sort_unstable();
        skills.dedup();
        skills
    }

    /// A fresh session: one record per pool skill at the L0 prior.
    pub fn new_session(&self) -> SessionState {
        SessionState::new(self.skills(), &self.config.params)
    }

    /// Reinitialize `session` to defaults. Idempotent.
    pub fn reset(&self, session: &mut SessionState) {
        *session = self.new_session();
        tracing::debug!(skills = session.mastery.len(), "session reset");
    }

    /// Apply one answer: latency adjustment, BKT update, history append.
    ///
    /// Validation and exercise lookup happen before any mutation, so a failure
    /// leaves the session untouched.
    pub fn record_answer(
        &self,
        session: &mut SessionState,
        exercise_id: &str,
        raw_correct: bool,
        latency_ms: i64,
    ) -> Result<MasterySnapshot, CoreError> {
        let adjusted = latency::adjust(raw_correct, latency_ms, &self.config.latency)?;
        let exercise = self
            .pool
            .iter()
            .find(|ex| ex.id == exercise_id)
            .ok_or_else(|| CoreError::UnknownExercise(exercise_id.to_string()))?;

        let record = session.record_mut(&exercise.skill, &self.config.params);
        let prior = record.probability;
        mastery::apply(record, raw_correct, adjusted, &self.config.params);

        tracing::debug!(
            exercise_id,
            skill = %exercise.skill,
            raw_correct,
            latency_ms,
            adjusted,
            prior,
            posterior = record.probability,
            "answer recorded"
        );

        Ok(session.snapshot())
    }

    /// Pick the next exercise and explain the choice.
    ///
    /// On success the pick is stamped as shown, which is what rotates the
    /// least-recently-shown order across calls.
    pub fn next_exercise(
        &self,
        session: &mut SessionState,
        exclude_ids: &HashSet<String>,
    ) -> Result<Selection, CoreError> {
        let (exercise, trail) = selector::select(session, &self.pool, exclude_ids)?;
        let exercise = exercise.clone();
        let reason = explain::build(&trail);

        tracing::debug!(
            exercise_id = %exercise.id,
            skill = %trail.skill,
            mastery = trail.mastery,
            tier = trail.tier.label(),
            backoff = trail.backoff,
            relaxation = ?trail.relaxation,
            "exercise selected"
        );

        session.mark_shown(&exercise.id);
        Ok(Selection {
            exercise,
            reason,
            mastery: session.snapshot(),
        })
    }
}
