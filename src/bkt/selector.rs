//! Exercise selection policy.
//!
//! Target the weakest skill, map its mastery to a difficulty tier, back off a
//! tier after two consecutive misses, then walk an explicit relaxation ladder
//! until a candidate set is non-empty. The ladder never crosses skills: a
//! skill with no reachable exercises is reported, not silently skipped.
//! Selection is fully deterministic; ties break by id ascending and the pick
//! within a candidate set is least-recently-shown.

use std::collections::HashSet;

use crate::bkt::error::CoreError;
use crate::bkt::types::{DecisionTrail, Difficulty, Exercise, RelaxationStep, SessionState};

/// Mastery probability to difficulty tier.
pub fn tier_for_mastery(mastery: f64) -> Difficulty {
    if mastery < 0.35 {
        Difficulty::Easy
    } else if mastery <= 0.70 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Weakest skill in the table; ties break by skill id ascending.
///
/// `SessionState::mastery` is a BTreeMap, so iterating in key order and
/// keeping the first strict minimum gives the deterministic tie-break.
fn target_skill(session: &SessionState) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (skill, record) in &session.mastery {
        match best {
            Some((_, mastery)) if record.probability >= mastery => {}
            _ => best = Some((skill.as_str(), record.probability)),
        }
    }
    best
}

/// Tiers to try for the target skill, in relaxation order: the resolved tier
/// first, then the remaining tiers by distance, ties preferring the easier one.
fn tier_ladder(resolved: Difficulty) -> Vec<Difficulty> {
    let mut tiers = Difficulty::ALL.to_vec();
    tiers.sort_by_key(|tier| {
        let distance = tier.index().abs_diff(resolved.index());
        (distance, tier.index())
    });
    tiers
}

/// Least-recently-shown exercise among `candidates`; ties break by id.
fn pick<'a>(session: &SessionState, candidates: &[&'a Exercise]) -> &'a Exercise {
    let stamp = |ex: &Exercise| session.last_shown.get(&ex.id).copied().unwrap_or(0);
    candidates
        .iter()
        .copied()
        .min_by(|a, b| (stamp(a), a.id.as_str()).cmp(&(stamp(b), b.id.as_str())))
        .expect("pick called with a non-empty candidate set")
}

/// Select the next exercise for `session` from `pool`.
///
/// Deterministic given the same inputs. Does not mutate the session; the
/// caller stamps the returned exercise as shown once it commits to it.
pub fn select<'a>(
    session: &SessionState,
    pool: &'a [Exercise],
    exclude_ids: &HashSet<String>,
) -> Result<(&'a Exercise, DecisionTrail), CoreError> {
    let (skill, mastery) = target_skill(session).ok_or(CoreError::NoExerciseAvailable)?;

    let mastery_tier = tier_for_mastery(mastery);
    let backoff = session
        .mastery
        .get(skill)
        .is_some_and(|record| record.last_two_wrong());
    let resolved = if backoff {
        mastery_tier.step_down()
    } else {
        mastery_tier
    };

    let available: Vec<&Exercise> = pool
        .iter()
        .filter(|ex| ex.skill == skill && !exclude_ids.contains(&ex.id))
        .collect();

    for (step_index, tier) in tier_ladder(resolved).into_iter().enumerate() {
        let candidates: Vec<&Exercise> = available
            .iter()
            .copied()
            .filter(|ex| ex.difficulty == tier)
            .collect();
        if candidates.is_empty() {
            continue;
        }

        let relaxation = if step_index == 0 {
            RelaxationStep::ExactTier
        } else {
            RelaxationStep::NearestTier
        };
        let exercise = pick(session, &candidates);
        let trail = DecisionTrail {
            skill: skill.to_string(),
            mastery,
            tier,
            backoff,
            relaxation,
        };
        return Ok((exercise, trail));
    }

    Err(CoreError::NoExerciseAvailable)
}
