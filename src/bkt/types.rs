//! Shared data structures for the BKT core.

use std::collections::{BTreeMap, HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::bkt::config::{BktParams, RECENT_WINDOW};

/// Exercise difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// One tier down; Easy stays Easy.
    pub fn step_down(self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Easy => Difficulty::Easy,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// A pooled exercise. Immutable after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub skill: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer_index: usize,
    pub difficulty: Difficulty,
}

/// Per-skill mastery state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasteryRecord {
    /// P(knows skill), always kept in [0, 1].
    pub probability: f64,
    /// Raw correctness of the most recent answers, oldest first, bounded length.
    pub recent_outcomes: VecDeque<bool>,
}

impl MasteryRecord {
    pub fn new(prior: f64) -> Self {
        Self {
            probability: prior,
            recent_outcomes: VecDeque::with_capacity(RECENT_WINDOW),
        }
    }

    /// Append a raw outcome, dropping the oldest once the window is full.
    pub fn push_outcome(&mut self, correct: bool) {
        self.recent_outcomes.push_back(correct);
        while self.recent_outcomes.len() > RECENT_WINDOW {
            self.recent_outcomes.pop_front();
        }
    }

    /// True when the last two recorded outcomes are both wrong.
    pub fn last_two_wrong(&self) -> bool {
        if self.recent_outcomes.len() < 2 {
            return false;
        }
        self.recent_outcomes.iter().rev().take(2).all(|c| !c)
    }
}

/// One learner's session: the mastery table plus selection bookkeeping.
///
/// Owned by the host and passed by reference into the engine; the host must
/// serialize all access to a given instance (see `state::AppState`).
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub mastery: BTreeMap<String, MasteryRecord>,
    /// Exercise id -> stamp of the last time it was handed out.
    pub last_shown: HashMap<String, u64>,
    /// Monotonic counter backing `last_shown`.
    pub shown_counter: u64,
}

impl SessionState {
    /// Fresh session with one record per skill at the L0 prior.
    pub fn new<'a>(skills: impl IntoIterator<Item = &'a str>, params: &BktParams) -> Self {
        let mastery = skills
            .into_iter()
            .map(|skill| (skill.to_string(), MasteryRecord::new(params.l0)))
            .collect();
        Self {
            mastery,
            last_shown: HashMap::new(),
            shown_counter: 0,
        }
    }

    /// Record for `skill`, created at the prior on first reference.
    pub fn record_mut(&mut self, skill: &str, params: &BktParams) -> &mut MasteryRecord {
        self.mastery
            .entry(skill.to_string())
            .or_insert_with(|| MasteryRecord::new(params.l0))
    }

    /// Stamp an exercise as just shown.
    pub fn mark_shown(&mut self, exercise_id: &str) {
        self.shown_counter += 1;
        self.last_shown
            .insert(exercise_id.to_string(), self.shown_counter);
    }

    /// Skill -> probability view, ordered by skill id.
    pub fn snapshot(&self) -> MasterySnapshot {
        self.mastery
            .iter()
            .map(|(skill, record)| (skill.clone(), record.probability))
            .collect()
    }
}

/// Ordered skill -> mastery probability map returned to the host.
pub type MasterySnapshot = BTreeMap<String, f64>;

/// Which relaxation step produced the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelaxationStep {
    /// Target skill at the resolved tier.
    ExactTier,
    /// Target skill at the nearest other tier with candidates.
    NearestTier,
}

/// The selector's decision trail, consumed by the explanation builder.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionTrail {
    pub skill: String,
    pub mastery: f64,
    pub tier: Difficulty,
    pub backoff: bool,
    pub relaxation: RelaxationStep,
}

/// Result of `next_exercise`: the pick, its justification, and the table view.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub exercise: Exercise,
    pub reason: String,
    pub mastery: MasterySnapshot,
}
