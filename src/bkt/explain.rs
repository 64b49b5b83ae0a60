//! Human-readable justification for a selection decision.

use crate::bkt::types::DecisionTrail;

/// Render the decision trail into a short natural-language reason.
///
/// Pure formatting over a trail the selector guarantees to be well-formed.
pub fn build(trail: &DecisionTrail) -> String {
    let skill = &trail.skill;
    let percent = (trail.mastery * 100.0).round() as i64;
    let difficulty = trail.tier.label();

    if trail.backoff {
        return format!(
            "You've struggled with {skill} recently (last 2 wrong). \
             Trying a {difficulty} exercise to reinforce your understanding."
        );
    }

    if trail.mastery < 0.35 {
        format!(
            "Your {skill} mastery is {percent}%. \
             Starting with {difficulty} exercises to build confidence."
        )
    } else if trail.mastery <= 0.70 {
        format!(
            "Your {skill} mastery is {percent}%. \
             Moving to {difficulty} exercises to challenge you appropriately."
        )
    } else {
        format!(
            "Your {skill} mastery is {percent}%. \
             Time for {difficulty} exercises to push your limits!"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bkt::types::{Difficulty, RelaxationStep};

    fn trail(mastery: f64, tier: Difficulty, backoff: bool) -> DecisionTrail {
        DecisionTrail {
            skill: "Plurals".to_string(),
            mastery,
            tier,
            backoff,
            relaxation: RelaxationStep::ExactTier,
        }
    }

    #[test]
    fn backoff_takes_precedence() {
        let reason = build(&trail(0.5, Difficulty::Easy, true));
        assert!(reason.contains("struggled with Plurals"));
        assert!(reason.contains("easy exercise"));
    }

    #[test]
    fn low_mastery_mentions_confidence_building() {
        let reason = build(&trail(0.2, Difficulty::Easy, false));
        assert!(reason.contains("mastery is 20%"));
        assert!(reason.contains("build confidence"));
    }

    #[test]
    fn medium_mastery_mentions_challenge() {
        let reason = build(&trail(0.5, Difficulty::Medium, false));
        assert!(reason.contains("mastery is 50%"));
        assert!(reason.contains("challenge you appropriately"));
    }

    #[test]
    fn high_mastery_mentions_limits() {
        let reason = build(&trail(0.85, Difficulty::Hard, false));
        assert!(reason.contains("mastery is 85%"));
        assert!(reason.contains("push your limits"));
    }
}
