//! Exercise pool loading.
//!
//! The pool is an immutable external input: a JSON array of exercises read
//! from `EXERCISES_PATH` if set, falling back to the built-in default pool.

use crate::bkt::types::{Difficulty, Exercise};

/// Load the pool from `EXERCISES_PATH`, or the defaults when unset or broken.
pub fn load_pool() -> Vec<Exercise> {
    let Some(path) = std::env::var("EXERCISES_PATH").ok().filter(|p| !p.is_empty()) else {
        return default_pool();
    };

    match std::fs::read_to_string(&path) {
        Ok(raw) => match serde_json::from_str::<Vec<Exercise>>(&raw) {
            Ok(pool) if !pool.is_empty() => {
                tracing::info!(path = %path, count = pool.len(), "loaded exercise pool");
                pool
            }
            Ok(_) => {
                tracing::warn!(path = %path, "exercise file is empty, using default pool");
                default_pool()
            }
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "failed to parse exercise file, using default pool");
                default_pool()
            }
        },
        Err(err) => {
            tracing::warn!(path = %path, error = %err, "failed to read exercise file, using default pool");
            default_pool()
        }
    }
}

fn exercise(
    id: &str,
    skill: &str,
    prompt: &str,
    choices: &[&str],
    answer_index: usize,
    difficulty: Difficulty,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        skill: skill.to_string(),
        prompt: prompt.to_string(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
        answer_index,
        difficulty,
    }
}

/// Three skills, three tiers per skill where the content allows it.
pub fn default_pool() -> Vec<Exercise> {
    vec![
        exercise(
            "basics_1",
            "Basics",
            "What is the correct form of 'I am'?",
            &["I am", "I is", "I are", "I be"],
            0,
            Difficulty::Easy,
        ),
        exercise(
            "basics_2",
            "Basics",
            "Choose the correct verb: 'She ___ happy.'",
            &["is", "are", "am", "be"],
            0,
            Difficulty::Easy,
        ),
        exercise(
            "basics_3",
            "Basics",
            "What is the past tense of 'go'?",
            &["goed", "went", "gone", "goes"],
            1,
            Difficulty::Medium,
        ),
        exercise(
            "plurals_1",
            "Plurals",
            "What is the plural of 'child'?",
            &["childs", "children", "childes", "child"],
            1,
            Difficulty::Easy,
        ),
        exercise(
            "plurals_2",
            "Plurals",
            "What is the plural of 'mouse'?",
            &["mouses", "mice", "mouse", "mousies"],
            1,
            Difficulty::Medium,
        ),
        exercise(
            "plurals_3",
            "Plurals",
            "What is the plural of 'cactus'?",
            &["cactuses", "cacti", "cactus", "cactuses or cacti"],
            3,
            Difficulty::Hard,
        ),
        exercise(
            "irregular_1",
            "IrregularVerbs",
            "What is the past tense of 'swim'?",
            &["swimmed", "swam", "swum", "swim"],
            1,
            Difficulty::Easy,
        ),
        exercise(
            "irregular_2",
            "IrregularVerbs",
            "What is the past participle of 'break'?",
            &["breaked", "broke", "broken", "break"],
            2,
            Difficulty::Medium,
        ),
        exercise(
            "irregular_3",
            "IrregularVerbs",
            "What is the past tense of 'lie' (to recline)?",
            &["lied", "lay", "lain", "lie"],
            1,
            Difficulty::Hard,
        ),
    ]
}
