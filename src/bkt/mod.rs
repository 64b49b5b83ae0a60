//! Bayesian Knowledge Tracing core: latency-adjusted correctness, mastery
//! updates, exercise selection with backoff, and selection explanations.

pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod latency;
pub mod mastery;
pub mod selector;
pub mod types;

pub use config::{BktConfig, BktParams, LatencyWindow};
pub use engine::BktEngine;
pub use error::CoreError;
pub use types::{
    DecisionTrail, Difficulty, Exercise, MasteryRecord, MasterySnapshot, RelaxationStep,
    Selection, SessionState,
};
