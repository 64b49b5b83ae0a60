//! Latency-based correctness adjustment.
//!
//! A fast correct answer is strong evidence of knowing; a slow correct answer
//! may be deliberated guessing; a fast wrong answer looks like a slip; a slow
//! wrong answer is the clearest signal of not knowing. Latencies between the
//! two thresholds interpolate linearly between the anchor credits, so the
//! adjustment is monotone in latency for either correctness outcome.

use crate::bkt::config::LatencyWindow;
use crate::bkt::error::CoreError;

/// Credit anchors: (fast, slow) per correctness outcome.
const CORRECT_FAST: f64 = 1.0;
const CORRECT_SLOW: f64 = 0.75;
const WRONG_FAST: f64 = 0.25;
const WRONG_SLOW: f64 = 0.0;

/// Map raw correctness and latency to an adjusted correctness in [0, 1].
///
/// Pure; negative latency is rejected as `CoreError::Validation`.
pub fn adjust(raw_correct: bool, latency_ms: i64, window: &LatencyWindow) -> Result<f64, CoreError> {
    if latency_ms < 0 {
        return Err(CoreError::Validation(format!(
            "latency_ms must be >= 0, got {latency_ms}"
        )));
    }

    let (fast, slow) = if raw_correct {
        (CORRECT_FAST, CORRECT_SLOW)
    } else {
        (WRONG_FAST, WRONG_SLOW)
    };

    if latency_ms < window.fast_ms {
        return Ok(fast);
    }
    if latency_ms >= window.slow_ms {
        return Ok(slow);
    }

    let span = (window.slow_ms - window.fast_ms) as f64;
    let fraction = (latency_ms - window.fast_ms) as f64 / span;
    Ok(fast + (slow - fast) * fraction)
}
