use serde::{Deserialize, Serialize};

/// Global BKT parameters, shared by every skill. All values live in (0, 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BktParams {
    /// Prior probability of knowing a skill before any evidence.
    pub l0: f64,
    /// Learning (transition) rate applied after each observation.
    pub t: f64,
    /// Slip rate: wrong answer despite knowing the skill.
    pub s: f64,
    /// Guess rate: correct answer despite not knowing the skill.
    pub g: f64,
}

impl Default for BktParams {
    fn default() -> Self {
        Self {
            l0: 0.2,
            t: 0.15,
            s: 0.1,
            g: 0.2,
        }
    }
}

/// Latency thresholds for the correctness adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyWindow {
    /// Answers faster than this get full (or slip-discounted) credit.
    pub fast_ms: i64,
    /// Answers at or beyond this get the slow-anchor credit.
    pub slow_ms: i64,
}

impl Default for LatencyWindow {
    fn default() -> Self {
        Self {
            fast_ms: 2000,
            slow_ms: 6000,
        }
    }
}

/// Bound on each skill's recent-outcome window.
pub const RECENT_WINDOW: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BktConfig {
    pub params: BktParams,
    pub latency: LatencyWindow,
}

impl BktConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("BKT_L0") {
            config.params.l0 = parse_unit(&val).unwrap_or(config.params.l0);
        }
        if let Ok(val) = std::env::var("BKT_T") {
            config.params.t = parse_unit(&val).unwrap_or(config.params.t);
        }
        if let Ok(val) = std::env::var("BKT_S") {
            config.params.s = parse_unit(&val).unwrap_or(config.params.s);
        }
        if let Ok(val) = std::env::var("BKT_G") {
            config.params.g = parse_unit(&val).unwrap_or(config.params.g);
        }
        if let Ok(val) = std::env::var("LATENCY_FAST_MS") {
            config.latency.fast_ms = val.parse().unwrap_or(config.latency.fast_ms);
        }
        if let Ok(val) = std::env::var("LATENCY_SLOW_MS") {
            config.latency.slow_ms = val.parse().unwrap_or(config.latency.slow_ms);
        }
        if config.latency.slow_ms <= config.latency.fast_ms {
            tracing::warn!(
                fast_ms = config.latency.fast_ms,
                slow_ms = config.latency.slow_ms,
                "latency window inverted, falling back to defaults"
            );
            config.latency = LatencyWindow::default();
        }

        config
    }
}

fn parse_unit(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| *v > 0.0 && *v < 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = BktConfig::default();
        assert_eq!(config.params.l0, 0.2);
        assert_eq!(config.params.t, 0.15);
        assert_eq!(config.params.s, 0.1);
        assert_eq!(config.params.g, 0.2);
        assert_eq!(config.latency.fast_ms, 2000);
        assert_eq!(config.latency.slow_ms, 6000);
    }

    #[test]
    fn parse_unit_rejects_out_of_range() {
        assert_eq!(parse_unit("0.5"), Some(0.5));
        assert_eq!(parse_unit("0"), None);
        assert_eq!(parse_unit("1"), None);
        assert_eq!(parse_unit("-0.2"), None);
        assert_eq!(parse_unit("abc"), None);
    }
}
