//! Easing curves and count-up progress for skill bars and counters.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Cubic ease-out over `t` in `0.0..=1.0`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Eased progression from zero to `target` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub target: f64,
    pub duration_ms: f64,
}

impl CountUp {
    #[must_use]
    pub fn new(target: f64, duration_ms: f64) -> Self {
        Self { target, duration_ms }
    }

    /// Value `elapsed_ms` after the start.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        self.target * ease_out_cubic(self.ratio(elapsed_ms))
    }

    /// Whether the animation should request another frame.
    #[must_use]
    pub fn is_running(&self, elapsed_ms: f64) -> bool {
        self.ratio(elapsed_ms) < 1.0
    }

    fn ratio(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }
}

/// Parse a `data-progress` / `data-count` attribute such as `"85"` or `"85%"`.
#[must_use]
pub fn parse_target(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Counter text: whole numbers, rounded down so the final frame lands on the
/// target.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_count(value: f64) -> String {
    format!("{}", value.floor() as i64)
}
