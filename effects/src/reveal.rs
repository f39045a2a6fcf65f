//! One-shot reveal tracking for scroll-triggered animations.
//!
//! Each target walks `Unobserved -> Observed -> Revealed`. `Revealed` is
//! terminal: once an element crosses the visibility threshold it is never
//! evaluated again, and the caller is told to stop observing it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;

use crate::consts::STAGGER_STEP_MS;

pub type TargetId = usize;

const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unobserved,
    Observed,
    Revealed,
}

/// What the observer host should do after an intersection report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealAction {
    /// Nothing changed.
    Ignore,
    /// Apply the reveal (after `delay_ms`) and unobserve the target.
    Reveal { delay_ms: f64 },
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    states: HashMap<TargetId, RevealState>,
    stagger: HashMap<TargetId, usize>,
}

impl RevealTracker {
    /// `threshold` is the visible fraction (0.0..=1.0) that triggers a reveal.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), states: HashMap::new(), stagger: HashMap::new() }
    }

    /// Start watching `id`. Revealed targets stay revealed.
    pub fn observe(&mut self, id: TargetId) {
        let state = self.states.entry(id).or_default();
        if *state == RevealState::Unobserved {
            *state = RevealState::Observed;
        }
    }

    /// Start watching `id` with a cascade delay derived from its position
    /// among siblings.
    pub fn observe_staggered(&mut self, id: TargetId, sibling_index: usize) {
        self.observe(id);
        self.stagger.insert(id, sibling_index);
    }

    /// Feed one intersection report.
    ///
    /// A ratio of zero never reveals, even with a zero threshold.
    pub fn on_intersection(&mut self, id: TargetId, ratio: f64) -> RevealAction {
        let Some(state) = self.states.get_mut(&id) else {
            return RevealAction::Ignore;
        };
        if *state != RevealState::Observed {
            return RevealAction::Ignore;
        }
        if ratio <= 0.0 || ratio < self.threshold {
            return RevealAction::Ignore;
        }
        *state = RevealState::Revealed;
        let delay_ms = self.stagger.get(&id).map_or(0.0, |index| stagger_delay_ms(*index));
        RevealAction::Reveal { delay_ms }
    }

    /// Feed a browser observer entry. Reported ratios land slightly under the
    /// configured threshold, so a small tolerance is added.
    pub fn on_entry(&mut self, id: TargetId, is_intersecting: bool, ratio: f64) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        self.on_intersection(id, (ratio + RATIO_TOLERANCE).min(1.0))
    }

    #[must_use]
    pub fn state(&self, id: TargetId) -> RevealState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.states.values().filter(|s| **s == RevealState::Revealed).count()
    }
}

/// Cascade delay for the `index`-th sibling.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stagger_delay_ms(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_MS
}
