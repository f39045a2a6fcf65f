//! Navigation state: active-section tracking, scroll-dependent chrome,
//! the mobile menu, and keyboard section stepping.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::Deserialize;

use crate::consts::{BACK_TO_TOP_PX, HEADER_SCROLLED_PX};

/// Measured vertical extent of one `section[id]`, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open containment of the shifted span `[top - offset, top - offset + height)`.
    fn contains(&self, scroll_y: f64, reference_offset: f64) -> bool {
        let start = self.top - reference_offset;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Section under the reference line, testing in document order.
///
/// `reference_offset` is how far below the viewport top the line sits
/// (header height plus a fixed margin). When shifted spans overlap, the
/// earlier section wins.
#[must_use]
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, reference_offset: f64) -> Option<&SectionSpan> {
    sections.iter().find(|s| s.contains(scroll_y, reference_offset))
}

/// Remembers the highlighted link so the DOM is only touched on change.
#[derive(Debug, Clone, Default)]
pub struct NavHighlight {
    active: Option<String>,
}

impl NavHighlight {
    /// Returns the newly active id when the highlight moves. When no section
    /// matches, the previous highlight is kept.
    pub fn update(&mut self, sections: &[SectionSpan], scroll_y: f64, reference_offset: f64) -> Option<&str> {
        let next = active_section(sections, scroll_y, reference_offset)?;
        if self.active.as_deref() == Some(next.id.as_str()) {
            return None;
        }
        self.active = Some(next.id.clone());
        self.active.as_deref()
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

/// Header and back-to-top visibility for a scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollChrome {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollChrome {
    #[must_use]
    pub fn at(scroll_y: f64, thresholds: ChromeThresholds) -> Self {
        Self {
            header_scrolled: scroll_y > thresholds.header_px,
            back_to_top_visible: scroll_y > thresholds.back_to_top_px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeThresholds {
    pub header_px: f64,
    pub back_to_top_px: f64,
}

impl Default for ChromeThresholds {
    fn default() -> Self {
        Self { header_px: HEADER_SCROLLED_PX, back_to_top_px: BACK_TO_TOP_PX }
    }
}

/// What the caller should do with one high-frequency event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleCall {
    /// Handle the event now.
    Run,
    /// Drop the event, but make one trailing call after `wait_ms` through
    /// [`Throttle::fire_trailing`].
    Schedule { wait_ms: f64 },
    /// Drop the event; a trailing call is already scheduled.
    Skip,
}

/// Rate limiter that runs on the leading edge and once more on the trailing
/// edge, so the last event of a burst is never lost.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_ms: Option<f64>,
    trailing: bool,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, last_ms: None, trailing: false }
    }

    /// Classify an event at `now_ms`. A clock that reads earlier than the
    /// open window starts a new one.
    pub fn poll(&mut self, now_ms: f64) -> ThrottleCall {
        if let Some(last) = self.last_ms {
            let elapsed = now_ms - last;
            if (0.0..self.limit_ms).contains(&elapsed) {
                if self.trailing {
                    return ThrottleCall::Skip;
                }
                self.trailing = true;
                return ThrottleCall::Schedule { wait_ms: self.limit_ms - elapsed };
            }
        }
        self.last_ms = Some(now_ms);
        self.trailing = false;
        ThrottleCall::Run
    }

    /// Run the scheduled trailing call. `false` when a leading call already
    /// covered it.
    pub fn fire_trailing(&mut self, now_ms: f64) -> bool {
        if !self.trailing {
            return false;
        }
        self.trailing = false;
        self.last_ms = Some(now_ms);
        true
    }
}

/// Document scroll position that puts `offset_top` just below the header.
#[must_use]
pub fn scroll_target(offset_top: f64, header_height: f64) -> f64 {
    (offset_top - header_height).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Next,
    Previous,
}

impl StepDirection {
    /// Map a `KeyboardEvent.key` pressed with Alt.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Index of the section to jump to from the one straddling `probe_line`.
///
/// `rects` are viewport-relative `(top, bottom)` pairs in document order.
#[must_use]
pub fn neighbor_section(rects: &[(f64, f64)], probe_line: f64, direction: StepDirection) -> Option<usize> {
    let current = rects
        .iter()
        .position(|(top, bottom)| *top <= probe_line && *bottom > probe_line)?;
    match direction {
        StepDirection::Next if current + 1 < rects.len() => Some(current + 1),
        StepDirection::Previous if current > 0 => Some(current - 1),
        _ => None,
    }
}

/// Mobile menu open/closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns `true` when the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        if self.open { "fas fa-times" } else { "fas fa-bars" }
    }
}
