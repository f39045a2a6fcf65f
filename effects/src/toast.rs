//! Toast notification timeline.
//!
//! A toast slides in, stays for a display window, slides out and is removed.
//! The queue is a pure function of wall-clock milliseconds so the browser
//! host only has to call [`ToastQueue::tick`] at the deadlines it reports.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use serde::Deserialize;

use crate::consts::{TOAST_DISPLAY_MS, TOAST_SLIDE_IN_MS, TOAST_SLIDE_OUT_MS};

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon class shown next to the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Info => "fas fa-info-circle",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

impl ToastPhase {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Entering => "toast--entering",
            Self::Shown => "toast--shown",
            Self::Leaving => "toast--leaving",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    pub slide_in_ms: f64,
    pub display_ms: f64,
    pub slide_out_ms: f64,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self { slide_in_ms: TOAST_SLIDE_IN_MS, display_ms: TOAST_DISPLAY_MS, slide_out_ms: TOAST_SLIDE_OUT_MS }
    }
}

impl ToastTimings {
    /// Time from creation to removal when nobody touches the toast.
    #[must_use]
    pub fn lifetime_ms(&self) -> f64 {
        self.slide_in_ms + self.display_ms + self.slide_out_ms
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: ToastId,
    message: String,
    kind: ToastKind,
    created_ms: f64,
    leave_at_ms: f64,
}

/// Render-ready snapshot of one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    timings: ToastTimings,
    next_id: ToastId,
    toasts: Vec<Toast>,
    /// Latest clock reading seen by a mutating call.
    seen_ms: Option<f64>,
}

impl ToastQueue {
    #[must_use]
    pub fn new(timings: ToastTimings) -> Self {
        Self { timings, next_id: 0, toasts: Vec::new(), seen_ms: None }
    }

    #[must_use]
    pub fn timings(&self) -> ToastTimings {
        self.timings
    }

    /// Append a toast. Toasts stack in insertion order; duplicates are kept.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, now_ms: f64) -> ToastId {
        self.rebase(now_ms);
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            created_ms: now_ms,
            leave_at_ms: now_ms + self.timings.slide_in_ms + self.timings.display_ms,
        });
        id
    }

    /// Cut the display window short and start sliding out now.
    ///
    /// Returns `false` when the toast is gone or already leaving.
    pub fn dismiss(&mut self, id: ToastId, now_ms: f64) -> bool {
        self.rebase(now_ms);
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if now_ms >= toast.leave_at_ms {
            return false;
        }
        toast.leave_at_ms = now_ms;
        true
    }

    /// Drop every toast whose slide-out has finished. Returns how many went.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        self.rebase(now_ms);
        let slide_out = self.timings.slide_out_ms;
        let before = self.toasts.len();
        self.toasts.retain(|t| now_ms < t.leave_at_ms + slide_out);
        before - self.toasts.len()
    }

    #[must_use]
    pub fn visible(&self, now_ms: f64) -> Vec<ToastView> {
        self.toasts
            .iter()
            .map(|t| ToastView {
                id: t.id,
                message: t.message.clone(),
                kind: t.kind,
                phase: self.phase_of(t, now_ms),
            })
            .collect()
    }

    #[must_use]
    pub fn phase(&self, id: ToastId, now_ms: f64) -> Option<ToastPhase> {
        self.toasts.iter().find(|t| t.id == id).map(|t| self.phase_of(t, now_ms))
    }

    /// Earliest future instant at which some toast changes phase or expires.
    #[must_use]
    pub fn next_deadline(&self, now_ms: f64) -> Option<f64> {
        self.toasts
            .iter()
            .flat_map(|t| {
                [
                    t.created_ms + self.timings.slide_in_ms,
                    t.leave_at_ms,
                    t.leave_at_ms + self.timings.slide_out_ms,
                ]
            })
            .filter(|at| *at > now_ms)
            .min_by(f64::total_cmp)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Shift every timeline back when the clock reads earlier than before,
    /// so each toast keeps the time it had left.
    fn rebase(&mut self, now_ms: f64) {
        if let Some(seen) = self.seen_ms
            && now_ms < seen
        {
            let shift = now_ms - seen;
            for toast in &mut self.toasts {
                toast.created_ms += shift;
                toast.leave_at_ms += shift;
            }
        }
        self.seen_ms = Some(now_ms);
    }

    fn phase_of(&self, toast: &Toast, now_ms: f64) -> ToastPhase {
        if now_ms >= toast.leave_at_ms {
            ToastPhase::Leaving
        } else if now_ms < toast.created_ms + self.timings.slide_in_ms {
            ToastPhase::Entering
        } else {
            ToastPhase::Shown
        }
    }
}
