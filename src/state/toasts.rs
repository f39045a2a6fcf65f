//! Reactive toast queue shared by every feature unit.
//!
//! [`Notifier`] is `Copy`, so any event handler can hold one. In browser
//! builds every change schedules a timer for the queue's next deadline; the
//! timer ticks the queue and reschedules until it is empty. Only the most
//! recently scheduled timer keeps the chain going; older ones fire as no-ops.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use effects::toast::{ToastId, ToastKind, ToastPhase, ToastQueue, ToastTimings, ToastView};
use leptos::prelude::*;

use crate::util::clock::now_ms;

#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    /// Generation of the one live tick chain.
    chain: StoredValue<u64>,
}

impl Notifier {
    pub fn new(timings: ToastTimings) -> Self {
        Self { queue: RwSignal::new(ToastQueue::new(timings)), chain: StoredValue::new(0) }
    }

    /// Show a toast. Never fails.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let now = now_ms();
        self.notify_at(message, kind, now);
        self.schedule(now);
    }

    /// Close a toast early from its close button.
    pub fn dismiss(&self, id: ToastId) {
        let now = now_ms();
        self.dismiss_at(id, now);
        self.schedule(now);
    }

    pub fn notify_at(&self, message: impl Into<String>, kind: ToastKind, now: f64) -> ToastId {
        let message = message.into();
        log::debug!("toast ({}): {message}", kind.as_str());
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, kind, now));
        id
    }

    pub fn dismiss_at(&self, id: ToastId, now: f64) -> bool {
        let mut dismissed = false;
        self.queue.update(|q| dismissed = q.dismiss(id, now));
        dismissed
    }

    /// Advance the timeline. Always notifies subscribers so phase classes
    /// re-render at their boundaries.
    pub fn tick_at(&self, now: f64) {
        self.queue.update(|q| {
            q.tick(now);
        });
    }

    /// Tracked snapshot for rendering.
    pub fn snapshot(&self) -> Vec<ToastView> {
        let now = now_ms();
        self.queue.with(|q| q.visible(now))
    }

    pub fn snapshot_at(&self, now: f64) -> Vec<ToastView> {
        self.queue.with_untracked(|q| q.visible(now))
    }

    /// Tracked phase of one toast.
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        let now = now_ms();
        self.queue.with(|q| q.phase(id, now))
    }

    pub fn len(&self) -> usize {
        self.queue.with_untracked(ToastQueue::len)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.with_untracked(ToastQueue::is_empty)
    }

    /// Claim the tick chain. Any timer scheduled under an earlier
    /// generation stops at its next firing.
    fn claim_chain(&self) -> u64 {
        self.chain.update_value(|g| *g += 1);
        self.chain.get_value()
    }

    fn owns_chain(&self, generation: u64) -> bool {
        self.chain.get_value() == generation
    }

    fn schedule(&self, now: f64) {
        let generation = self.claim_chain();
        #[cfg(feature = "csr")]
        {
            let Some(deadline) = self.queue.with_untracked(|q| q.next_deadline(now)) else {
                return;
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let wait_ms = (deadline - now).ceil().max(0.0) as u32;
            let notifier = *self;
            gloo_timers::callback::Timeout::new(wait_ms, move || {
                if !notifier.owns_chain(generation) {
                    return;
                }
                let now = now_ms();
                notifier.tick_at(now);
                notifier.schedule(now);
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            debug_assert!(self.owns_chain(generation));
            let _ = now;
        }
    }
}
