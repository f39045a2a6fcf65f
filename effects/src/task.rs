//! Cancellation flag for self-rescheduling timer chains.
//!
//! Every chain iteration carries the generation it was started with and
//! checks [`TaskFlag::is_current`] before doing work or rescheduling. A stop
//! followed by a quick restart bumps the generation, so a timer from the old
//! chain that is still pending ends itself instead of running in parallel
//! with the new one.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

pub type Generation = u64;

#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFlag {
    active: bool,
    generation: Generation,
}

impl TaskFlag {
    /// Activate the task. Returns the generation for the new chain, or
    /// `None` when a chain is already running.
    pub fn start(&mut self) -> Option<Generation> {
        if self.active {
            return None;
        }
        self.active = true;
        self.generation += 1;
        Some(self.generation)
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.active && self.generation == generation
    }
}
