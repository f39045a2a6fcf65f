//! Round-robin highlight over the pipeline diagram nodes.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use crate::task::{Generation, TaskFlag};

#[derive(Debug, Clone)]
pub struct PipelineCycle {
    node_count: usize,
    next: usize,
    flag: TaskFlag,
}

impl PipelineCycle {
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self { node_count, next: 0, flag: TaskFlag::default() }
    }

    /// `None` when already running or when there are no nodes.
    pub fn start(&mut self) -> Option<Generation> {
        if self.node_count == 0 {
            return None;
        }
        self.flag.start()
    }

    pub fn stop(&mut self) {
        self.flag.stop();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.flag.is_active()
    }

    /// Index of the node to mark active for this tick, or `None` when the
    /// chain for `generation` should end.
    pub fn advance(&mut self, generation: Generation) -> Option<usize> {
        if !self.flag.is_current(generation) || self.node_count == 0 {
            return None;
        }
        let current = self.next;
        self.next = (self.next + 1) % self.node_count;
        Some(current)
    }
}
