//! Readiness gate deferring work until one-time runtime initialization.

use std::collections::VecDeque;

use tracing::debug;

/// Whether the one-time initialization of the templating/rendering runtime
/// has resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    #[default]
    NotReady,
    Ready,
}

/// FIFO queue of deferred tasks drained exactly once on readiness.
///
/// Tasks submitted before readiness are queued in submission order, never
/// dropped and never coalesced; tasks submitted after readiness pass
/// through for immediate execution. There is no cancellation: a queued task
/// cannot be superseded by a later one.
#[derive(Debug)]
pub struct InitGate<T> {
    state: ReadyState,
    queue: VecDeque<T>,
}

impl<T> Default for InitGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InitGate<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ReadyState::NotReady,
            queue: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> ReadyState {
        self.state
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, ReadyState::Ready)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Hands the task back for immediate execution when ready, queues it
    /// otherwise.
    pub fn submit(&mut self, task: T) -> Option<T> {
        match self.state {
            ReadyState::Ready => Some(task),
            ReadyState::NotReady => {
                self.queue.push_back(task);
                debug!(
                    pending = self.queue.len(),
                    "queued task until runtime initialization resolves"
                );
                None
            }
        }
    }

    /// Marks the gate ready and returns every queued task in submission
    /// order.
    pub fn mark_ready(&mut self) -> Vec<T> {
        self.state = ReadyState::Ready;
        let drained: Vec<T> = self.queue.drain(..).collect();
        if !drained.is_empty() {
            debug!(
                count = drained.len(),
                "draining deferred tasks after initialization"
            );
        }
        drained
    }
}
