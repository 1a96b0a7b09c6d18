use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::Layer;

/// Result of advancing the animation cycle by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStep {
    /// No cycle was running.
    Idle,
    /// The running cycle advanced to this progress value.
    Progressed(usize),
    /// The running cycle reached `frames_per_cycle` and stopped.
    Ended,
}

/// What one `ChartEngine::tick` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickOutcome {
    pub cycle_ended: bool,
    pub batch_applied: bool,
    /// Cycle progress after the tick; `0` when no cycle is running.
    pub progress: usize,
    pub rendered: bool,
}

/// FIFO of pending batches plus the scroll animation counter.
///
/// A batch is released only while no cycle is running, so at most one batch
/// is being animated at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackQueue {
    batches: VecDeque<Vec<Layer>>,
    active: bool,
    progress: usize,
    frames_per_cycle: usize,
}

impl PlaybackQueue {
    #[must_use]
    pub fn new(frames_per_cycle: usize) -> Self {
        Self {
            batches: VecDeque::new(),
            active: false,
            progress: 0,
            frames_per_cycle: frames_per_cycle.max(1),
        }
    }

    pub fn push(&mut self, batch: Vec<Layer>) -> usize {
        self.batches.push_back(batch);
        self.batches.len()
    }

    /// Advances a running cycle; ends it at `frames_per_cycle`.
    pub fn advance(&mut self) -> CycleStep {
        if !self.active {
            return CycleStep::Idle;
        }
        self.progress += 1;
        if self.progress >= self.frames_per_cycle {
            self.progress = 0;
            self.active = false;
            return CycleStep::Ended;
        }
        CycleStep::Progressed(self.progress)
    }

    /// Releases the oldest batch while no cycle is running.
    pub fn next_batch(&mut self) -> Option<Vec<Layer>> {
        if self.active {
            return None;
        }
        self.batches.pop_front()
    }

    pub fn start_cycle(&mut self) {
        self.active = true;
        self.progress = 0;
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }

    #[must_use]
    pub fn frames_per_cycle(&self) -> usize {
        self.frames_per_cycle
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
