use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Result of a forward or backward window move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowMove {
    pub previous_start: usize,
    pub start: usize,
    /// Store range uncovered by the move. It may be empty or shorter than
    /// requested when history runs out.
    pub revealed: Range<usize>,
}

impl WindowMove {
    /// Number of points the left edge travelled.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.start.abs_diff(self.previous_start)
    }
}

/// Left-edge index of the view window inside the series store.
///
/// The index is derived from the store length and the window size; it is
/// recomputed from scratch on init and zoom instead of being trusted
/// incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPositioner {
    view_start_index: usize,
}

impl WindowPositioner {
    #[must_use]
    pub fn new(total_len: usize, view_size: usize) -> Self {
        let mut positioner = Self::default();
        positioner.recompute(total_len, view_size);
        positioner
    }

    #[must_use]
    pub fn start(self) -> usize {
        self.view_start_index
    }

    /// Anchors the window at the newest points: `max(0, total - view_size - 1)`.
    pub fn recompute(&mut self, total_len: usize, view_size: usize) -> usize {
        self.view_start_index = total_len.saturating_sub(view_size.saturating_add(1));
        self.view_start_index
    }

    /// Moves the left edge `num_moves` points forward, clamped to the last point.
    ///
    /// The window keeps one lookahead point beyond `view_size`, so the reveal
    /// starts at `old_start + view_size + 2`.
    pub fn move_forward(
        &mut self,
        num_moves: usize,
        view_size: usize,
        total_len: usize,
    ) -> WindowMove {
        let previous_start = self.view_start_index;
        let last_index = total_len.saturating_sub(1);
        self.view_start_index = previous_start.saturating_add(num_moves).min(last_index);

        let reveal_start = previous_start.saturating_add(view_size).saturating_add(2);
        WindowMove {
            previous_start,
            start: self.view_start_index,
            revealed: reveal_start..reveal_start.saturating_add(num_moves),
        }
    }

    /// Moves the left edge `num_moves` points back, clamped to zero.
    pub fn move_back(&mut self, num_moves: usize) -> WindowMove {
        let previous_start = self.view_start_index;
        self.view_start_index = previous_start.saturating_sub(num_moves);
        WindowMove {
            previous_start,
            start: self.view_start_index,
            revealed: self.view_start_index..previous_start,
        }
    }

    /// Keeps the window on the same points after `added` points were inserted
    /// at the left edge of the store.
    pub fn shift_for_prepend(&mut self, added: usize) -> usize {
        self.view_start_index += added;
        self.view_start_index
    }
}
