use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::unix_millis_to_datetime;
use crate::core::types::DataPoint;

/// Edge of the view window that receives or loses points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// Oldest side; prepends insert here.
    Front,
    /// Newest side; appends insert here.
    Back,
}

/// Sparse time-label track parallel to the view window.
///
/// A slot carries a timestamp only every `stride` points. Because the window
/// shifts in both directions, the stride phase is recovered from the run of
/// empty slots next to the insertion edge instead of a running counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabelTrack {
    slots: VecDeque<Option<i64>>,
    stride: usize,
}

impl TimeLabelTrack {
    #[must_use]
    pub fn new(stride: usize) -> Self {
        Self {
            slots: VecDeque::new(),
            stride: stride.max(1),
        }
    }

    /// Rebuilds the track for `points` as if they had been appended one by one.
    pub fn rebuild(&mut self, points: &[DataPoint]) {
        self.slots.clear();
        self.extend(Edge::Back, points);
    }

    /// Inserts one slot per point at `edge`, keeping the points' order.
    pub fn extend(&mut self, edge: Edge, points: &[DataPoint]) {
        match edge {
            Edge::Back => {
                for point in points {
                    self.insert(Edge::Back, point.time);
                }
            }
            Edge::Front => {
                for point in points.iter().rev() {
                    self.insert(Edge::Front, point.time);
                }
            }
        }
    }

    /// Inserts a single slot. Returns `true` when the slot got a label.
    pub fn insert(&mut self, edge: Edge, time: Option<i64>) -> bool {
        let labeled = self.empty_run_at(edge) + 1 >= self.stride;
        let slot = if labeled { time } else { None };
        match edge {
            Edge::Back => self.slots.push_back(slot),
            Edge::Front => self.slots.push_front(slot),
        }
        labeled
    }

    /// Drops up to `count` slots from `edge`; returns how many were dropped.
    pub fn evict(&mut self, edge: Edge, count: usize) -> usize {
        let count = count.min(self.slots.len());
        match edge {
            Edge::Front => {
                self.slots.drain(..count);
            }
            Edge::Back => {
                let keep = self.slots.len() - count;
                self.slots.truncate(keep);
            }
        }
        count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Slot values in window order; `None` marks an unlabeled slot.
    #[must_use]
    pub fn slots(&self) -> Vec<Option<i64>> {
        self.slots.iter().copied().collect()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.slots.get(index).copied().flatten()
    }

    #[must_use]
    pub fn label_datetime(&self, index: usize) -> Option<DateTime<Utc>> {
        self.get(index).and_then(unix_millis_to_datetime)
    }

    fn empty_run_at(&self, edge: Edge) -> usize {
        match edge {
            Edge::Back => self.slots.iter().rev().take_while(|s| s.is_none()).count(),
            Edge::Front => self.slots.iter().take_while(|s| s.is_none()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, TimeLabelTrack};
    use crate::core::types::DataPoint;

    fn timed(range: std::ops::Range<i64>) -> Vec<DataPoint> {
        range.map(|t| DataPoint::at(t, 1.0)).collect()
    }

    #[test]
    fn rebuild_labels_every_stride_th_point() {
        let mut track = TimeLabelTrack::new(3);
        track.rebuild(&timed(0..8));
        assert_eq!(
            track.slots(),
            vec![None, None, Some(2), None, None, Some(5), None, None]
        );
    }

    #[test]
    fn append_continues_the_phase_after_front_eviction() {
        let mut track = TimeLabelTrack::new(3);
        track.rebuild(&timed(0..6));
        assert_eq!(track.evict(Edge::Front, 1), 1);
        track.extend(Edge::Back, &timed(6..9));
        assert_eq!(
            track.slots(),
            vec![None, Some(2), None, None, Some(5), None, None, Some(8)]
        );
    }

    #[test]
    fn prepend_counts_the_run_from_the_left_edge() {
        let mut track = TimeLabelTrack::new(3);
        track.rebuild(&timed(10..16));
        assert_eq!(track.slots()[0..3], [None, None, Some(12)]);
        track.extend(Edge::Front, &timed(7..10));
        assert_eq!(
            track.slots()[0..6],
            [None, None, Some(9), None, None, Some(12)]
        );
    }

    #[test]
    fn stride_of_one_labels_every_slot() {
        let mut track = TimeLabelTrack::new(1);
        track.rebuild(&timed(0..3));
        assert_eq!(track.slots(), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn eviction_is_clamped_to_track_length() {
        let mut track = TimeLabelTrack::new(3);
        track.rebuild(&timed(0..2));
        assert_eq!(track.evict(Edge::Back, 5), 2);
        assert!(track.is_empty());
    }
}
