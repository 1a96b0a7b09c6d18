use crate::extensions::ChartPlugin;

use super::PlaybackQueue;

/// Runtime orchestration state grouped separately from the data model.
pub(super) struct ChartRuntimeState {
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) playback: PlaybackQueue,
}

impl ChartRuntimeState {
    #[must_use]
    pub(super) fn new(frames_per_cycle: usize) -> Self {
        Self {
            plugins: Vec::new(),
            playback: PlaybackQueue::new(frames_per_cycle),
        }
    }
}
