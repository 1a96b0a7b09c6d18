use indexmap::IndexMap;

use crate::core::{RawSeriesStore, ViewWindow, WindowPositioner};

/// Data-side engine state: history, window position and the materialized view.
pub(super) struct ChartModel {
    pub(super) store: RawSeriesStore,
    pub(super) positioner: WindowPositioner,
    pub(super) view: ViewWindow,
    /// Legend id to layer index, in legend order.
    pub(super) legend_index: IndexMap<String, usize>,
}
