use serde::{Deserialize, Serialize};

use crate::core::{Domain, Domains};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub view_size: usize,
    pub view_start_index: usize,
    pub total_len: usize,
    pub visible_len: usize,
    pub domains: Domains,
    pub queued_batches: usize,
    pub animating: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataQueued { queued_batches: usize },
    BatchApplied { points: usize },
    HistoryPrepended { points: usize },
    CycleEnded { view_start_index: usize },
    DomainsChanged { left: Domain, right: Domain },
    WindowMoved { start: usize },
    Zoomed { view_size: usize },
    GeometryChanged,
    LegendToggled { layer: usize, active: bool },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read engine context without mutating core
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
