use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisSide, ChartGeometry, ChartType, Domains, Layer};

use super::PlaybackMode;

/// Per-legend entry of an [`EngineSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendSnapshot {
    pub layer: usize,
    pub active: bool,
    pub side: AxisSide,
    pub chart_type: ChartType,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub geometry: ChartGeometry,
    pub playback_mode: PlaybackMode,
    pub view_size: usize,
    pub view_start_index: usize,
    pub total_len: usize,
    pub domains: Domains,
    pub time_labels: Vec<Option<i64>>,
    pub view_data: Vec<Layer>,
    pub queued_batches: usize,
    pub animation_progress: usize,
    /// Keyed by legend id, in legend order.
    pub legends: IndexMap<String, LegendSnapshot>,
}

/// Version tag written into [`VersionedSnapshot`] payloads.
pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Snapshot wrapped with its schema version for files that outlive a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedSnapshot {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}
