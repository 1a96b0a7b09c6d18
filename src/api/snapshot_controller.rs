use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{
    ChartEngine, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, LegendSnapshot, VersionedSnapshot,
};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let legends = self
            .core
            .config
            .legends
            .iter()
            .enumerate()
            .map(|(layer, legend)| {
                (
                    legend.id.clone(),
                    LegendSnapshot {
                        layer,
                        active: legend.is_active(),
                        side: legend.side(),
                        chart_type: legend.chart_type(),
                    },
                )
            })
            .collect();

        EngineSnapshot {
            geometry: self.core.config.geometry,
            playback_mode: self.core.config.playback_mode,
            view_size: self.core.config.view_size,
            view_start_index: self.view_start_index(),
            total_len: self.total_len(),
            domains: self.domains(),
            time_labels: self.time_data(),
            view_data: self.view_data().to_vec(),
            queued_batches: self.queued_batches(),
            animation_progress: self.animation_progress(),
            legends,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    /// Pretty JSON of the current snapshot tagged with schema version 1.
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let versioned = VersionedSnapshot {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.snapshot(),
        };
        serde_json::to_string_pretty(&versioned).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize versioned snapshot: {e}"))
        })
    }
}

impl EngineSnapshot {
    /// Parses either a bare snapshot or a [`VersionedSnapshot`].
    ///
    /// Versioned payloads with an unknown schema version are rejected.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let versioned: VersionedSnapshot = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))?;
        match versioned.schema_version {
            ENGINE_SNAPSHOT_JSON_SCHEMA_V1 => Ok(versioned.snapshot),
            other => Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {other}"
            ))),
        }
    }
}
