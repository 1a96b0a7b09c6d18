mod chart_model;
mod chart_runtime;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod playback;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod snapshot_controller;
mod window_controller;

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, PlaybackMode};
pub use engine_snapshot::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, LegendSnapshot, VersionedSnapshot,
};
pub use playback::{CycleStep, PlaybackQueue, TickOutcome};
