//! chart-stream: streaming multi-layer time-series view window.
//!
//! The crate keeps an ever-growing layered history, materializes a bounded
//! visible window over it, tracks per-axis value domains and scales, and
//! paces incoming batches through a tick-driven scroll animation. Drawing is
//! delegated to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, PlaybackMode, TickOutcome};
pub use error::{ChartError, ChartResult};
