//! Observer hooks for host-side extensions.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
