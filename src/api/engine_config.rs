use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, Legend, Orientation, WindowContext};
use crate::error::{ChartError, ChartResult};

/// How dequeued batches reach the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlaybackMode {
    /// Every batch is appended to the window and scrolled in over one cycle.
    #[default]
    Realtime,
    /// Batches only grow the history; the host moves the window explicitly.
    Paging,
}

impl PlaybackMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Realtime => "realtime",
            Self::Paging => "paging",
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. `view_size` is also the live
/// value: zooming updates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub geometry: ChartGeometry,
    pub legends: Vec<Legend>,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_view_size")]
    pub view_size: usize,
    #[serde(default = "default_min_view_size")]
    pub min_view_size: usize,
    #[serde(default = "default_time_label_stride")]
    pub time_label_stride: usize,
    #[serde(default = "default_frames_per_cycle")]
    pub frames_per_cycle: usize,
    #[serde(default)]
    pub playback_mode: PlaybackMode,
}

impl ChartEngineConfig {
    /// Creates a config with default window, label and playback settings.
    #[must_use]
    pub fn new(geometry: ChartGeometry, legends: Vec<Legend>) -> Self {
        Self {
            geometry,
            legends,
            orientation: Orientation::default(),
            view_size: default_view_size(),
            min_view_size: default_min_view_size(),
            time_label_stride: default_time_label_stride(),
            frames_per_cycle: default_frames_per_cycle(),
            playback_mode: PlaybackMode::default(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the number of slots spanned by the horizontal scale.
    #[must_use]
    pub fn with_view_size(mut self, view_size: usize) -> Self {
        self.view_size = view_size;
        self
    }

    /// Sets the zoom floor; zooming below it is rejected.
    #[must_use]
    pub fn with_min_view_size(mut self, min_view_size: usize) -> Self {
        self.min_view_size = min_view_size;
        self
    }

    #[must_use]
    pub fn with_time_label_stride(mut self, stride: usize) -> Self {
        self.time_label_stride = stride;
        self
    }

    /// Sets how many ticks one scroll cycle lasts.
    #[must_use]
    pub fn with_frames_per_cycle(mut self, frames: usize) -> Self {
        self.frames_per_cycle = frames;
        self
    }

    #[must_use]
    pub fn with_playback_mode(mut self, mode: PlaybackMode) -> Self {
        self.playback_mode = mode;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate()?;
        if self.legends.is_empty() {
            return Err(ChartError::InvalidData(
                "at least one legend is required".to_owned(),
            ));
        }
        let mut seen = HashSet::with_capacity(self.legends.len());
        for legend in &self.legends {
            if !seen.insert(legend.id.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate legend id `{}`",
                    legend.id
                )));
            }
        }
        if self.min_view_size < 2 {
            return Err(ChartError::InvalidData(
                "min view size must be >= 2".to_owned(),
            ));
        }
        if self.view_size < self.min_view_size {
            return Err(ChartError::InvalidData(format!(
                "view size {} is below the minimum of {}",
                self.view_size, self.min_view_size
            )));
        }
        if self.time_label_stride == 0 {
            return Err(ChartError::InvalidData(
                "time label stride must be >= 1".to_owned(),
            ));
        }
        if self.frames_per_cycle == 0 {
            return Err(ChartError::InvalidData(
                "frames per cycle must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Borrowed settings handed to the view window.
    #[must_use]
    pub fn window_context(&self) -> WindowContext<'_> {
        WindowContext {
            legends: &self.legends,
            geometry: self.geometry,
            orientation: self.orientation,
            view_size: self.view_size,
            time_label_stride: self.time_label_stride,
        }
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_view_size() -> usize {
    10
}

fn default_min_view_size() -> usize {
    10
}

fn default_time_label_stride() -> usize {
    3
}

fn default_frames_per_cycle() -> usize {
    20
}
