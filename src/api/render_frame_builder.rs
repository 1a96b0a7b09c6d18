use crate::render::{RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Render-surface distance between adjacent window slots.
    #[must_use]
    pub fn slot_width_px(&self) -> f64 {
        let config = &self.core.config;
        let gaps = config.view_size.saturating_sub(1).max(1);
        config.geometry.inner_width() * config.geometry.pixel_ratio / gaps as f64
    }

    /// Horizontal shift of the running scroll cycle.
    #[must_use]
    pub fn scroll_offset_px(&self) -> f64 {
        let playback = &self.core.runtime.playback;
        self.slot_width_px() / playback.frames_per_cycle() as f64 * playback.progress() as f64
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let view = &self.core.model.view;
        RenderFrame {
            geometry: self.core.config.geometry,
            orientation: self.core.config.orientation,
            legends: self.core.config.legends.clone(),
            view_data: view.view_data().to_vec(),
            time_labels: view.time_labels().slots(),
            domains: view.domains(),
            scales: *view.scales(),
            slot_width_px: self.slot_width_px(),
            scroll_offset_px: self.scroll_offset_px(),
        }
    }
}
