use tracing::debug;

use crate::core::{
    ChartGeometry, Domains, Layer, Legend, ScaleSet, TimeLabelTrack, WindowPositioner,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, PlaybackMode, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.core.config
    }

    #[must_use]
    pub fn legends(&self) -> &[Legend] {
        &self.core.config.legends
    }

    /// Layer index of the legend with `id`.
    #[must_use]
    pub fn legend_layer(&self, id: &str) -> Option<usize> {
        self.core.model.legend_index.get(id).copied()
    }

    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        self.core.config.geometry
    }

    #[must_use]
    pub fn playback_mode(&self) -> PlaybackMode {
        self.core.config.playback_mode
    }

    /// Visible slice, one layer per legend, with `scaled_y` filled in.
    #[must_use]
    pub fn view_data(&self) -> &[Layer] {
        self.core.model.view.view_data()
    }

    /// Time label slots parallel to [`ChartEngine::view_data`].
    #[must_use]
    pub fn time_data(&self) -> Vec<Option<i64>> {
        self.core.model.view.time_labels().slots()
    }

    #[must_use]
    pub fn time_labels(&self) -> &TimeLabelTrack {
        self.core.model.view.time_labels()
    }

    #[must_use]
    pub fn scales(&self) -> &ScaleSet {
        self.core.model.view.scales()
    }

    #[must_use]
    pub fn domains(&self) -> Domains {
        self.core.model.view.domains()
    }

    #[must_use]
    pub fn needs_scale_update(&self) -> bool {
        self.core.model.view.needs_scale_update()
    }

    #[must_use]
    pub fn positioner(&self) -> WindowPositioner {
        self.core.model.positioner
    }

    #[must_use]
    pub fn view_start_index(&self) -> usize {
        self.core.model.positioner.start()
    }

    #[must_use]
    pub fn view_size(&self) -> usize {
        self.core.config.view_size
    }

    /// Points per layer in the whole history.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.core.model.store.length()
    }

    #[must_use]
    pub fn history(&self) -> &[Layer] {
        self.core.model.store.layers()
    }

    #[must_use]
    pub fn queued_batches(&self) -> usize {
        self.core.runtime.playback.len()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.core.runtime.playback.is_animating()
    }

    #[must_use]
    pub fn animation_progress(&self) -> usize {
        self.core.runtime.playback.progress()
    }

    /// Updates output geometry; scales are rebuilt, domains are kept.
    pub fn set_geometry(&mut self, geometry: ChartGeometry) -> ChartResult<()> {
        let geometry = geometry.validate()?;
        self.core.config.geometry = geometry;
        let core = &mut self.core;
        core.model.view.rescale(&core.config.window_context())?;
        debug!(
            width = geometry.width,
            height = geometry.height,
            pixel_ratio = geometry.pixel_ratio,
            "geometry updated"
        );
        self.emit_plugin_event(PluginEvent::GeometryChanged);
        Ok(())
    }

    /// Shows or hides a legend and recomputes the window from scratch.
    ///
    /// Returns `false` when the legend already had the requested state.
    pub fn set_legend_active(&mut self, id: &str, active: bool) -> ChartResult<bool> {
        let layer = self
            .legend_layer(id)
            .ok_or_else(|| ChartError::UnknownLegend(id.to_owned()))?;
        let legend = self
            .core
            .config
            .legends
            .get_mut(layer)
            .ok_or_else(|| ChartError::UnknownLegend(id.to_owned()))?;
        if legend.parameters.is_active == active {
            return Ok(false);
        }
        legend.parameters.is_active = active;

        let start = self.core.model.positioner.start();
        let len = self
            .core
            .model
            .view
            .len()
            .max(self.core.config.view_size.saturating_add(1));
        self.reload_view(start, len)?;

        debug!(legend = id, layer, active, "legend toggled");
        self.emit_plugin_event(PluginEvent::LegendToggled { layer, active });
        self.emit_domains_changed();
        self.render()?;
        Ok(true)
    }
}
