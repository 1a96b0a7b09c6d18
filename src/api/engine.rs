use tracing::trace;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{PluginEvent, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series store, the window positioner, the view
/// window and the playback queue, and drives the renderer and plugins. It is
/// the only mutator; every change goes through `&mut self`.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds a frame from the current window and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        trace!(
            points = frame.point_count(),
            scroll_offset_px = frame.scroll_offset_px,
            "frame rendered"
        );
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
