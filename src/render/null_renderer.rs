use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch inconsistent windows
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_layer_count: usize,
    pub last_point_count: usize,
    pub last_label_count: usize,
    pub last_scroll_offset_px: f64,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_layer_count = frame.view_data.len();
        self.last_point_count = frame.point_count();
        self.last_label_count = frame.time_labels.iter().flatten().count();
        self.last_scroll_offset_px = frame.scroll_offset_px;
        Ok(())
    }
}
