use crate::core::{ChartGeometry, Domains, Layer, Legend, Orientation, ScaleSet};
use crate::core::types::common_layer_len;
use crate::error::{ChartError, ChartResult};

/// Backend-agnostic snapshot of one draw pass.
///
/// Point coordinates are already scaled (`DataPoint::scaled_y`). Horizontal
/// placement is `slot_x`, which folds in the scroll offset of the running
/// animation cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub geometry: ChartGeometry,
    pub orientation: Orientation,
    pub legends: Vec<Legend>,
    pub view_data: Vec<Layer>,
    pub time_labels: Vec<Option<i64>>,
    pub domains: Domains,
    pub scales: ScaleSet,
    /// Render-surface distance between two adjacent slots.
    pub slot_width_px: f64,
    /// Leftward shift applied to every slot during the current cycle.
    pub scroll_offset_px: f64,
}

impl RenderFrame {
    /// Render-surface x of slot `index`.
    #[must_use]
    pub fn slot_x(&self, index: usize) -> f64 {
        index as f64 * self.slot_width_px - self.scroll_offset_px
    }

    /// Points per layer in this frame.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.view_data.first().map_or(0, Vec::len)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate()?;

        if self.legends.len() != self.view_data.len() {
            return Err(ChartError::LegendCountMismatch {
                legends: self.legends.len(),
                layers: self.view_data.len(),
            });
        }
        let points = common_layer_len(&self.view_data)?;
        if self.time_labels.len() != points {
            return Err(ChartError::InvalidData(format!(
                "time label track has {} slots for {points} points",
                self.time_labels.len()
            )));
        }
        if !self.slot_width_px.is_finite() || self.slot_width_px < 0.0 {
            return Err(ChartError::InvalidData(
                "slot width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.scroll_offset_px.is_finite() {
            return Err(ChartError::InvalidData(
                "scroll offset must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}
