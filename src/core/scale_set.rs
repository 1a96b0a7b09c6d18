use serde::{Deserialize, Serialize};

use crate::core::domain::Domains;
use crate::core::legend::AxisSide;
use crate::core::scale::LinearScale;
use crate::core::types::ChartGeometry;
use crate::error::ChartResult;

/// Layout flavor of the chart widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// Time runs horizontally; larger values are drawn higher.
    #[default]
    #[serde(alias = "TIME_SERIES")]
    TimeSeries,
    /// Vertical layout; the value range is not flipped.
    #[serde(alias = "TIME_SERIES_VERTICAL")]
    TimeSeriesVertical,
}

/// The five mappings consumed by renderers and axis painters.
///
/// `left`/`right` map into layout space (axis ticks), `left_y`/`right_y` into
/// render-surface pixels (layout range multiplied by pixel ratio), `bottom`
/// maps window slot indices to horizontal layout pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleSet {
    pub left: LinearScale,
    pub right: LinearScale,
    pub bottom: LinearScale,
    pub left_y: LinearScale,
    pub right_y: LinearScale,
}

impl ScaleSet {
    pub fn build(
        domains: Domains,
        geometry: ChartGeometry,
        orientation: Orientation,
        view_size: usize,
    ) -> ChartResult<Self> {
        let inner_height = geometry.inner_height();
        let range = match orientation {
            Orientation::TimeSeries => (inner_height, 0.0),
            Orientation::TimeSeriesVertical => (0.0, inner_height),
        };
        let render_range = (range.0 * geometry.pixel_ratio, range.1 * geometry.pixel_ratio);
        let left_domain = (domains.left.min, domains.left.max);
        let right_domain = (domains.right.min, domains.right.max);
        let last_slot = view_size.saturating_sub(1) as f64;

        Ok(Self {
            left: LinearScale::new(left_domain, range)?,
            right: LinearScale::new(right_domain, range)?,
            bottom: LinearScale::new((0.0, last_slot), (0.0, geometry.inner_width()))?,
            left_y: LinearScale::new(left_domain, render_range)?,
            right_y: LinearScale::new(right_domain, render_range)?,
        })
    }

    /// Render-surface scale used for points of a legend on `side`.
    #[must_use]
    pub fn render_scale(&self, side: AxisSide) -> LinearScale {
        match side {
            AxisSide::Left => self.left_y,
            AxisSide::Right => self.right_y,
        }
    }

    /// Layout scale used by the axis painter of `side`.
    #[must_use]
    pub fn axis_scale(&self, side: AxisSide) -> LinearScale {
        match side {
            AxisSide::Left => self.left,
            AxisSide::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Orientation, ScaleSet};
    use crate::core::domain::{Domain, Domains};
    use crate::core::types::{ChartGeometry, Margins};

    fn geometry() -> ChartGeometry {
        ChartGeometry::new(200.0, 200.0)
            .with_margins(Margins::uniform(50.0))
            .with_pixel_ratio(2.0)
    }

    fn domains() -> Domains {
        Domains {
            left: Domain::new(-2.0, 6.0),
            right: Domain::new(0.0, 0.0),
        }
    }

    #[test]
    fn horizontal_layout_flips_value_range() {
        let scales = ScaleSet::build(domains(), geometry(), Orientation::TimeSeries, 10)
            .expect("build scales");
        assert_eq!(scales.left.range(), (100.0, 0.0));
        assert_eq!(scales.left_y.range(), (200.0, 0.0));
        assert_eq!(scales.left_y.map(6.0), 0.0);
        assert_eq!(scales.bottom.domain(), (0.0, 9.0));
        assert_eq!(scales.bottom.range(), (0.0, 100.0));
    }

    #[test]
    fn vertical_layout_keeps_value_range() {
        let scales = ScaleSet::build(domains(), geometry(), Orientation::TimeSeriesVertical, 10)
            .expect("build scales");
        assert_eq!(scales.right.range(), (0.0, 100.0));
        assert_eq!(scales.left_y.map(-2.0), 0.0);
        assert_eq!(scales.right_y.map(0.0), 100.0);
    }
}
