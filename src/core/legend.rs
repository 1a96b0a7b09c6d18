use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Y axis a legend is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

/// Plot type of one legend; drives domain aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartType {
    #[default]
    #[serde(alias = "line")]
    Line,
    /// Bars stacked on top of each other; the domain bounds the stacked total.
    #[serde(alias = "bar")]
    StackedBar,
    #[serde(alias = "bar2")]
    NonStackedBar,
    /// Bubbles carry an optional `tail_point` that also bounds the domain.
    #[serde(alias = "bubble")]
    Bubble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendParameters {
    #[serde(rename = "isActive", alias = "is_active")]
    pub is_active: bool,
    #[serde(rename = "yAxisSide", alias = "y_axis_side")]
    pub y_axis_side: AxisSide,
    #[serde(rename = "chartType", alias = "chart_type", default)]
    pub chart_type: ChartType,
}

/// Descriptor of one data layer. Legends and layers share indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub id: String,
    pub parameters: LegendParameters,
}

impl Legend {
    #[must_use]
    pub fn new(id: impl Into<String>, y_axis_side: AxisSide, chart_type: ChartType) -> Self {
        Self {
            id: id.into(),
            parameters: LegendParameters {
                is_active: true,
                y_axis_side,
                chart_type,
            },
        }
    }

    #[must_use]
    pub fn line(id: impl Into<String>, y_axis_side: AxisSide) -> Self {
        Self::new(id, y_axis_side, ChartType::Line)
    }

    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.parameters.is_active = false;
        self
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.parameters.is_active
    }

    #[must_use]
    pub fn side(&self) -> AxisSide {
        self.parameters.y_axis_side
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.parameters.chart_type
    }
}

/// Layer indices grouped by axis side.
pub type SideIndices = SmallVec<[usize; 8]>;

/// Splits legend indices into left and right axis groups, preserving order.
#[must_use]
pub fn partition_by_side(legends: &[Legend]) -> (SideIndices, SideIndices) {
    let mut left = SideIndices::new();
    let mut right = SideIndices::new();
    for (index, legend) in legends.iter().enumerate() {
        match legend.side() {
            AxisSide::Left => left.push(index),
            AxisSide::Right => right.push(index),
        }
    }
    (left, right)
}
