use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    datetime_to_unix_millis, decimal_to_f64, deserialize_lenient_value, numeric,
};
use crate::error::{ChartError, ChartResult};

/// One sample of one layer.
///
/// `time` is a unix timestamp in milliseconds. `scaled_y` is owned by the view
/// window and is recomputed whenever the scales change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_value")]
    pub y: Option<f64>,
    #[serde(
        default,
        rename = "tailPoint",
        alias = "tail_point",
        deserialize_with = "deserialize_lenient_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub tail_point: Option<f64>,
    #[serde(
        default,
        rename = "scaledY",
        alias = "scaled_y",
        skip_serializing_if = "Option::is_none"
    )]
    pub scaled_y: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(time: Option<i64>, y: Option<f64>) -> Self {
        Self {
            time,
            y,
            tail_point: None,
            scaled_y: None,
        }
    }

    /// Sample without a timestamp, mostly useful for fixtures.
    #[must_use]
    pub fn value(y: f64) -> Self {
        Self::new(None, Some(y))
    }

    #[must_use]
    pub fn at(time: i64, y: f64) -> Self {
        Self::new(Some(time), Some(y))
    }

    #[must_use]
    pub fn with_tail_point(mut self, tail_point: f64) -> Self {
        self.tail_point = Some(tail_point);
        self
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::at(
            datetime_to_unix_millis(time),
            decimal_to_f64(value, "value")?,
        ))
    }

    /// Numeric `y`, or `None` when the sample counts as absent.
    #[must_use]
    pub fn numeric_y(&self) -> Option<f64> {
        numeric(self.y)
    }

    #[must_use]
    pub fn numeric_tail_point(&self) -> Option<f64> {
        numeric(self.tail_point)
    }
}

/// Ordered sample sequence of one legend.
pub type Layer = Vec<DataPoint>;

/// Returns the common length of `layers`, failing on the first ragged layer.
pub fn common_layer_len(layers: &[Layer]) -> ChartResult<usize> {
    let Some(first) = layers.first() else {
        return Ok(0);
    };
    let expected = first.len();
    for (layer, points) in layers.iter().enumerate().skip(1) {
        if points.len() != expected {
            return Err(ChartError::RaggedLayers {
                layer,
                expected,
                actual: points.len(),
            });
        }
    }
    Ok(expected)
}

/// Outer chart margins in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Host-provided output geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
}

impl ChartGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
            pixel_ratio: default_pixel_ratio(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Width of the plotting area.
    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height of the plotting area.
    #[must_use]
    pub fn inner_height(self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.inner_width() <= 0.0
            || self.inner_height() <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        let margins = self.margins;
        if [margins.top, margins.right, margins.bottom, margins.left]
            .iter()
            .any(|m| !m.is_finite() || *m < 0.0)
        {
            return Err(ChartError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel ratio must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_pixel_ratio() -> f64 {
    1.0
}
