use serde::{Deserialize, Serialize};

use crate::core::legend::{AxisSide, ChartType, Legend, partition_by_side};
use crate::core::types::Layer;
use crate::error::{ChartError, ChartResult};

/// Closed value interval of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Widens `self` to include `other`. Returns `true` when a bound moved.
    pub fn widen(&mut self, other: Domain) -> bool {
        let widened = other.min < self.min || other.max > self.max;
        if widened {
            self.min = self.min.min(other.min);
            self.max = self.max.max(other.max);
        }
        widened
    }

    /// `true` when `value` sits exactly on one of the bounds.
    #[must_use]
    pub fn is_bound(&self, value: f64) -> bool {
        value == self.min || value == self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Domains {
    pub left: Domain,
    pub right: Domain,
}

impl Domains {
    #[must_use]
    pub fn side(&self, side: AxisSide) -> Domain {
        match side {
            AxisSide::Left => self.left,
            AxisSide::Right => self.right,
        }
    }

    fn side_mut(&mut self, side: AxisSide) -> &mut Domain {
        match side {
            AxisSide::Left => &mut self.left,
            AxisSide::Right => &mut self.right,
        }
    }
}

/// Running min/max with `+inf`/`-inf` as the "nothing seen" sentinels.
#[derive(Debug, Clone, Copy)]
struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    fn fold(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn fold_bounds(&mut self, low: f64, high: f64) {
        self.min = self.min.min(low);
        self.max = self.max.max(high);
    }

    /// Replaces untouched sentinels with `0`.
    fn finish(self) -> Domain {
        Domain {
            min: if self.min == f64::INFINITY { 0.0 } else { self.min },
            max: if self.max == f64::NEG_INFINITY {
                0.0
            } else {
                self.max
            },
        }
    }
}

/// Computes and merges per-axis value domains.
pub struct DomainTracker;

impl DomainTracker {
    /// Scans `layers` and returns the left/right domains; sides without data
    /// resolve to `{0, 0}`.
    pub fn find_domains(layers: &[Layer], legends: &[Legend]) -> ChartResult<Domains> {
        if layers.len() != legends.len() {
            return Err(ChartError::LegendCountMismatch {
                legends: legends.len(),
                layers: layers.len(),
            });
        }

        let (left, right) = partition_by_side(legends);
        Ok(Domains {
            left: Self::scan_side(layers, legends, &left),
            right: Self::scan_side(layers, legends, &right),
        })
    }

    /// Widens `existing` with `incoming` on both sides.
    ///
    /// Returns `true` when at least one bound moved, i.e. scales must be rebuilt.
    pub fn update_domains(existing: &mut Domains, incoming: &Domains) -> bool {
        let mut widened = false;
        for side in [AxisSide::Left, AxisSide::Right] {
            widened |= existing.side_mut(side).widen(incoming.side(side));
        }
        widened
    }

    fn scan_side(layers: &[Layer], legends: &[Legend], indices: &[usize]) -> Domain {
        let mut extent = Extent::EMPTY;
        let mut bar_positive_sum = 0.0;
        let mut bar_negative_sum = 0.0;
        let mut has_stacked_bar = false;
        let point_count = indices
            .iter()
            .map(|&layer| layers[layer].len())
            .max()
            .unwrap_or(0);

        for point_index in 0..point_count {
            for &layer in indices {
                let legend = &legends[layer];
                if !legend.is_active() {
                    continue;
                }
                let Some(point) = layers[layer].get(point_index) else {
                    continue;
                };
                let Some(y) = point.numeric_y() else {
                    continue;
                };

                match legend.chart_type() {
                    ChartType::StackedBar => {
                        if y > 0.0 {
                            bar_positive_sum += y;
                        } else {
                            bar_negative_sum += y;
                        }
                        has_stacked_bar = true;
                    }
                    ChartType::Bubble => {
                        if let Some(tail_point) = point.numeric_tail_point() {
                            extent.fold(tail_point);
                        }
                        extent.fold(y);
                    }
                    ChartType::Line | ChartType::NonStackedBar => extent.fold(y),
                }
            }

            if has_stacked_bar {
                extent.fold_bounds(bar_negative_sum, bar_positive_sum);
                bar_positive_sum = 0.0;
                bar_negative_sum = 0.0;
            }
        }

        extent.finish()
    }
}
