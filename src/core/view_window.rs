#[cfg(feature = "parallel-rescale")]
use rayon::prelude::*;
use tracing::trace;

use crate::core::domain::{DomainTracker, Domains};
use crate::core::legend::Legend;
use crate::core::scale::LinearScale;
use crate::core::scale_set::{Orientation, ScaleSet};
use crate::core::time_labels::{Edge, TimeLabelTrack};
use crate::core::types::{ChartGeometry, DataPoint, Layer, common_layer_len};
use crate::error::{ChartError, ChartResult};

/// Read-only chart settings shared by the window operations.
#[derive(Debug, Clone, Copy)]
pub struct WindowContext<'a> {
    pub legends: &'a [Legend],
    pub geometry: ChartGeometry,
    pub orientation: Orientation,
    pub view_size: usize,
    pub time_label_stride: usize,
}

impl WindowContext<'_> {
    fn build_scales(&self, domains: Domains) -> ChartResult<ScaleSet> {
        ScaleSet::build(domains, self.geometry, self.orientation, self.view_size)
    }
}

/// Outcome of one append/prepend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowUpdate {
    pub inserted: usize,
    /// Scales were rebuilt and every visible point rescaled.
    pub rescaled: bool,
}

/// Materialized visible slice with its labels, domains and scales.
///
/// Domains only widen through incremental updates; they are recomputed from
/// scratch only by [`ViewWindow::init`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewWindow {
    view_data: Vec<Layer>,
    time_labels: TimeLabelTrack,
    domains: Domains,
    scales: ScaleSet,
    need_scale_update: bool,
}

impl ViewWindow {
    pub fn new(slice: Vec<Layer>, ctx: &WindowContext<'_>) -> ChartResult<Self> {
        let domains = DomainTracker::find_domains(&slice, ctx.legends)?;
        common_layer_len(&slice)?;
        let scales = ctx.build_scales(domains)?;
        let mut window = Self {
            view_data: slice,
            time_labels: TimeLabelTrack::new(ctx.time_label_stride),
            domains,
            scales,
            need_scale_update: false,
        };
        window.rebuild_time_labels();
        window.scale_all(ctx.legends);
        Ok(window)
    }

    /// Replaces the window content and rebuilds domains, labels and scales.
    pub fn init(&mut self, slice: Vec<Layer>, ctx: &WindowContext<'_>) -> ChartResult<()> {
        *self = Self::new(slice, ctx)?;
        trace!(
            len = self.len(),
            left_min = self.domains.left.min,
            left_max = self.domains.left.max,
            right_min = self.domains.right.min,
            right_max = self.domains.right.max,
            "view window init"
        );
        Ok(())
    }

    /// Adds `batch` at the newest edge.
    pub fn append(&mut self, batch: Vec<Layer>, ctx: &WindowContext<'_>) -> ChartResult<WindowUpdate> {
        self.update(batch, Edge::Back, ctx)
    }

    /// Adds `batch` at the oldest edge.
    pub fn prepend(&mut self, batch: Vec<Layer>, ctx: &WindowContext<'_>) -> ChartResult<WindowUpdate> {
        self.update(batch, Edge::Front, ctx)
    }

    /// Evicts the oldest point of every layer and the oldest label slot.
    ///
    /// Called once per finished scroll cycle.
    pub fn remove(&mut self, ctx: &WindowContext<'_>) -> usize {
        self.evict(Edge::Front, 1, ctx)
    }

    /// Drops up to `count` points from `edge`.
    ///
    /// Evicting a point whose value equals its side's current min or max flags
    /// the scales for a rebuild on the next update. Domains are never narrowed.
    pub fn evict(&mut self, edge: Edge, count: usize, ctx: &WindowContext<'_>) -> usize {
        let count = count.min(self.len());
        if count == 0 {
            return 0;
        }

        let domains = self.domains;
        let mut hit_bound = false;
        for (layer, legend) in self.view_data.iter_mut().zip(ctx.legends) {
            let domain = domains.side(legend.side());
            let range = match edge {
                Edge::Front => 0..count,
                Edge::Back => layer.len() - count..layer.len(),
            };
            for point in layer.drain(range) {
                if point.numeric_y().is_some_and(|y| domain.is_bound(y)) {
                    hit_bound = true;
                }
            }
        }
        self.time_labels.evict(edge, count);

        if hit_bound {
            self.need_scale_update = true;
        }
        trace!(?edge, count, hit_bound, len = self.len(), "view window evict");
        count
    }

    /// Rebuilds scales for the current domains (e.g. after a geometry change)
    /// and rescales every visible point.
    pub fn rescale(&mut self, ctx: &WindowContext<'_>) -> ChartResult<()> {
        self.scales = ctx.build_scales(self.domains)?;
        self.scale_all(ctx.legends);
        self.need_scale_update = false;
        Ok(())
    }

    #[must_use]
    pub fn view_data(&self) -> &[Layer] {
        &self.view_data
    }

    #[must_use]
    pub fn time_labels(&self) -> &TimeLabelTrack {
        &self.time_labels
    }

    #[must_use]
    pub fn domains(&self) -> Domains {
        self.domains
    }

    #[must_use]
    pub fn scales(&self) -> &ScaleSet {
        &self.scales
    }

    #[must_use]
    pub fn needs_scale_update(&self) -> bool {
        self.need_scale_update
    }

    /// Points per layer currently materialized.
    #[must_use]
    pub fn len(&self) -> usize {
        self.view_data.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update(
        &mut self,
        mut batch: Vec<Layer>,
        edge: Edge,
        ctx: &WindowContext<'_>,
    ) -> ChartResult<WindowUpdate> {
        if batch.len() != self.view_data.len() {
            return Err(ChartError::LayerCountMismatch {
                expected: self.view_data.len(),
                actual: batch.len(),
            });
        }
        let inserted = common_layer_len(&batch)?;
        let incoming = DomainTracker::find_domains(&batch, ctx.legends)?;

        if let Some(reference) = batch.first() {
            self.time_labels.extend(edge, reference);
        }
        if DomainTracker::update_domains(&mut self.domains, &incoming) {
            self.need_scale_update = true;
        }

        let rescaled = self.need_scale_update;
        if rescaled {
            self.scales = ctx.build_scales(self.domains)?;
            self.merge(batch, edge);
            self.scale_all(ctx.legends);
            self.need_scale_update = false;
        } else {
            for (layer, legend) in batch.iter_mut().zip(ctx.legends) {
                scale_points(layer, self.scales.render_scale(legend.side()));
            }
            self.merge(batch, edge);
        }

        trace!(?edge, inserted, rescaled, len = self.len(), "view window update");
        Ok(WindowUpdate { inserted, rescaled })
    }

    fn merge(&mut self, batch: Vec<Layer>, edge: Edge) {
        for (layer, incoming) in self.view_data.iter_mut().zip(batch) {
            match edge {
                Edge::Back => layer.extend(incoming),
                Edge::Front => {
                    layer.splice(0..0, incoming);
                }
            }
        }
    }

    fn rebuild_time_labels(&mut self) {
        match self.view_data.first() {
            Some(reference) => self.time_labels.rebuild(reference),
            None => self.time_labels.rebuild(&[]),
        }
    }

    fn scale_all(&mut self, legends: &[Legend]) {
        let scales = self.scales;

        #[cfg(feature = "parallel-rescale")]
        {
            self.view_data
                .par_iter_mut()
                .zip(legends.par_iter())
                .for_each(|(layer, legend)| {
                    scale_points(layer, scales.render_scale(legend.side()));
                });
        }

        #[cfg(not(feature = "parallel-rescale"))]
        {
            for (layer, legend) in self.view_data.iter_mut().zip(legends) {
                scale_points(layer, scales.render_scale(legend.side()));
            }
        }
    }
}

fn scale_points(points: &mut [DataPoint], scale: LinearScale) {
    for point in points {
        point.scaled_y = point.numeric_y().map(|y| scale.map(y));
    }
}
