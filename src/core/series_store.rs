use std::ops::Range;

use tracing::trace;

use crate::core::types::{Layer, common_layer_len};
use crate::error::{ChartError, ChartResult};

/// Owner of the full, ever-growing per-layer history.
///
/// Every layer always holds the same number of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSeriesStore {
    layers: Vec<Layer>,
}

impl RawSeriesStore {
    pub fn new(layers: Vec<Layer>) -> ChartResult<Self> {
        if layers.is_empty() {
            return Err(ChartError::InvalidData(
                "series store needs at least one layer".to_owned(),
            ));
        }
        common_layer_len(&layers)?;
        Ok(Self { layers })
    }

    /// Empty store with `layer_count` layers.
    #[must_use]
    pub fn with_layer_count(layer_count: usize) -> Self {
        Self {
            layers: vec![Vec::new(); layer_count],
        }
    }

    /// Concatenates `batch` onto the right edge of every layer.
    pub fn append(&mut self, batch: &[Layer]) -> ChartResult<usize> {
        let added = self.validate_batch(batch)?;
        for (layer, incoming) in self.layers.iter_mut().zip(batch) {
            layer.extend_from_slice(incoming);
        }
        trace!(added, total = self.length(), "store append");
        Ok(added)
    }

    /// Inserts older history at the left edge of every layer.
    pub fn prepend(&mut self, batch: &[Layer]) -> ChartResult<usize> {
        let added = self.validate_batch(batch)?;
        for (layer, incoming) in self.layers.iter_mut().zip(batch) {
            layer.splice(0..0, incoming.iter().copied());
        }
        trace!(added, total = self.length(), "store prepend");
        Ok(added)
    }

    /// Per-layer copy of `[from, to)`, clamped to the stored points.
    #[must_use]
    pub fn slice_range(&self, from: usize, to: usize) -> Vec<Layer> {
        let clamped = self.clamp(from..to);
        self.layers
            .iter()
            .map(|layer| layer[clamped.clone()].to_vec())
            .collect()
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.layers.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let len = self.length();
        let end = range.end.min(len);
        let start = range.start.min(end);
        start..end
    }

    fn validate_batch(&self, batch: &[Layer]) -> ChartResult<usize> {
        if batch.len() != self.layers.len() {
            return Err(ChartError::LayerCountMismatch {
                expected: self.layers.len(),
                actual: batch.len(),
            });
        }
        common_layer_len(batch)
    }
}
