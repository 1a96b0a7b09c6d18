use tracing::{debug, trace};

use crate::core::{Layer, types::common_layer_len};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, CycleStep, PlaybackMode, PluginEvent, TickOutcome};

impl<R: Renderer> ChartEngine<R> {
    /// Queues a batch of new points (one layer per legend).
    ///
    /// The batch is validated here so malformed input never reaches the store.
    /// Returns the number of queued batches.
    pub fn push_data(&mut self, batch: Vec<Layer>) -> ChartResult<usize> {
        let points = self.validate_batch(&batch)?;
        let queued_batches = self.core.runtime.playback.push(batch);
        trace!(points, queued_batches, "data batch queued");
        self.emit_plugin_event(PluginEvent::DataQueued { queued_batches });
        Ok(queued_batches)
    }

    /// Advances playback by one externally scheduled frame.
    ///
    /// A running cycle progresses (and redraws) or ends. Afterwards, if no
    /// cycle is running, the next queued batch is applied.
    pub fn tick(&mut self) -> ChartResult<TickOutcome> {
        let mut outcome = TickOutcome::default();
        match self.core.runtime.playback.advance() {
            CycleStep::Idle => {}
            CycleStep::Progressed(progress) => {
                outcome.progress = progress;
                self.render()?;
                outcome.rendered = true;
            }
            CycleStep::Ended => {
                outcome.cycle_ended = true;
                self.finish_cycle();
            }
        }

        if let Some(batch) = self.core.runtime.playback.next_batch() {
            self.apply_batch(batch)?;
            outcome.batch_applied = true;
            outcome.progress = self.core.runtime.playback.progress();
            self.render()?;
            outcome.rendered = true;
        } else if outcome.cycle_ended {
            self.render()?;
            outcome.rendered = true;
        }

        trace!(
            cycle_ended = outcome.cycle_ended,
            batch_applied = outcome.batch_applied,
            progress = outcome.progress,
            "tick"
        );
        Ok(outcome)
    }

    /// Inserts older history before the first stored point.
    ///
    /// The window stays on the points it showed before. Returns the number of
    /// points added per layer.
    pub fn prepend_history(&mut self, batch: Vec<Layer>) -> ChartResult<usize> {
        self.validate_batch(&batch)?;
        let model = &mut self.core.model;
        let points = model.store.prepend(&batch)?;
        let start = model.positioner.shift_for_prepend(points);
        debug!(
            points,
            total_len = model.store.length(),
            view_start_index = start,
            "history prepended"
        );
        self.emit_plugin_event(PluginEvent::HistoryPrepended { points });
        Ok(points)
    }

    fn validate_batch(&self, batch: &[Layer]) -> ChartResult<usize> {
        let expected = self.core.config.legends.len();
        if batch.len() != expected {
            return Err(ChartError::LayerCountMismatch {
                expected,
                actual: batch.len(),
            });
        }
        common_layer_len(batch)
    }

    fn apply_batch(&mut self, batch: Vec<Layer>) -> ChartResult<()> {
        let core = &mut self.core;
        let points = core.model.store.append(&batch)?;
        let mut rescaled = false;
        if core.config.playback_mode == PlaybackMode::Realtime {
            let update = core
                .model
                .view
                .append(batch, &core.config.window_context())?;
            core.runtime.playback.start_cycle();
            rescaled = update.rescaled;
        }
        trace!(
            points,
            total_len = core.model.store.length(),
            rescaled,
            "batch applied"
        );

        self.emit_plugin_event(PluginEvent::BatchApplied { points });
        if rescaled {
            self.emit_domains_changed();
        }
        Ok(())
    }

    fn finish_cycle(&mut self) {
        let core = &mut self.core;
        let view_size = core.config.view_size;
        if core.model.view.len() > view_size.saturating_add(1) {
            core.model.view.remove(&core.config.window_context());
            core.model
                .positioner
                .move_forward(1, view_size, core.model.store.length());
        }
        let view_start_index = core.model.positioner.start();
        trace!(view_start_index, "scroll cycle ended");
        self.emit_plugin_event(PluginEvent::CycleEnded { view_start_index });
    }
}
