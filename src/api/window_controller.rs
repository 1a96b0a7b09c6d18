use tracing::{debug, warn};

use crate::core::{Edge, WindowMove};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, PlaybackMode, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    /// Moves the window `num_moves` points towards newer history.
    ///
    /// Only available in paging mode. The uncovered points are appended from
    /// the store and the same number of points is evicted from the front.
    pub fn page_forward(&mut self, num_moves: usize) -> ChartResult<WindowMove> {
        self.require_paging("page_forward")?;

        let core = &mut self.core;
        let view_size = core.config.view_size;
        let total_len = core.model.store.length();
        let view_end = core.model.positioner.start() + core.model.view.len();
        let moved = core
            .model
            .positioner
            .move_forward(num_moves, view_size, total_len);
        let target_end = moved
            .start
            .saturating_add(view_size)
            .saturating_add(1)
            .min(total_len);

        let ctx = core.config.window_context();
        let mut rescaled = false;
        if target_end > view_end {
            let batch = core.model.store.slice_range(view_end, target_end);
            rescaled = core.model.view.append(batch, &ctx)?.rescaled;
        }
        core.model.view.evict(Edge::Front, moved.distance(), &ctx);

        debug!(
            num_moves,
            previous_start = moved.previous_start,
            start = moved.start,
            rescaled,
            "page forward"
        );
        self.finish_window_move(moved.start, rescaled)?;
        Ok(moved)
    }

    /// Moves the window `num_moves` points towards older history.
    ///
    /// Only available in paging mode. Uncovered points are prepended and the
    /// window is trimmed back to `view_size + 1` points.
    pub fn page_back(&mut self, num_moves: usize) -> ChartResult<WindowMove> {
        self.require_paging("page_back")?;

        let core = &mut self.core;
        let view_size = core.config.view_size;
        let total_len = core.model.store.length();
        let moved = core.model.positioner.move_back(num_moves);

        let ctx = core.config.window_context();
        let mut rescaled = false;
        if !moved.revealed.is_empty() {
            let batch = core
                .model
                .store
                .slice_range(moved.revealed.start, moved.revealed.end);
            rescaled = core.model.view.prepend(batch, &ctx)?.rescaled;
        }
        let keep = view_size.saturating_add(1).min(total_len.saturating_sub(moved.start));
        let excess = core.model.view.len().saturating_sub(keep);
        core.model.view.evict(Edge::Back, excess, &ctx);

        debug!(
            num_moves,
            previous_start = moved.previous_start,
            start = moved.start,
            rescaled,
            "page back"
        );
        self.finish_window_move(moved.start, rescaled)?;
        Ok(moved)
    }

    /// Changes the view size by `delta` slots and re-anchors the window at the
    /// newest points.
    ///
    /// Returns `false` without touching anything when the result would drop
    /// below `min_view_size`.
    pub fn zoom(&mut self, delta: isize) -> ChartResult<bool> {
        let current = self.core.config.view_size;
        let min_view_size = self.core.config.min_view_size;
        let Some(requested) = current.checked_add_signed(delta) else {
            warn!(current, delta, "zoom rejected: view size underflow");
            return Ok(false);
        };
        if delta == 0 {
            return Ok(false);
        }
        if requested < min_view_size {
            warn!(
                current,
                requested, min_view_size, "zoom rejected below minimum view size"
            );
            return Ok(false);
        }

        self.core.config.view_size = requested;
        let total_len = self.core.model.store.length();
        let start = self
            .core
            .model
            .positioner
            .recompute(total_len, requested);
        self.reload_view(start, requested.saturating_add(1))?;

        debug!(
            previous = current,
            view_size = requested,
            view_start_index = start,
            "zoom applied"
        );
        self.emit_plugin_event(PluginEvent::Zoomed {
            view_size: requested,
        });
        self.emit_domains_changed();
        self.render()?;
        Ok(true)
    }

    /// Shows `delta` fewer slots.
    pub fn zoom_in(&mut self, delta: usize) -> ChartResult<bool> {
        self.zoom(-isize::try_from(delta).unwrap_or(isize::MAX))
    }

    /// Shows `delta` more slots.
    pub fn zoom_out(&mut self, delta: usize) -> ChartResult<bool> {
        self.zoom(isize::try_from(delta).unwrap_or(isize::MAX))
    }

    /// Re-materializes `[start, start + len)` and recomputes domains from scratch.
    pub(super) fn reload_view(&mut self, start: usize, len: usize) -> ChartResult<()> {
        let core = &mut self.core;
        let slice = core.model.store.slice_range(start, start.saturating_add(len));
        core.model.view.init(slice, &core.config.window_context())
    }

    fn require_paging(&self, operation: &'static str) -> ChartResult<()> {
        let mode = self.core.config.playback_mode;
        if mode != PlaybackMode::Paging {
            warn!(operation, mode = mode.as_str(), "paging operation rejected");
            return Err(ChartError::ModeMismatch {
                operation,
                mode: mode.as_str(),
            });
        }
        Ok(())
    }

    fn finish_window_move(&mut self, start: usize, rescaled: bool) -> ChartResult<()> {
        self.emit_plugin_event(PluginEvent::WindowMoved { start });
        if rescaled {
            self.emit_domains_changed();
        }
        self.render()
    }
}
