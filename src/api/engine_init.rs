use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Layer, RawSeriesStore, ViewWindow, WindowPositioner};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{
    ChartEngine, ChartEngineConfig, chart_model::ChartModel, chart_runtime::ChartRuntimeState,
    engine_core::EngineCore,
};

impl<R: Renderer> ChartEngine<R> {
    /// Creates a fully initialized engine over `initial` history.
    ///
    /// `initial` must hold one layer per legend, all of the same length. The
    /// window is anchored at the newest points.
    pub fn new(renderer: R, config: ChartEngineConfig, initial: Vec<Layer>) -> ChartResult<Self> {
        config.validate()?;
        if initial.len() != config.legends.len() {
            return Err(ChartError::LegendCountMismatch {
                legends: config.legends.len(),
                layers: initial.len(),
            });
        }

        let store = RawSeriesStore::new(initial)?;
        let positioner = WindowPositioner::new(store.length(), config.view_size);
        let start = positioner.start();
        let end = start.saturating_add(config.view_size).saturating_add(1);
        let slice = store.slice_range(start, end);
        let view = ViewWindow::new(slice, &config.window_context())?;
        let legend_index: IndexMap<String, usize> = config
            .legends
            .iter()
            .enumerate()
            .map(|(layer, legend)| (legend.id.clone(), layer))
            .collect();
        let runtime = ChartRuntimeState::new(config.frames_per_cycle);

        debug!(
            layers = store.layer_count(),
            total_len = store.length(),
            view_size = config.view_size,
            view_start_index = start,
            mode = config.playback_mode.as_str(),
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                config,
                model: ChartModel {
                    store,
                    positioner,
                    view,
                    legend_index,
                },
                runtime,
            },
        })
    }

    /// Creates an engine with one empty layer per legend.
    pub fn empty(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let layers = vec![Vec::new(); config.legends.len()];
        Self::new(renderer, config, layers)
    }
}
