use chart_stream::api::{ChartEngine, ChartEngineConfig, PlaybackMode};
use chart_stream::core::{AxisSide, ChartGeometry, DataPoint, Layer, Legend, WindowPositioner};
use chart_stream::render::NullRenderer;
use proptest::prelude::*;

fn layers_from(values: &[f64], offset: i64) -> Vec<Layer> {
    vec![
        values
            .iter()
            .enumerate()
            .map(|(i, y)| DataPoint::at(offset + i as i64, *y))
            .collect(),
    ]
}

fn config(mode: PlaybackMode) -> ChartEngineConfig {
    ChartEngineConfig::new(
        ChartGeometry::new(500.0, 300.0),
        vec![Legend::line("series", AxisSide::Left)],
    )
    .with_frames_per_cycle(2)
    .with_playback_mode(mode)
}

fn visible_times(engine: &ChartEngine<NullRenderer>) -> Vec<Option<i64>> {
    engine.view_data()[0].iter().map(|p| p.time).collect()
}

fn stored_times(engine: &ChartEngine<NullRenderer>, from: usize, to: usize) -> Vec<Option<i64>> {
    engine.history()[0][from..to].iter().map(|p| p.time).collect()
}

proptest! {
    #[test]
    fn positioner_recompute_stays_within_history(total in 0usize..500, view_size in 2usize..80) {
        let positioner = WindowPositioner::new(total, view_size);
        prop_assert_eq!(positioner.start(), total.saturating_sub(view_size + 1));
    }

    #[test]
    fn positioner_moves_are_clamped(
        total in 1usize..300,
        view_size in 2usize..40,
        forward in 0usize..400,
        back in 0usize..400
    ) {
        let mut positioner = WindowPositioner::new(total, view_size);
        let moved = positioner.move_forward(forward, view_size, total);
        prop_assert!(moved.start <= total - 1);
        prop_assert!(moved.start >= moved.previous_start);

        let moved = positioner.move_back(back);
        prop_assert!(moved.start <= moved.previous_start);
        prop_assert_eq!(moved.revealed.len(), moved.distance());
    }

    #[test]
    fn realtime_domains_never_narrow_and_view_tracks_history(
        initial in prop::collection::vec(-1_000.0f64..1_000.0, 0..30),
        incoming in prop::collection::vec(-5_000.0f64..5_000.0, 1..25)
    ) {
        let mut engine = ChartEngine::new(
            NullRenderer::default(),
            config(PlaybackMode::Realtime),
            layers_from(&initial, 0),
        )
        .expect("engine init");

        for (i, value) in incoming.iter().enumerate() {
            let time = (initial.len() + i) as i64;
            engine.push_data(layers_from(&[*value], time)).expect("push");
        }

        let mut previous = engine.domains().left;
        for _ in 0..(incoming.len() * 2 + 2) {
            engine.tick().expect("tick");
            let current = engine.domains().left;
            prop_assert!(current.min <= previous.min);
            prop_assert!(current.max >= previous.max);
            previous = current;

            let start = engine.view_start_index();
            let len = engine.view_data()[0].len();
            prop_assert!(len <= engine.view_size() + 2);
            prop_assert_eq!(engine.time_data().len(), len);
            prop_assert_eq!(visible_times(&engine), stored_times(&engine, start, start + len));
        }
        prop_assert_eq!(engine.queued_batches(), 0);
        prop_assert!(!engine.is_animating());
    }

    #[test]
    fn paging_keeps_the_window_on_its_store_range(
        total in 1usize..80,
        moves in prop::collection::vec((any::<bool>(), 0usize..30), 1..20)
    ) {
        let values: Vec<f64> = (0..total).map(|i| i as f64).collect();
        let mut engine = ChartEngine::new(
            NullRenderer::default(),
            config(PlaybackMode::Paging),
            layers_from(&values, 0),
        )
        .expect("engine init");

        for (forward, distance) in moves {
            if forward {
                engine.page_forward(distance).expect("page forward");
            } else {
                engine.page_back(distance).expect("page back");
            }
            let start = engine.view_start_index();
            let end = (start + engine.view_size() + 1).min(total);
            prop_assert_eq!(visible_times(&engine), stored_times(&engine, start, end));
            prop_assert_eq!(engine.time_data().len(), end - start);
        }
    }
}
