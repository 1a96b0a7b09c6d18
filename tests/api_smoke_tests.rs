use approx::assert_relative_eq;
use chart_stream::ChartError;
use chart_stream::api::{ChartEngine, ChartEngineConfig};
use chart_stream::core::{AxisSide, ChartGeometry, DataPoint, Domain, Layer, Legend, Margins};
use chart_stream::render::NullRenderer;

fn geometry() -> ChartGeometry {
    ChartGeometry::new(300.0, 200.0).with_margins(Margins::uniform(50.0))
}

fn legends() -> Vec<Legend> {
    (1..=5)
        .map(|id| Legend::line(id.to_string(), AxisSide::Left))
        .collect()
}

fn row(time_start: i64, values: [Option<f64>; 4]) -> Layer {
    values
        .into_iter()
        .enumerate()
        .map(|(i, y)| DataPoint::new(Some(time_start + i as i64), y))
        .collect()
}

fn fixture() -> Vec<Layer> {
    vec![
        row(0, [Some(0.0), Some(1.0), Some(2.0), Some(3.0)]),
        row(0, [Some(3.0), Some(2.0), Some(1.0), Some(-1.0)]),
        row(0, [Some(4.0), Some(4.0), Some(3.0), Some(1.0)]),
        row(0, [None, Some(2.0), None, Some(-2.0)]),
        row(0, [Some(1.0), Some(3.0), Some(6.0), Some(5.0)]),
    ]
}

#[test]
fn short_history_anchors_window_at_zero() {
    let config = ChartEngineConfig::new(geometry(), legends());
    let engine = ChartEngine::new(NullRenderer::default(), config, fixture()).expect("engine init");

    assert_eq!(engine.view_start_index(), 0);
    assert_eq!(engine.total_len(), 4);
    assert_eq!(engine.view_data().len(), 5);
    assert!(engine.view_data().iter().all(|layer| layer.len() == 4));
    assert_eq!(engine.domains().left, Domain::new(-2.0, 6.0));
    assert_eq!(engine.domains().right, Domain::new(0.0, 0.0));
    assert_eq!(engine.time_data(), vec![None, None, Some(2), None]);
}

#[test]
fn initial_points_carry_scaled_values() {
    let config = ChartEngineConfig::new(geometry(), legends());
    let engine = ChartEngine::new(NullRenderer::default(), config, fixture()).expect("engine init");

    let top = engine.view_data()[4][2];
    assert_relative_eq!(top.scaled_y.expect("scaled"), 0.0);
    let bottom = engine.view_data()[3][3];
    assert_relative_eq!(bottom.scaled_y.expect("scaled"), 100.0);
    assert_eq!(engine.view_data()[3][0].scaled_y, None);
}

#[test]
fn long_history_keeps_view_size_plus_one_points() {
    let layers: Vec<Layer> = (0..2)
        .map(|layer| {
            (0..30)
                .map(|i| DataPoint::at(i, (i * (layer + 1)) as f64))
                .collect()
        })
        .collect();
    let legends = vec![
        Legend::line("a", AxisSide::Left),
        Legend::line("b", AxisSide::Right),
    ];
    let config = ChartEngineConfig::new(geometry(), legends);
    let engine = ChartEngine::new(NullRenderer::default(), config, layers).expect("engine init");

    assert_eq!(engine.view_start_index(), 19);
    assert_eq!(engine.view_data()[0].len(), 11);
    assert_eq!(engine.view_data()[0][0].time, Some(19));
    assert_eq!(engine.domains().left, Domain::new(19.0, 29.0));
    assert_eq!(engine.domains().right, Domain::new(38.0, 58.0));
}

#[test]
fn empty_engine_starts_with_zero_domains() {
    let config = ChartEngineConfig::new(geometry(), legends());
    let engine = ChartEngine::empty(NullRenderer::default(), config).expect("engine init");

    assert_eq!(engine.total_len(), 0);
    assert_eq!(engine.view_start_index(), 0);
    assert_eq!(engine.domains().left, Domain::new(0.0, 0.0));
    assert!(engine.time_data().is_empty());
}

#[test]
fn initial_layer_count_must_match_legends() {
    let config = ChartEngineConfig::new(geometry(), legends());
    let mut layers = fixture();
    layers.pop();
    let err = ChartEngine::new(NullRenderer::default(), config, layers)
        .err()
        .expect("layer count mismatch");
    assert!(matches!(
        err,
        ChartError::LegendCountMismatch {
            legends: 5,
            layers: 4
        }
    ));
}

#[test]
fn invalid_config_is_rejected() {
    let too_small = ChartEngineConfig::new(ChartGeometry::new(80.0, 200.0), legends());
    assert!(matches!(
        ChartEngine::empty(NullRenderer::default(), too_small),
        Err(ChartError::InvalidViewport { .. })
    ));

    let below_floor = ChartEngineConfig::new(geometry(), legends()).with_view_size(5);
    assert!(ChartEngine::empty(NullRenderer::default(), below_floor).is_err());

    let duplicate = ChartEngineConfig::new(
        geometry(),
        vec![
            Legend::line("a", AxisSide::Left),
            Legend::line("a", AxisSide::Right),
        ],
    );
    assert!(ChartEngine::empty(NullRenderer::default(), duplicate).is_err());

    let no_frames = ChartEngineConfig::new(geometry(), legends()).with_frames_per_cycle(0);
    assert!(no_frames.validate().is_err());
}

#[test]
fn oversized_view_size_from_json_does_not_overflow() {
    let json = ChartEngineConfig::new(geometry(), legends())
        .with_view_size(usize::MAX)
        .to_json_pretty()
        .expect("serialize config");
    let config = ChartEngineConfig::from_json_str(&json).expect("parse config");
    assert_eq!(config.view_size, usize::MAX);

    let mut engine =
        ChartEngine::new(NullRenderer::default(), config, fixture()).expect("engine init");
    assert_eq!(engine.view_start_index(), 0);
    assert_eq!(engine.view_data()[0].len(), 4);

    let batch: Vec<Layer> = (0..5).map(|_| vec![DataPoint::at(4, 1.0)]).collect();
    engine.push_data(batch).expect("push");
    for _ in 0..25 {
        engine.tick().expect("tick");
    }
    assert_eq!(engine.view_start_index(), 0);
    assert_eq!(engine.view_data()[0].len(), 5);
}

#[test]
fn legend_ids_resolve_to_layer_indices() {
    let config = ChartEngineConfig::new(geometry(), legends());
    let engine = ChartEngine::new(NullRenderer::default(), config, fixture()).expect("engine init");
    assert_eq!(engine.legend_layer("1"), Some(0));
    assert_eq!(engine.legend_layer("5"), Some(4));
    assert_eq!(engine.legend_layer("missing"), None);
}
