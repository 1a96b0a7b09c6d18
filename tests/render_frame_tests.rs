use approx::assert_relative_eq;
use chart_stream::api::{ChartEngine, ChartEngineConfig};
use chart_stream::core::{AxisSide, ChartGeometry, DataPoint, Layer, Legend, Margins};
use chart_stream::render::NullRenderer;

fn engine(frames_per_cycle: usize) -> ChartEngine<NullRenderer> {
    let geometry = ChartGeometry::new(300.0, 200.0)
        .with_margins(Margins::uniform(50.0))
        .with_pixel_ratio(2.0);
    let config = ChartEngineConfig::new(geometry, vec![Legend::line("a", AxisSide::Left)])
        .with_frames_per_cycle(frames_per_cycle);
    let layers: Vec<Layer> = vec![(0..12).map(|i| DataPoint::at(i, i as f64)).collect()];
    ChartEngine::new(NullRenderer::default(), config, layers).expect("engine init")
}

#[test]
fn slot_width_spans_the_inner_width_on_the_render_surface() {
    let engine = engine(20);
    assert_relative_eq!(engine.slot_width_px(), 400.0 / 9.0);
    let frame = engine.build_render_frame();
    assert_relative_eq!(frame.slot_x(9), 400.0);
    assert_relative_eq!(frame.scroll_offset_px, 0.0);
    assert!(frame.validate().is_ok());
}

#[test]
fn scroll_offset_interpolates_over_the_cycle() {
    let mut engine = engine(4);
    engine
        .push_data(vec![vec![DataPoint::at(12, 5.0)]])
        .expect("push");
    engine.tick().expect("apply");
    engine.tick().expect("progress 1");
    engine.tick().expect("progress 2");

    let slot = 400.0 / 9.0;
    assert_relative_eq!(engine.scroll_offset_px(), slot / 4.0 * 2.0);
    let frame = engine.build_render_frame();
    assert_relative_eq!(frame.slot_x(1), slot - slot / 2.0);
    assert_relative_eq!(engine.renderer().last_scroll_offset_px, slot / 2.0);
}

#[test]
fn null_renderer_tracks_frame_contents() {
    let mut engine = engine(2);
    engine.render().expect("render");
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_layer_count, 1);
    assert_eq!(renderer.last_point_count, 11);
    assert_eq!(renderer.last_label_count, 3);
}

#[test]
fn frame_validation_catches_inconsistent_tracks() {
    let engine = engine(2);
    let mut frame = engine.build_render_frame();
    frame.time_labels.pop();
    assert!(frame.validate().is_err());

    let mut frame = engine.build_render_frame();
    frame.legends.clear();
    assert!(frame.validate().is_err());

    let mut frame = engine.build_render_frame();
    frame.scroll_offset_px = f64::NAN;
    assert!(frame.validate().is_err());
}
