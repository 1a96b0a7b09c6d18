use chart_stream::api::{ChartEngine, ChartEngineConfig, PlaybackMode};
use chart_stream::core::{AxisSide, ChartGeometry, ChartType, DataPoint, DomainTracker, Layer, Legend};
use chart_stream::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn legends() -> Vec<Legend> {
    vec![
        Legend::line("price", AxisSide::Left),
        Legend::new("bars-a", AxisSide::Left, ChartType::StackedBar),
        Legend::new("bars-b", AxisSide::Left, ChartType::StackedBar),
        Legend::new("bubble", AxisSide::Right, ChartType::Bubble),
        Legend::line("volume", AxisSide::Right),
    ]
}

fn generate(len: usize) -> Vec<Layer> {
    (0..5)
        .map(|layer| {
            (0..len)
                .map(|i| {
                    let t = i as f64;
                    let y = (t * 0.01 + layer as f64).sin() * 100.0;
                    DataPoint::at(i as i64 * 1_000, y).with_tail_point(y * 1.1)
                })
                .collect()
        })
        .collect()
}

fn bench_domain_scan_10k(c: &mut Criterion) {
    let layers = generate(10_000);
    let legends = legends();

    c.bench_function("domain_scan_5x10k", |b| {
        b.iter(|| {
            let _ = DomainTracker::find_domains(black_box(&layers), black_box(&legends))
                .expect("domain scan");
        })
    });
}

fn bench_realtime_stream_1k(c: &mut Criterion) {
    let history = generate(2_000);
    let config = ChartEngineConfig::new(ChartGeometry::new(1600.0, 900.0), legends())
        .with_view_size(200)
        .with_frames_per_cycle(1);

    c.bench_function("realtime_stream_1k_batches", |b| {
        b.iter(|| {
            let mut engine =
                ChartEngine::new(NullRenderer::default(), config.clone(), history[..].to_vec())
                    .expect("engine init");
            for i in 0..1_000 {
                let batch: Vec<Layer> = (0..5)
                    .map(|layer| vec![DataPoint::at(2_000 + i, (i + layer) as f64)])
                    .collect();
                engine.push_data(batch).expect("push");
                engine.tick().expect("tick");
            }
            black_box(engine.domains());
        })
    });
}

fn bench_paging_sweep(c: &mut Criterion) {
    let config = ChartEngineConfig::new(ChartGeometry::new(1600.0, 900.0), legends())
        .with_view_size(500)
        .with_playback_mode(PlaybackMode::Paging);
    let mut engine = ChartEngine::new(NullRenderer::default(), config, generate(20_000))
        .expect("engine init");

    c.bench_function("paging_sweep_back_and_forward", |b| {
        b.iter(|| {
            for _ in 0..20 {
                engine.page_back(black_box(250)).expect("page back");
            }
            for _ in 0..20 {
                engine.page_forward(black_box(250)).expect("page forward");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_domain_scan_10k,
    bench_realtime_stream_1k,
    bench_paging_sweep
);
criterion_main!(benches);
