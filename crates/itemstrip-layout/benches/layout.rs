//! Benchmark tests for strip layout operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use itemstrip_core::{Insets, RecordingCanvas};
use itemstrip_layout::{
    break_lines, normalize, DividerEdges, Gravity, MeasureSpec, MonospaceMeasurer, RenderStyle,
    StripConfig, StripLayoutEngine, StripRenderer,
};

const LONG_ITEM: &str = "A strip item with enough text to wrap across several lines of a cell";
const CJK_ITEM: &str = "多项文本视图的一个很长的条目";

fn config() -> StripConfig {
    StripConfig::new()
        .with_padding(Insets::uniform(6.0))
        .with_dividers(2.0, DividerEdges::ALL)
        .with_gravity(Gravity::Center)
}

fn bench_break_lines(c: &mut Criterion) {
    let measurer = MonospaceMeasurer::default();

    c.bench_function("break_lines_long_item", |b| {
        b.iter(|| break_lines(black_box(LONG_ITEM), black_box(120.0), 24.0, &measurer))
    });

    c.bench_function("break_lines_cjk_item", |b| {
        b.iter(|| break_lines(black_box(CJK_ITEM), black_box(96.0), 24.0, &measurer))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let items: Vec<String> = (0..8).map(|i| format!("item {i}")).collect();

    c.bench_function("normalize_pad_to_16", |b| {
        b.iter(|| normalize(black_box(&items), black_box(Some(16))))
    });
}

fn bench_layout_4_items(c: &mut Criterion) {
    let engine = StripLayoutEngine::new(MonospaceMeasurer::default());
    let config = config().with_item_count(4);
    let items = ["one", "two", LONG_ITEM, "four"];

    c.bench_function("layout_4_items", |b| {
        b.iter(|| {
            engine.layout(
                black_box(&config),
                black_box(&items),
                MeasureSpec::Exact(800.0),
                MeasureSpec::Unspecified,
            )
        })
    });
}

fn bench_layout_reference_width(c: &mut Criterion) {
    let engine = StripLayoutEngine::new(MonospaceMeasurer::default());
    let config = config().with_ref_width(400.0);
    let items: Vec<String> = (0..12).map(|i| format!("{LONG_ITEM} {i}")).collect();

    c.bench_function("layout_12_items_with_reference", |b| {
        b.iter(|| {
            engine.layout(
                black_box(&config),
                black_box(&items),
                MeasureSpec::Exact(1600.0),
                MeasureSpec::Unspecified,
            )
        })
    });
}

fn bench_paint(c: &mut Criterion) {
    let config = config();
    let layout = StripLayoutEngine::new(MonospaceMeasurer::default())
        .layout(
            &config,
            &["one", "two", LONG_ITEM, "four"],
            MeasureSpec::Exact(800.0),
            MeasureSpec::Unspecified,
        )
        .expect("layout");
    let renderer = StripRenderer::new(RenderStyle::from_config(&config).with_debug_overlay(true));

    c.bench_function("paint_4_items", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            renderer.paint(black_box(&layout), &mut canvas);
            canvas.command_count()
        })
    });
}

criterion_group!(
    benches,
    bench_break_lines,
    bench_normalize,
    bench_layout_4_items,
    bench_layout_reference_width,
    bench_paint,
);
criterion_main!(benches);
