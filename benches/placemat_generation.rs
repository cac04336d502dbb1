//! Placemat generation benchmarks
//!
//! Measures planning, drawing onto the recording canvas, and full PDF output.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use placemat::{Orientation, PlacematBuilder, PlacematConfig};
use placemat_layout::pack_cells;
use placemat_render_core::RecordingCanvas;
use placemat_types::Rect;
use std::hint::black_box;

fn benchmark_planning(c: &mut Criterion) {
    let pipeline = PlacematBuilder::new()
        .build()
        .expect("Failed to build pipeline");

    c.bench_function("plan_sections", |b| b.iter(|| black_box(pipeline.plan())));
}

fn benchmark_grid_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_packing");
    let region = Rect::new(0.0, 0.0, 755.67, 302.4);

    for count in [8, 64, 512] {
        group.bench_with_input(BenchmarkId::new("items", count), &count, |b, &count| {
            b.iter(|| black_box(pack_cells(region, count, 8, 5.76, 25.2)));
        });
    }

    group.finish();
}

fn benchmark_recording_render(c: &mut Criterion) {
    let pipeline = PlacematBuilder::new()
        .build()
        .expect("Failed to build pipeline");
    let page = pipeline.plan().page;

    c.bench_function("render_to_recording_canvas", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new(page);
            pipeline
                .render_to(&mut canvas)
                .expect("Failed to render placemat");
            black_box(canvas.commands().len())
        });
    });
}

fn benchmark_pdf_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_output");

    for (name, orientation) in [
        ("landscape", Orientation::Landscape),
        ("portrait", Orientation::Portrait),
    ] {
        let mut config = PlacematConfig::default();
        config.page.orientation = orientation;
        let pipeline = PlacematBuilder::new()
            .with_config(config)
            .build()
            .expect("Failed to build pipeline");

        group.bench_with_input(BenchmarkId::new("a3", name), &name, |b, _| {
            b.iter(|| {
                let mut bytes = Vec::with_capacity(64 * 1024);
                pipeline
                    .generate(&mut bytes)
                    .expect("Failed to generate PDF");
                black_box(bytes.len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_planning,
    benchmark_grid_packing,
    benchmark_recording_render,
    benchmark_pdf_output
);
criterion_main!(benches);
