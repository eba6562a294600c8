#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for Bresenham line rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use framescribe::color::Rgba;
use framescribe::framebuffer::FrameBuffer;
use framescribe::render::{draw_line, LinePixels};

fn line_slope_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");
    let mut fb = FrameBuffer::new(1024, 720).expect("framebuffer creation should succeed");
    fb.clear(Rgba::WHITE);

    let cases = [
        ("horizontal", (0, 360, 1023, 360)),
        ("vertical", (512, 0, 512, 719)),
        ("diagonal", (0, 0, 719, 719)),
        ("shallow", (0, 700, 1023, 20)),
    ];

    for (name, (x0, y0, x1, y1)) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, _| {
            b.iter(|| {
                draw_line(
                    &mut fb,
                    black_box(x0),
                    black_box(y0),
                    black_box(x1),
                    black_box(y1),
                    0,
                    0,
                    0,
                )
                .expect("line endpoints are in bounds");
            });
        });
    }

    group.finish();
}

fn line_iterator_benchmark(c: &mut Criterion) {
    c.bench_function("line_pixels_count", |b| {
        b.iter(|| LinePixels::new(black_box(3), black_box(7), black_box(1020), black_box(713)).count());
    });
}

criterion_group!(benches, line_slope_benchmark, line_iterator_benchmark);
criterion_main!(benches);
