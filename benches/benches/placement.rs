// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{PlacementConfig, Positioner, compute_position};

/// Anchors spread over the viewport, including ones against the right edge.
fn anchors(n: usize, viewport: Size) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let x = t * (viewport.width - 40.0);
            let y = (1.0 - t) * (viewport.height - 32.0);
            Rect::new(x, y, x + 40.0, y + 32.0)
        })
        .collect()
}

fn bench_compute_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/compute_position");
    let viewport = Size::new(1920.0, 1080.0);
    let config = PlacementConfig::default();

    for n in [64_usize, 1_024] {
        let anchors = anchors(n, viewport);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &anchors, |b, anchors| {
            b.iter(|| {
                for &anchor in anchors {
                    black_box(compute_position(anchor, 320.0, viewport, &config));
                }
            });
        });
    }

    group.finish();
}

fn bench_positioner_with_gaps(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 720.0);
    let anchors = anchors(256, viewport);

    // Every fourth sample is unmeasurable and keeps the previous position.
    c.bench_function("placement/positioner_update", |b| {
        let mut positioner = Positioner::new(280.0);
        b.iter(|| {
            for (i, &anchor) in anchors.iter().enumerate() {
                let sample = (i % 4 != 0).then_some(anchor);
                let _ = black_box(positioner.update_position(sample, viewport));
            }
        });
    });
}

criterion_group!(benches, bench_compute_position, bench_positioner_with_gaps);
criterion_main!(benches);
