// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_overlay::containment::{ParentMap, is_within};
use understory_overlay::{Key, OverlayHost};
use understory_placement::AnchorGeometry;

struct Row;

impl AnchorGeometry<u32> for Row {
    fn anchor_rect(&self, node: u32) -> Option<Rect> {
        let x = f64::from(node % 32) * 40.0;
        Some(Rect::new(x, 0.0, x + 32.0, 32.0))
    }

    fn viewport(&self) -> Size {
        Size::new(1280.0, 720.0)
    }
}

/// A chain `depth -> depth - 1 -> ... -> 0`.
fn chain(depth: u32) -> ParentMap<u32> {
    let mut map = ParentMap::new();
    for n in 1..=depth {
        map.insert(n, n - 1);
    }
    map
}

fn bench_containment(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/is_within");
    for depth in [8_u32, 64, 512] {
        let tree = chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            // Worst case: walk to the root without a match.
            b.iter(|| black_box(is_within(tree, depth, u32::MAX)));
        });
    }
    group.finish();
}

fn bench_open_close_cycle(c: &mut Criterion) {
    // Open many menus, dismiss them with one outside click and one Escape.
    let mut group = c.benchmark_group("overlay/open_dismiss");
    for overlays in [4_u32, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(overlays),
            &overlays,
            |b, &overlays| {
                let tree = ParentMap::<u32>::new();
                let mut host = OverlayHost::new();
                let ids: Vec<_> = (0..overlays)
                    .map(|i| host.insert(i, 10_000 + i, 200.0))
                    .collect();
                b.iter(|| {
                    for (i, &id) in ids.iter().enumerate() {
                        host.open(id, &Row);
                        if i % 2 == 0 {
                            host.close(id);
                        }
                    }
                    black_box(host.dispatch_pointer_down(u32::MAX, &tree));
                    black_box(host.dispatch_key(Key::Escape));
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_containment, bench_open_close_cycle);
criterion_main!(benches);
