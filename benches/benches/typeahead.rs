// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_typeahead::{
    ResultItem, ResultKind, StaticSource, TypeaheadConfig, TypeaheadEngine, group_by_category,
};

const WORDS: [&str; 8] = [
    "blue", "black", "blender", "bleach", "green", "grey", "gradient", "glow",
];

fn catalog(len: usize) -> Vec<ResultItem> {
    (0..len)
        .map(|i| {
            let word = WORDS[i % WORDS.len()];
            ResultItem::plain(i.to_string(), format!("{word} {i}"), ResultKind::Suggestion)
                .with_category(["Keywords", "Channels", "Videos"][i % 3])
        })
        .collect()
}

fn bench_static_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("typeahead/static_filter");

    for len in [256_usize, 4_096, 32_768] {
        let source = StaticSource::new(catalog(len));
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &source, |b, source| {
            b.iter(|| black_box(source.filter("BL")));
        });
    }

    group.finish();
}

fn bench_typing_burst(c: &mut Criterion) {
    // Hypothesis: keystrokes inside the window cost only a timer restart, so
    // a long burst is dominated by the single evaluation at the end.
    let mut group = c.benchmark_group("typeahead/typing_burst");
    let items = catalog(4_096);

    for strokes in [4_usize, 32] {
        let texts: Vec<String> = (1..=strokes).map(|n| "b".repeat(n)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(strokes), &texts, |b, texts| {
            b.iter_batched(
                || {
                    TypeaheadEngine::<(), _>::with_config(
                        TypeaheadConfig::default(),
                        StaticSource::new(items.clone()),
                    )
                },
                |mut engine| {
                    let mut now = 0;
                    for text in texts {
                        now += 50;
                        black_box(engine.set_query(text, now));
                        black_box(engine.poll(now));
                    }
                    black_box(engine.poll(now + TypeaheadConfig::DEFAULT_DEBOUNCE_MS));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let items = catalog(512);
    c.bench_function("typeahead/group_by_category", |b| {
        b.iter(|| black_box(group_by_category(&items)));
    });
}

criterion_group!(benches, bench_static_filter, bench_typing_burst, bench_grouping);
criterion_main!(benches);
