// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use panscan::{Config, HeadlessPage, KeyEvent, Modifiers};
use panscan_dom::MemoryDocument;

fn page(videos: usize) -> HeadlessPage {
    let mut doc = MemoryDocument::new();
    let root = doc.document_element();
    for i in 0..videos {
        let video = doc.append(root, "video");
        let y = i as f64 * 400.0;
        doc.set_rect(video, Rect::new(0.0, y, 640.0, y + 360.0));
    }
    let mut page = HeadlessPage::new(doc);
    page.activate(Config::default()).unwrap();
    page
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("panscan_dispatch");
    let held = Modifiers::SHIFT | Modifiers::ALT;
    let keys: Vec<KeyEvent> = ["w", "a", "e", "+", "s", "d", "q", "-", "r"]
        .into_iter()
        .map(|k| KeyEvent::new(k, held))
        .collect();

    group.bench_function("key_sequence(videos=16)", |b| {
        b.iter_batched(
            || page(16),
            |mut page| {
                for key in &keys {
                    black_box(page.key_down(key));
                }
                page
            },
            BatchSize::SmallInput,
        );
    });

    let ignored = KeyEvent::new("e", Modifiers::SHIFT);
    let mut gated = page(16);
    group.bench_function("gated_key", |b| {
        b.iter(|| black_box(gated.key_down(black_box(&ignored))));
    });
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
