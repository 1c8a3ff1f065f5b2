// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use panscan_dom::{ComputedStyle, Display, MemoryDocument, NodeId};
use panscan_visibility::verdict;

/// A video at the bottom of `depth` nested wrappers. Every fourth wrapper is
/// `display: contents`, which the ancestor walk has to step over.
fn nested(depth: usize) -> (MemoryDocument, NodeId) {
    let mut doc = MemoryDocument::new();
    let mut parent = doc.document_element();
    for i in 0..depth {
        let div = doc.append(parent, "div");
        doc.set_rect(div, Rect::new(0.0, 0.0, 1280.0, 720.0));
        if i % 4 == 3 {
            doc.set_style(div, ComputedStyle::VISIBLE.with_display(Display::Contents));
        }
        parent = div;
    }
    let video = doc.append(parent, "video");
    doc.set_rect(video, Rect::new(0.0, 0.0, 640.0, 360.0));
    (doc, video)
}

fn bench_verdict(c: &mut Criterion) {
    let mut group = c.benchmark_group("panscan_visibility");
    for &depth in &[1_usize, 8, 32, 128] {
        let (doc, video) = nested(depth);
        group.bench_with_input(BenchmarkId::new("visible", depth), &depth, |b, _| {
            b.iter(|| black_box(verdict(&doc, black_box(&video))));
        });
    }

    // Early exits never reach the ancestor walk.
    let (mut doc, video) = nested(128);
    doc.set_rect(video, Rect::new(-700.0, 0.0, -60.0, 360.0));
    group.bench_function("off_screen(depth=128)", |b| {
        b.iter(|| black_box(verdict(&doc, black_box(&video))));
    });
    group.finish();
}

criterion_group!(benches, bench_verdict);
criterion_main!(benches);
