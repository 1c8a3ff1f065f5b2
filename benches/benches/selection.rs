// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use panscan_dom::{ComputedStyle, MemoryDocument, NodeId};
use panscan_selection::SelectionManager;

/// An `n`×`n` grid of tiles, each a wrapper holding a video and an overlay.
/// Only the last video is visible; the rest are transparent.
fn tile_grid(n: usize) -> (MemoryDocument, Vec<NodeId>) {
    let mut doc = MemoryDocument::new();
    let root = doc.document_element();
    let cell = 1280.0 / n as f64;
    let mut overlays = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let rect = Rect::from_origin_size((x as f64 * cell, y as f64 * cell), (cell, cell));
            let tile = doc.append(root, "div");
            let video = doc.append(tile, "video");
            let overlay = doc.append(tile, "div");
            for node in [tile, video, overlay] {
                doc.set_rect(node, rect);
            }
            if x + 1 < n || y + 1 < n {
                doc.set_style(video, ComputedStyle::VISIBLE.with_opacity(0.0));
            }
            overlays.push(overlay);
        }
    }
    (doc, overlays)
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("panscan_selection");
    for &n in &[2_usize, 8, 24] {
        let (doc, overlays) = tile_grid(n);
        let root = doc.document_element();
        let selection = SelectionManager::default();
        group.bench_with_input(BenchmarkId::new("auto_discover_last", n * n), &n, |b, _| {
            b.iter(|| black_box(selection.auto_discover_visible(&doc, black_box(root))));
        });

        let last = overlays[overlays.len() - 1];
        let rect = panscan_dom::Document::bounding_rect(&doc, &last);
        let point = rect.center();
        group.bench_with_input(BenchmarkId::new("resolve_click_overlay", n * n), &n, |b, _| {
            b.iter(|| black_box(selection.resolve_click(&doc, &last, black_box(point))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
