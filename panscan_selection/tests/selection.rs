// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `panscan_selection` crate.
//!
//! These exercise the exclusive mark, the visible-only view of it, and the
//! three stages of click resolution.

use kurbo::{Point, Rect};
use panscan_dom::{ComputedStyle, Document, MemoryDocument, NodeId};
use panscan_selection::{SELECTED_ATTRIBUTE, SELECTED_CLASS, SelectionManager, videos};

struct Page {
    doc: MemoryDocument,
    left: NodeId,
    right: NodeId,
    overlay: NodeId,
    tile: NodeId,
}

/// Two side-by-side video tiles; the right one wrapped in a tile with a
/// transparent overlay sitting on top of it.
fn page() -> Page {
    let mut doc = MemoryDocument::new();
    let root = doc.document_element();
    let left = doc.append(root, "video");
    let tile = doc.append(root, "div");
    let right = doc.append(tile, "video");
    let overlay = doc.append(tile, "div");
    doc.set_rect(left, Rect::new(0.0, 0.0, 400.0, 300.0));
    doc.set_rect(tile, Rect::new(400.0, 0.0, 800.0, 300.0));
    doc.set_rect(right, Rect::new(400.0, 0.0, 800.0, 300.0));
    doc.set_rect(overlay, Rect::new(400.0, 0.0, 800.0, 300.0));
    Page {
        doc,
        left,
        right,
        overlay,
        tile,
    }
}

fn marked_count(doc: &MemoryDocument) -> usize {
    let root = doc.document_element();
    panscan_dom::nodes_with_attribute(doc, root, SELECTED_ATTRIBUTE).count()
}

#[test]
fn select_explicit_moves_the_single_mark() {
    let mut p = page();
    let mut sel = SelectionManager::default();

    sel.select_explicit(&mut p.doc, &p.left, true);
    assert_eq!(sel.marked(&p.doc), vec![p.left]);
    assert!(p.doc.has_class(&p.left, SELECTED_CLASS));
    assert_eq!(sel.revision(), 1);

    sel.select_explicit(&mut p.doc, &p.right, true);
    assert_eq!(sel.marked(&p.doc), vec![p.right]);
    assert!(!p.doc.has_class(&p.left, SELECTED_CLASS));
    assert_eq!(sel.revision(), 2);

    // Re-selecting the same node is not a change.
    sel.select_explicit(&mut p.doc, &p.right, true);
    assert_eq!(sel.revision(), 2);
}

#[test]
fn stray_marks_are_cleared_on_select() {
    let mut p = page();
    p.doc.set_attribute(&p.left, SELECTED_ATTRIBUTE, "");
    p.doc.set_attribute(&p.overlay, SELECTED_ATTRIBUTE, "");
    let mut sel = SelectionManager::default();
    sel.select_explicit(&mut p.doc, &p.right, false);
    assert_eq!(sel.marked(&p.doc), vec![p.right]);
}

#[test]
fn outline_follows_the_flag() {
    let mut p = page();
    let mut sel = SelectionManager::default();
    sel.select_explicit(&mut p.doc, &p.left, false);
    assert!(!p.doc.has_class(&p.left, SELECTED_CLASS));

    sel.set_outline(&mut p.doc, true);
    assert!(p.doc.has_class(&p.left, SELECTED_CLASS));
    sel.set_outline(&mut p.doc, false);
    assert!(!p.doc.has_class(&p.left, SELECTED_CLASS));
}

#[test]
fn invisible_selection_reads_as_none_but_keeps_its_mark() {
    let mut p = page();
    let mut sel = SelectionManager::default();
    sel.select_explicit(&mut p.doc, &p.left, true);
    assert_eq!(sel.current_visible_selection(&p.doc), Some(p.left));

    p.doc.set_style(p.left, ComputedStyle::VISIBLE.with_opacity(0.0));
    assert_eq!(sel.current_visible_selection(&p.doc), None);
    assert_eq!(sel.marked(&p.doc), vec![p.left]);

    p.doc.set_style(p.left, ComputedStyle::VISIBLE);
    assert_eq!(sel.current_visible_selection(&p.doc), Some(p.left));
}

#[test]
fn auto_discovery_skips_invisible_videos() {
    let mut p = page();
    let sel = SelectionManager::default();
    let root = p.doc.document_element();
    assert_eq!(sel.auto_discover_visible(&p.doc, root), Some(p.left));

    p.doc.set_rect(p.left, Rect::new(-500.0, 0.0, -100.0, 300.0));
    assert_eq!(sel.auto_discover_visible(&p.doc, root), Some(p.right));

    p.doc.set_style(p.right, ComputedStyle::VISIBLE.with_opacity(0.0));
    assert_eq!(sel.auto_discover_visible(&p.doc, root), None);
}

#[test]
fn click_on_a_video_selects_it_directly() {
    let p = page();
    let sel = SelectionManager::default();
    let hit = sel.resolve_click(&p.doc, &p.left, Point::new(10.0, 10.0));
    assert_eq!(hit, Some(p.left));
}

#[test]
fn click_on_an_overlay_finds_the_video_underneath() {
    let p = page();
    let sel = SelectionManager::default();
    let stack = p.doc.elements_from_point(Point::new(500.0, 100.0));
    assert_eq!(stack.first(), Some(&p.overlay));

    let hit = sel.resolve_click(&p.doc, &p.overlay, Point::new(500.0, 100.0));
    assert_eq!(hit, Some(p.right));
}

#[test]
fn click_falls_back_to_descendants_of_the_stack() {
    let mut p = page();
    // Shrink the video so it is no longer under the pointer; it is still a
    // visible descendant of the tile that is.
    p.doc.set_rect(p.right, Rect::new(700.0, 200.0, 800.0, 300.0));
    let sel = SelectionManager::default();
    let hit = sel.resolve_click(&p.doc, &p.overlay, Point::new(450.0, 50.0));
    assert_eq!(hit, Some(p.right));
}

#[test]
fn click_on_nothing_leaves_selection_unchanged() {
    let mut p = page();
    let mut sel = SelectionManager::default();
    sel.select_explicit(&mut p.doc, &p.left, true);
    let revision = sel.revision();

    // With every video hidden, nothing under the pointer qualifies.
    p.doc.set_style(p.left, ComputedStyle::VISIBLE.with_opacity(0.0));
    p.doc.set_style(p.tile, ComputedStyle::VISIBLE.with_opacity(0.0));
    let picked = sel.select_from_click(&mut p.doc, &p.tile, Point::new(500.0, 100.0), true);
    assert_eq!(picked, None);
    assert_eq!(sel.marked(&p.doc), vec![p.left]);
    assert_eq!(sel.revision(), revision);
}

#[test]
fn click_on_blank_space_searches_the_whole_stack() {
    let mut p = page();
    let root = p.doc.document_element();
    let blank = p.doc.append(root, "div");
    p.doc.set_rect(blank, Rect::new(0.0, 400.0, 800.0, 600.0));
    let sel = SelectionManager::default();
    // The root element is under every point, so its first visible video wins.
    let hit = sel.resolve_click(&p.doc, &blank, Point::new(100.0, 500.0));
    assert_eq!(hit, Some(p.left));
}

#[test]
fn at_most_one_mark_for_any_click_sequence() {
    let mut p = page();
    let mut sel = SelectionManager::default();
    let root = p.doc.document_element();
    let clicks = [
        (p.left, Point::new(10.0, 10.0)),
        (p.overlay, Point::new(500.0, 100.0)),
        (root, Point::new(100.0, 700.0)),
        (p.tile, Point::new(790.0, 10.0)),
        (p.left, Point::new(399.0, 299.0)),
    ];
    for (i, (target, point)) in clicks.iter().cycle().take(25).enumerate() {
        sel.select_from_click(&mut p.doc, target, *point, i % 2 == 0);
        assert!(marked_count(&p.doc) <= 1);
        if let Some(found) = sel.auto_discover_visible(&p.doc, root) {
            sel.select_explicit(&mut p.doc, &found, true);
        }
        assert_eq!(marked_count(&p.doc), 1);
    }
}

#[test]
fn clear_removes_mark_and_outline() {
    let mut p = page();
    let mut sel = SelectionManager::default();
    sel.select_explicit(&mut p.doc, &p.left, true);
    sel.clear(&mut p.doc);
    assert!(sel.marked(&p.doc).is_empty());
    assert!(!p.doc.has_class(&p.left, SELECTED_CLASS));
}

#[test]
fn videos_lists_every_video_in_document_order() {
    let p = page();
    let root = p.doc.document_element();
    let all: Vec<_> = videos(&p.doc, root).collect();
    assert_eq!(all, vec![p.left, p.right]);
}
