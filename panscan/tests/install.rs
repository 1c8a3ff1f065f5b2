// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for installation: idempotence, the no-video case, and teardown.

use std::rc::Rc;

use kurbo::{Point, Rect};
use panscan::{
    ClickEvent, Config, EventKind, HeadlessPage, InstallError, KeyEvent, KeyOutcome, Modifiers,
    OUTLINE_CSS, STYLESHEET_ID,
};
use panscan_dom::{MemoryDocument, NodeId};
use tracing_test::traced_test;

const HELD: Modifiers = Modifiers::SHIFT.union(Modifiers::ALT);

fn page() -> (HeadlessPage, NodeId) {
    let mut doc = MemoryDocument::new();
    let video = doc.append(doc.document_element(), "video");
    doc.set_rect(video, Rect::new(0.0, 0.0, 640.0, 360.0));
    (HeadlessPage::new(doc), video)
}

#[test]
fn installing_twice_leaves_one_listener_per_kind() {
    let (mut page, video) = page();
    let first = page.activate(Config::default()).unwrap();
    let second = page.activate(Config::default()).unwrap();
    assert!(!Rc::ptr_eq(&first, &second));

    assert_eq!(page.listeners().count(EventKind::KeyDown), 1);
    assert_eq!(page.listeners().count(EventKind::Click), 1);

    let outcomes = page.key_down(&KeyEvent::new("e", HELD));
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_handled());
    // One dispatch, one zoom step.
    assert_eq!(
        page.doc().transform(video),
        Some("scale(1.10) translate(0.00%, 0.00%)")
    );
    assert_eq!(page.click(&ClickEvent::new(video, Point::new(1.0, 1.0))).len(), 1);
}

#[test]
fn repeated_activation_never_stacks() {
    let (mut page, _) = page();
    for _ in 0..10 {
        page.activate(Config::default()).unwrap();
    }
    assert_eq!(page.listeners().count(EventKind::KeyDown), 1);
    assert_eq!(page.listeners().count(EventKind::Click), 1);
    assert_eq!(page.doc().stylesheet_count(), 1);
    assert_eq!(page.doc().stylesheet(STYLESHEET_ID), Some(OUTLINE_CSS));
}

#[test]
#[traced_test]
fn a_page_without_video_is_left_alone() {
    let mut page = HeadlessPage::new(MemoryDocument::new());
    assert_eq!(
        page.activate(Config::default()).unwrap_err(),
        InstallError::NoCandidates
    );
    assert!(logs_contain("no candidate video found"));
    assert!(page.listeners().is_empty());
    assert!(page.controller().is_none());
    assert_eq!(page.doc().stylesheet_count(), 0);
}

#[test]
fn a_failed_reinstall_removes_the_old_listeners() {
    let (mut page, video) = page();
    page.activate(Config::default()).unwrap();
    page.doc_mut().remove(video);
    assert!(page.activate(Config::default()).is_err());
    assert!(page.listeners().is_empty());
    assert!(page.key_down(&KeyEvent::new("e", HELD)).is_empty());
}

#[test]
fn hidden_videos_still_count_as_candidates() {
    let mut doc = MemoryDocument::new();
    let video = doc.append(doc.document_element(), "video");
    doc.set_rect(video, Rect::new(0.0, 0.0, 0.0, 0.0));
    let mut page = HeadlessPage::new(doc);
    page.activate(Config::default()).unwrap();
    assert_eq!(
        page.key_down(&KeyEvent::new("e", HELD)),
        vec![KeyOutcome::NoTarget]
    );
}

#[test]
#[traced_test]
fn no_visible_target_is_logged_per_event() {
    let mut doc = MemoryDocument::new();
    let video = doc.append(doc.document_element(), "video");
    doc.set_rect(video, Rect::new(-700.0, 0.0, -60.0, 360.0));
    let mut page = HeadlessPage::new(doc);
    page.activate(Config::default()).unwrap();
    page.key_down(&KeyEvent::new("e", HELD));
    assert!(logs_contain("no visible target"));
}

#[test]
fn deactivate_detaches_everything() {
    let (mut page, video) = page();
    page.activate(Config::default()).unwrap();
    page.deactivate();
    assert!(page.listeners().is_empty());
    assert!(page.key_down(&KeyEvent::new("e", HELD)).is_empty());
    assert_eq!(page.doc().transform(video), None);
}

#[test]
fn reinstall_starts_from_a_fresh_context() {
    let (mut page, video) = page();
    page.activate(Config::default()).unwrap();
    page.key_down(&KeyEvent::new("e", HELD));
    page.activate(Config::default().with_zoom_delta(0.5)).unwrap();
    page.key_down(&KeyEvent::new("e", HELD));
    // The node's style is the host's; the new context starts at identity.
    assert_eq!(
        page.doc().transform(video),
        Some("scale(1.50) translate(0.00%, 0.00%)")
    );
}
