// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panscan_selection --heading-base-level=0

//! Panscan Selection: which single video receives keyboard commands.
//!
//! The selection is not stored in this crate. It lives on the document as a
//! marker attribute (plus, optionally, an outline class) carried by at most one
//! node at a time. Keeping it on the document means the host page, the
//! stylesheet, and a later reinstallation all see the same selection.
//!
//! [`SelectionManager`] maintains the "at most one mark" invariant: every way
//! of marking a node first removes the mark from every node that carries it.
//!
//! ## Operations
//!
//! - [`SelectionManager::select_explicit`]: mark one node.
//! - [`SelectionManager::current_visible_selection`]: the marked node, but only
//!   while it is visible. A hidden or scrolled-away selection is treated as
//!   absent; its mark is left in place.
//! - [`SelectionManager::auto_discover_visible`]: the first visible video in
//!   document order.
//! - [`SelectionManager::resolve_click`]: map a click to the video the user most
//!   likely meant, looking through overlays stacked above it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use panscan_dom::MemoryDocument;
//! use panscan_selection::SelectionManager;
//!
//! let mut doc = MemoryDocument::new();
//! let root = doc.document_element();
//! let video = doc.append(root, "video");
//! doc.set_rect(video, Rect::new(0.0, 0.0, 320.0, 180.0));
//!
//! let mut selection = SelectionManager::default();
//! assert_eq!(selection.current_visible_selection(&doc), None);
//!
//! let found = selection.auto_discover_visible(&doc, root).unwrap();
//! selection.select_explicit(&mut doc, &found, true);
//! assert_eq!(selection.current_visible_selection(&doc), Some(video));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod manager;

pub use manager::{SELECTED_ATTRIBUTE, SELECTED_CLASS, SelectionManager, is_candidate, videos};
