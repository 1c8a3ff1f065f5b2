// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panscan_dom --heading-base-level=0

//! Panscan DOM: the document seam every other Panscan crate is written against.
//!
//! Panscan never owns the page it operates on. The page belongs to somebody else
//! (a video-conferencing site, a streaming player) and Panscan only ever:
//! - reads geometry and computed style of nodes and their ancestors,
//! - writes a bounded set of attributes, classes, and one inline transform,
//! - asks the host to enter or leave fullscreen.
//!
//! Those capabilities are captured by the [`Document`] trait. A browser host
//! implements it over `web_sys`; tests and headless hosts use
//! [`MemoryDocument`], a small arena-backed tree with explicit geometry.
//!
//! ## API overview
//!
//! - [`Document`]: queries and mutations on an externally-owned tree.
//! - [`ComputedStyle`]: the slice of computed style Panscan cares about
//!   ([`Display`], [`Visibility`], [`Overflow`], opacity).
//! - [`subtree`] / [`ancestors`]: allocation-free walks over a [`Document`].
//! - [`nodes_with_attribute`]: find every node carrying a marker attribute.
//! - [`MemoryDocument`] and [`NodeId`]: the reference in-memory document.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use panscan_dom::{Document, MemoryDocument, subtree};
//!
//! let mut doc = MemoryDocument::new();
//! let root = doc.root().unwrap();
//! let stage = doc.append(root, "div");
//! let video = doc.append(stage, "video");
//! doc.set_rect(video, Rect::new(0.0, 0.0, 640.0, 360.0));
//!
//! let videos: Vec<_> = subtree(&doc, root).filter(|n| doc.is_video(n)).collect();
//! assert_eq!(videos, vec![video]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod memory;
mod style;
mod walk;

pub use document::{Document, FullscreenError};
pub use memory::{FullscreenPolicy, MemoryDocument, NodeId};
pub use style::{ComputedStyle, Display, Overflow, Visibility};
pub use walk::{Ancestors, Subtree, ancestors, nodes_with_attribute, subtree};
