// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panscan_visibility --heading-base-level=0

//! Panscan Visibility: is this node perceivable by the user right now?
//!
//! A node counts as visible unless one of the following holds, checked in this
//! order and stopping at the first that applies:
//!
//! 1. Its box is zero by zero and it does not clip its overflow ([`Verdict::Empty`]).
//! 2. Its own `visibility` is `hidden` ([`Verdict::Hidden`]).
//! 3. Its box lies entirely above or entirely left of the viewport origin
//!    ([`Verdict::OffScreen`]).
//! 4. Walking the node and its ancestors up to the root element:
//!    - any of them has an opacity of exactly zero ([`Verdict::Transparent`]);
//!    - `display: contents` ancestors have no box and are skipped for geometry;
//!    - any of them has a zero width or zero height while the node itself clips
//!      its overflow ([`Verdict::Clipped`]).
//!
//! Being scrolled below the fold or to the right of the viewport does not count:
//! the answer is independent of the viewport size.
//!
//! Nothing is cached. Every query reads the live geometry and style through the
//! [`Document`] and must be repeated whenever the answer is needed again.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use panscan_dom::{ComputedStyle, MemoryDocument};
//! use panscan_visibility::{Verdict, is_visible, verdict};
//!
//! let mut doc = MemoryDocument::new();
//! let video = doc.append(doc.document_element(), "video");
//! doc.set_rect(video, Rect::new(10.0, 10.0, 330.0, 190.0));
//! assert!(is_visible(&doc, &video));
//!
//! doc.set_style(video, ComputedStyle::VISIBLE.with_opacity(0.0));
//! assert_eq!(verdict(&doc, &video), Verdict::Transparent);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use panscan_dom::{Display, Document, Overflow, Visibility, ancestors};

/// Outcome of a visibility query, naming the rule that hid the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// No rule applied; the node is visible.
    Visible,
    /// The node's box is zero by zero and it does not clip its overflow.
    Empty,
    /// The node's own `visibility` is `hidden`.
    Hidden,
    /// The node lies entirely above or left of the viewport origin.
    OffScreen,
    /// The node or an ancestor is fully transparent.
    Transparent,
    /// The node clips its overflow and a box on its ancestor chain is degenerate.
    Clipped,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Visible`].
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Runs every visibility rule against `node` and reports which one applied.
pub fn verdict<D: Document + ?Sized>(doc: &D, node: &D::Node) -> Verdict {
    let rect = doc.bounding_rect(node);
    let style = doc.computed_style(node);
    let clips = style.overflow == Overflow::Hidden;

    if rect.width() == 0.0 && rect.height() == 0.0 && !clips {
        return Verdict::Empty;
    }
    if style.visibility == Visibility::Hidden {
        return Verdict::Hidden;
    }
    // Only the negative direction: below the fold is still visible.
    if rect.x0 + rect.width() < 0.0 || rect.y0 + rect.height() < 0.0 {
        return Verdict::OffScreen;
    }

    for ancestor in ancestors(doc, node.clone()) {
        let (a_style, a_rect) = if ancestor == *node {
            (style, rect)
        } else {
            (doc.computed_style(&ancestor), doc.bounding_rect(&ancestor))
        };
        if a_style.opacity == 0.0 {
            return Verdict::Transparent;
        }
        if a_style.display == Display::Contents {
            continue;
        }
        if (a_rect.width() == 0.0 || a_rect.height() == 0.0) && clips {
            return Verdict::Clipped;
        }
    }
    Verdict::Visible
}

/// Returns `true` if `node` is effectively visible now.
///
/// See the crate documentation for the rules.
pub fn is_visible<D: Document + ?Sized>(doc: &D, node: &D::Node) -> bool {
    verdict(doc, node).is_visible()
}
