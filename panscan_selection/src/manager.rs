// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use panscan_dom::{Document, nodes_with_attribute, subtree};
use panscan_visibility::is_visible;

/// Default attribute marking the selected node.
pub const SELECTED_ATTRIBUTE: &str = "data-panscan-selected";

/// Default class outlining the selected node while the border is shown.
pub const SELECTED_CLASS: &str = "panscan-selected";

/// Returns every video node under `root` (inclusive), in document order.
pub fn videos<D: Document + ?Sized>(doc: &D, root: D::Node) -> impl Iterator<Item = D::Node> {
    subtree(doc, root).filter(move |node| doc.is_video(node))
}

/// Returns `true` if `node` is a video and visible right now.
pub fn is_candidate<D: Document + ?Sized>(doc: &D, node: &D::Node) -> bool {
    doc.is_video(node) && is_visible(doc, node)
}

/// Keeps the selection mark on at most one node of a document.
///
/// The manager itself only holds the attribute and class names plus a
/// revision counter; the mark lives on the document.
#[derive(Clone, Debug)]
pub struct SelectionManager {
    attribute: &'static str,
    class: &'static str,
    revision: u64,
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new(SELECTED_ATTRIBUTE, SELECTED_CLASS)
    }
}

impl SelectionManager {
    /// Creates a manager marking with `attribute` and outlining with `class`.
    #[must_use]
    pub const fn new(attribute: &'static str, class: &'static str) -> Self {
        Self {
            attribute,
            class,
            revision: 0,
        }
    }

    /// Returns the marker attribute name.
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// Returns the outline class name.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        self.class
    }

    /// Returns a counter bumped every time the marked node changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns every node currently carrying the mark, in document order.
    ///
    /// Holds at most one node unless the host copied the attribute itself.
    pub fn marked<D: Document + ?Sized>(&self, doc: &D) -> Vec<D::Node> {
        match doc.root() {
            Some(root) => nodes_with_attribute(doc, root, self.attribute).collect(),
            None => Vec::new(),
        }
    }

    /// Marks `node` as the selection, after unmarking every other node.
    ///
    /// The outline class is added only when `outline` is set. Selecting the
    /// node that is already the only marked node just refreshes its class.
    pub fn select_explicit<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        node: &D::Node,
        outline: bool,
    ) {
        let marked = self.marked(doc);
        let unchanged = marked.len() == 1 && marked[0] == *node;
        if !unchanged {
            for old in &marked {
                doc.remove_attribute(old, self.attribute);
                doc.remove_class(old, self.class);
            }
            doc.set_attribute(node, self.attribute, "");
            self.bump_revision();
        }
        self.apply_outline(doc, node, outline);
    }

    /// Removes the mark and outline from every node.
    pub fn clear<D: Document + ?Sized>(&mut self, doc: &mut D) {
        let marked = self.marked(doc);
        if marked.is_empty() {
            return;
        }
        for old in &marked {
            doc.remove_attribute(old, self.attribute);
            doc.remove_class(old, self.class);
        }
        self.bump_revision();
    }

    /// Adds or removes the outline class on every marked node.
    pub fn set_outline<D: Document + ?Sized>(&self, doc: &mut D, outline: bool) {
        for node in self.marked(doc) {
            self.apply_outline(doc, &node, outline);
        }
    }

    /// Returns the marked node if it is visible right now.
    ///
    /// An invisible selection is reported as absent but keeps its mark.
    pub fn current_visible_selection<D: Document + ?Sized>(&self, doc: &D) -> Option<D::Node> {
        let root = doc.root()?;
        nodes_with_attribute(doc, root, self.attribute)
            .next()
            .filter(|node| is_visible(doc, node))
    }

    /// Returns the first visible video under `root`, in document order.
    pub fn auto_discover_visible<D: Document + ?Sized>(
        &self,
        doc: &D,
        root: D::Node,
    ) -> Option<D::Node> {
        subtree(doc, root).find(|node| is_candidate(doc, node))
    }

    /// Maps a click on `target` at `point` to the video it most likely meant.
    ///
    /// 1. A click directly on a video selects that video.
    /// 2. Otherwise the elements stacked under the pointer are searched, topmost
    ///    first, for a visible video (overlays often sit above the video).
    /// 3. Otherwise each element of that stack is searched for a visible video
    ///    descendant.
    ///
    /// Returns `None` when nothing qualifies.
    pub fn resolve_click<D: Document + ?Sized>(
        &self,
        doc: &D,
        target: &D::Node,
        point: Point,
    ) -> Option<D::Node> {
        if doc.is_video(target) {
            return Some(target.clone());
        }
        let stack = doc.elements_from_point(point);
        if let Some(hit) = stack.iter().find(|node| is_candidate(doc, node)) {
            return Some(hit.clone());
        }
        stack
            .into_iter()
            .find_map(|node| self.auto_discover_visible(doc, node))
    }

    /// Resolves a click and selects the result.
    ///
    /// A click that resolves to nothing leaves the selection untouched.
    /// Returns the selected node.
    pub fn select_from_click<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        target: &D::Node,
        point: Point,
        outline: bool,
    ) -> Option<D::Node> {
        let node = self.resolve_click(doc, target, point)?;
        self.select_explicit(doc, &node, outline);
        Some(node)
    }

    fn apply_outline<D: Document + ?Sized>(&self, doc: &mut D, node: &D::Node, outline: bool) {
        if outline {
            doc.add_class(node, self.class);
        } else {
            doc.remove_class(node, self.class);
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
