// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An arena-backed, in-memory [`Document`].
//!
//! [`MemoryDocument`] plays the role of the host page in tests, benchmarks, and
//! headless embeddings. Geometry and computed style are set explicitly instead
//! of being derived from layout: what you store is what [`Document::bounding_rect`]
//! and [`Document::computed_style`] report.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::document::{Document, FullscreenError};
use crate::style::{ComputedStyle, Display, Visibility};

/// Identifier for an element of a [`MemoryDocument`].
///
/// It consists of a slot index and a generation counter. Removing an element
/// frees its slot; a later element reusing the slot gets a higher generation,
/// so stale identifiers never alias a different live element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// How a [`MemoryDocument`] answers fullscreen requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FullscreenPolicy {
    /// Grant every request.
    #[default]
    Allow,
    /// Reject requests, as a browser does without user activation.
    Reject,
    /// Report fullscreen as unavailable.
    Unsupported,
}

#[derive(Clone, Debug)]
struct Element {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
    style: ComputedStyle,
    z_index: i32,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    transform: Option<String>,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            parent,
            children: Vec::new(),
            rect: Rect::ZERO,
            style: ComputedStyle::VISIBLE,
            z_index: 0,
            attributes: Vec::new(),
            classes: Vec::new(),
            transform: None,
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// A small element tree with explicit geometry and style.
///
/// The document always has a root element (`html`), covering a 1280×720 page.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    fullscreen: Option<NodeId>,
    fullscreen_policy: FullscreenPolicy,
    stylesheets: Vec<(String, String)>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document holding only its root element.
    #[must_use]
    pub fn new() -> Self {
        let mut root = Element::new("html", None);
        root.rect = Rect::new(0.0, 0.0, 1280.0, 720.0);
        Self {
            slots: alloc::vec![Slot {
                generation: 1,
                element: Some(root),
            }],
            free: Vec::new(),
            root: NodeId(0, 1),
            fullscreen: None,
            fullscreen_policy: FullscreenPolicy::Allow,
            stylesheets: Vec::new(),
        }
    }

    /// Returns the root element.
    #[must_use]
    pub fn document_element(&self) -> NodeId {
        self.root
    }

    /// Appends a new element with tag `tag` as the last child of `parent`.
    ///
    /// The element starts with a zero rect and [`ComputedStyle::VISIBLE`].
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not alive.
    pub fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        assert!(self.is_alive(parent), "append to a dead parent {parent:?}");
        let element = Element::new(tag, Some(parent));
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.element = Some(element);
            NodeId(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).expect("too many elements");
            self.slots.push(Slot {
                generation: 1,
                element: Some(element),
            });
            NodeId(idx, 1)
        };
        if let Some(parent) = self.get_mut(parent) {
            parent.children.push(id);
        }
        id
    }

    /// Removes `node` and its whole subtree. Removing the root element is a no-op.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.root || !self.is_alive(node) {
            return;
        }
        if let Some(parent) = self.get(node).and_then(|e| e.parent)
            && let Some(parent) = self.get_mut(parent)
        {
            parent.children.retain(|&c| c != node);
        }
        let mut stack = alloc::vec![node];
        while let Some(id) = stack.pop() {
            let slot = &mut self.slots[id.idx()];
            if let Some(element) = slot.element.take() {
                stack.extend(element.children);
                self.free.push(id.0);
            }
            if self.fullscreen == Some(id) {
                self.fullscreen = None;
            }
        }
    }

    /// Returns `true` if `node` refers to a live element.
    #[must_use]
    pub fn is_alive(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Sets the rendered border box of `node`.
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(e) = self.get_mut(node) {
            e.rect = rect;
        }
    }

    /// Sets the computed style of `node`.
    pub fn set_style(&mut self, node: NodeId, style: ComputedStyle) {
        if let Some(e) = self.get_mut(node) {
            e.style = style;
        }
    }

    /// Sets the stacking order of `node`. Higher is on top.
    pub fn set_z_index(&mut self, node: NodeId, z_index: i32) {
        if let Some(e) = self.get_mut(node) {
            e.z_index = z_index;
        }
    }

    /// Returns the tag name of `node`, lower-cased.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|e| e.tag.as_str())
    }

    /// Returns the inline transform last written to `node`.
    #[must_use]
    pub fn transform(&self, node: NodeId) -> Option<&str> {
        self.get(node).and_then(|e| e.transform.as_deref())
    }

    /// Sets how fullscreen requests are answered.
    pub fn set_fullscreen_policy(&mut self, policy: FullscreenPolicy) {
        self.fullscreen_policy = policy;
    }

    /// Returns the css of the stylesheet injected under `id`.
    #[must_use]
    pub fn stylesheet(&self, id: &str) -> Option<&str> {
        self.stylesheets
            .iter()
            .find(|(sheet, _)| sheet == id)
            .map(|(_, css)| css.as_str())
    }

    /// Returns the number of injected stylesheets.
    #[must_use]
    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets.len()
    }

    fn get(&self, node: NodeId) -> Option<&Element> {
        let slot = self.slots.get(node.idx())?;
        if slot.generation != node.1 {
            return None;
        }
        slot.element.as_ref()
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        let slot = self.slots.get_mut(node.idx())?;
        if slot.generation != node.1 {
            return None;
        }
        slot.element.as_mut()
    }

    /// Elements in paint order: tree order, bottom to top.
    fn paint_order(&self) -> Vec<NodeId> {
        crate::walk::subtree(self, self.root).collect()
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn root(&self) -> Option<NodeId> {
        Some(self.root)
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.get(*node)?.parent
    }

    fn first_child(&self, node: &NodeId) -> Option<NodeId> {
        self.get(*node)?.children.first().copied()
    }

    fn next_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let parent = self.get(self.get(*node)?.parent?)?;
        let pos = parent.children.iter().position(|c| c == node)?;
        parent.children.get(pos + 1).copied()
    }

    fn is_video(&self, node: &NodeId) -> bool {
        self.get(*node).is_some_and(|e| e.tag == "video")
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        self.get(*node).map_or(Rect::ZERO, |e| e.rect)
    }

    fn computed_style(&self, node: &NodeId) -> ComputedStyle {
        self.get(*node).map_or(ComputedStyle::VISIBLE, |e| e.style)
    }

    fn elements_from_point(&self, point: Point) -> Vec<NodeId> {
        let mut hits: Vec<(i32, usize, NodeId)> = self
            .paint_order()
            .into_iter()
            .enumerate()
            .filter_map(|(order, id)| {
                let e = self.get(id)?;
                let paints = !matches!(e.style.display, Display::None | Display::Contents)
                    && e.style.visibility != Visibility::Hidden;
                (paints && e.rect.contains(point)).then_some((e.z_index, order, id))
            })
            .collect();
        // Topmost first: higher z, then later in tree order.
        hits.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
        hits.into_iter().map(|(_, _, id)| id).collect()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.get(*node)?
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        let Some(e) = self.get_mut(*node) else {
            return;
        };
        if let Some((_, v)) = e.attributes.iter_mut().find(|(k, _)| k == name) {
            *v = value.to_string();
        } else {
            e.attributes.push((name.to_string(), value.to_string()));
        }
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        if let Some(e) = self.get_mut(*node) {
            e.attributes.retain(|(k, _)| k != name);
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.get(*node)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if let Some(e) = self.get_mut(*node)
            && !e.classes.iter().any(|c| c == class)
        {
            e.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        if let Some(e) = self.get_mut(*node) {
            e.classes.retain(|c| c != class);
        }
    }

    fn set_transform(&mut self, node: &NodeId, transform: &str) {
        if let Some(e) = self.get_mut(*node) {
            e.transform = Some(transform.to_string());
        }
    }

    fn fullscreen_element(&self) -> Option<NodeId> {
        self.fullscreen.filter(|&id| self.is_alive(id))
    }

    fn request_fullscreen(&mut self, node: &NodeId) -> Result<(), FullscreenError> {
        match self.fullscreen_policy {
            FullscreenPolicy::Allow if self.is_alive(*node) => {
                self.fullscreen = Some(*node);
                Ok(())
            }
            FullscreenPolicy::Allow | FullscreenPolicy::Unsupported => {
                Err(FullscreenError::Unsupported)
            }
            FullscreenPolicy::Reject => Err(FullscreenError::Rejected),
        }
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if self.fullscreen.take().is_none() {
            return Err(FullscreenError::Rejected);
        }
        Ok(())
    }

    fn ensure_stylesheet(&mut self, id: &str, css: &str) -> bool {
        if self.stylesheet(id).is_some() {
            return false;
        }
        self.stylesheets.push((id.to_string(), css.to_string()));
        true
    }
}
