// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Document`] trait: what Panscan may read from and write to a host tree.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};

use crate::style::ComputedStyle;

/// Error returned when the host refuses to change fullscreen state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenError {
    /// The host policy rejected the request (for example a missing user activation).
    Rejected,
    /// The node or document cannot be shown fullscreen at all.
    Unsupported,
}

impl fmt::Display for FullscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => f.write_str("fullscreen request rejected by the host"),
            Self::Unsupported => f.write_str("fullscreen is not supported here"),
        }
    }
}

impl core::error::Error for FullscreenError {}

/// An externally-owned, mutable tree of visual elements.
///
/// Implementations never hand out ownership: a [`Document::Node`] is a handle
/// that stays meaningful only while the host keeps the element alive. Panscan
/// does not create or destroy nodes.
///
/// ## Tree shape
///
/// Only element nodes are exposed. [`Document::parent`] returns `None` for the
/// root element, so an ancestor walk visits the root element but never the
/// document object above it.
///
/// ## Geometry
///
/// [`Document::bounding_rect`] is the node's rendered border box in viewport
/// coordinates, the way `getBoundingClientRect` reports it: the origin is the
/// top-left of the visible area. Nodes scrolled or pushed past the top or left
/// edge have negative coordinates; nodes below the fold stay positive.
pub trait Document {
    /// Handle to one element of the tree.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Returns the root element, if the document has one.
    fn root(&self) -> Option<Self::Node>;

    /// Returns the parent element of `node`, or `None` at the root element.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Returns the first element child of `node`.
    fn first_child(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Returns the next element sibling of `node`.
    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Returns `true` if `node` represents playable video media.
    fn is_video(&self, node: &Self::Node) -> bool;

    /// Returns the rendered border box of `node`, as of now.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Returns the computed style of `node`, as of now.
    fn computed_style(&self, node: &Self::Node) -> ComputedStyle;

    /// Returns every element under `point`, topmost first.
    fn elements_from_point(&self, point: Point) -> Vec<Self::Node>;

    /// Returns the value of attribute `name` on `node`.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Sets attribute `name` on `node` to `value`.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Removes attribute `name` from `node`. Removing a missing attribute is a no-op.
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Returns `true` if `node` has `class` in its class list.
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Adds `class` to the class list of `node`.
    fn add_class(&mut self, node: &Self::Node, class: &str);

    /// Removes `class` from the class list of `node`.
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Replaces the inline CSS `transform` of `node`.
    fn set_transform(&mut self, node: &Self::Node, transform: &str);

    /// Returns the element currently shown fullscreen, if any.
    fn fullscreen_element(&self) -> Option<Self::Node>;

    /// Asks the host to show `node` fullscreen.
    ///
    /// Hosts that gate fullscreen on user activation require this to be
    /// called synchronously from within the input event handler.
    fn request_fullscreen(&mut self, node: &Self::Node) -> Result<(), FullscreenError>;

    /// Asks the host to leave fullscreen.
    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;

    /// Injects a stylesheet identified by `id`, unless one with that id exists.
    ///
    /// Returns `true` if the stylesheet was injected by this call.
    fn ensure_stylesheet(&mut self, id: &str, css: &str) -> bool;
}
