// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed style values read from the host.

/// The `display` keywords that change how a node is treated.
///
/// Only [`Display::Contents`] and [`Display::None`] carry meaning for Panscan;
/// every other keyword is folded into [`Display::Block`] or [`Display::Inline`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Display {
    /// A block-level (or any other box-generating, non-inline) display.
    #[default]
    Block,
    /// An inline-level display.
    Inline,
    /// `display: contents`: the node has no box of its own, its children do.
    Contents,
    /// `display: none`: neither the node nor its descendants are rendered.
    None,
}

impl Display {
    /// Parses a computed `display` value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "contents" => Self::Contents,
            "none" => Self::None,
            "inline" => Self::Inline,
            _ => Self::Block,
        }
    }
}

/// The computed `visibility` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `visible`.
    #[default]
    Visible,
    /// `hidden`.
    Hidden,
    /// `collapse`; behaves like `visible` on non-table nodes.
    Collapse,
}

impl Visibility {
    /// Parses a computed `visibility` value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "hidden" => Self::Hidden,
            "collapse" => Self::Collapse,
            _ => Self::Visible,
        }
    }
}

/// The computed `overflow` shorthand value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// `visible`.
    #[default]
    Visible,
    /// `hidden`.
    Hidden,
    /// `clip`.
    Clip,
    /// `scroll`.
    Scroll,
    /// `auto`.
    Auto,
}

impl Overflow {
    /// Parses a computed `overflow` value.
    ///
    /// A two-axis value is [`Overflow::Hidden`] only when both keywords are
    /// `hidden`. A mixed pair led by `hidden` (`"hidden auto"`) reads as
    /// [`Overflow::Visible`]; any other pair takes its first keyword.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.contains(' ') {
            return match value.split_whitespace().next() {
                Some("hidden") if value.split_whitespace().all(|v| v == "hidden") => Self::Hidden,
                Some("clip") => Self::Clip,
                Some("scroll") => Self::Scroll,
                Some("auto") => Self::Auto,
                _ => Self::Visible,
            };
        }
        match value {
            "hidden" => Self::Hidden,
            "clip" => Self::Clip,
            "scroll" => Self::Scroll,
            "auto" => Self::Auto,
            _ => Self::Visible,
        }
    }
}

/// The slice of a node's computed style that the visibility rules read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComputedStyle {
    /// Computed `display`.
    pub display: Display,
    /// Computed `visibility`.
    pub visibility: Visibility,
    /// Computed `overflow`.
    pub overflow: Overflow,
    /// Computed `opacity`, in `[0, 1]`.
    pub opacity: f64,
}

impl ComputedStyle {
    /// Style of a plain, fully visible block.
    pub const VISIBLE: Self = Self {
        display: Display::Block,
        visibility: Visibility::Visible,
        overflow: Overflow::Visible,
        opacity: 1.0,
    };

    /// Returns a copy with `display` replaced.
    #[must_use]
    pub const fn with_display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    /// Returns a copy with `visibility` replaced.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns a copy with `overflow` replaced.
    #[must_use]
    pub const fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Returns a copy with `opacity` replaced.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self::VISIBLE
    }
}
