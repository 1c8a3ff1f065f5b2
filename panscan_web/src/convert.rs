// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser values to Panscan values. Kept free of `web_sys` so it is testable
//! off the browser.

use kurbo::Rect;
use panscan::Modifiers;
use panscan_dom::{ComputedStyle, Display, Overflow, Visibility};

/// Builds a [`ComputedStyle`] from `getComputedStyle` property values.
///
/// An unparseable opacity reads as fully opaque.
pub fn computed_style(display: &str, visibility: &str, overflow: &str, opacity: &str) -> ComputedStyle {
    ComputedStyle::VISIBLE
        .with_display(Display::parse(display))
        .with_visibility(Visibility::parse(visibility))
        .with_overflow(Overflow::parse(overflow))
        .with_opacity(opacity.trim().parse().unwrap_or(1.0))
}

/// Collects the modifier flags of a keyboard event.
pub fn modifiers(shift: bool, alt: bool, control: bool, meta: bool) -> Modifiers {
    let mut held = Modifiers::empty();
    held.set(Modifiers::SHIFT, shift);
    held.set(Modifiers::ALT, alt);
    held.set(Modifiers::CONTROL, control);
    held.set(Modifiers::META, meta);
    held
}

/// Builds a rect from a `getBoundingClientRect` box.
///
/// The box stays in viewport coordinates, so a node scrolled past the top or
/// left edge of the window comes out negative.
pub fn client_rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}
