// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::Vec2;

/// Largest pan offset on either axis, in percent of the node's own size.
pub const PAN_LIMIT: f64 = 100.0;

/// One of the two pan axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// Pan and zoom applied to one node.
///
/// Values only change through [`TransformStore`](crate::TransformStore), which
/// keeps pan within `[-PAN_LIMIT, PAN_LIMIT]` and zoom at or above its floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub(crate) pan: Vec2,
    pub(crate) zoom: f64,
}

impl TransformState {
    /// No pan, zoom `1.0`.
    pub const IDENTITY: Self = Self {
        pan: Vec2::ZERO,
        zoom: 1.0,
    };

    /// Horizontal pan, in percent.
    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan.x
    }

    /// Vertical pan, in percent.
    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan.y
    }

    /// Pan on both axes, in percent.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Uniform scale factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns `true` if this is [`TransformState::IDENTITY`].
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Renders the CSS `transform` value for this state.
    ///
    /// The scale is applied first, then the percentage translation, and all
    /// numbers are written with two decimals.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "scale({:.2}) translate({:.2}%, {:.2}%)",
            self.zoom, self.pan.x, self.pan.y
        )
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_css() {
        assert_eq!(
            TransformState::IDENTITY.css(),
            "scale(1.00) translate(0.00%, 0.00%)"
        );
    }

    #[test]
    fn css_hides_accumulated_float_error() {
        let state = TransformState {
            pan: Vec2::new(-3.0, 12.5),
            zoom: 1.0 + 0.1 + 0.1 + 0.1,
        };
        assert_eq!(state.css(), "scale(1.30) translate(-3.00%, 12.50%)");
    }
}
