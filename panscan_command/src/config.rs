// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The policy record shared by every command.

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Alt / Option.
        const ALT     = 0b0000_0010;
        /// Control.
        const CONTROL = 0b0000_0100;
        /// Meta / Command / Windows.
        const META    = 0b0000_1000;
    }
}

/// Policy for one installation.
///
/// Everything here is fixed for the lifetime of an installation except
/// [`Config::show_border`], which the `B` command flips at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Modifiers that must all be held for a key to be treated as a command.
    /// Empty disables the gate.
    pub required_modifiers: Modifiers,
    /// Stop propagation and default handling of consumed keys.
    pub stop_propagation: bool,
    /// Pan step, in percent of the node's size.
    pub pan_delta: f64,
    /// Zoom step. Also the lowest zoom a node can reach.
    pub zoom_delta: f64,
    /// Factor applied to [`Config::zoom_delta`] by the fast zoom commands.
    pub fast_zoom_multiplier: f64,
    /// Outline the selected node.
    pub show_border: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            required_modifiers: Modifiers::SHIFT | Modifiers::ALT,
            stop_propagation: true,
            pan_delta: 1.0,
            zoom_delta: 0.1,
            fast_zoom_multiplier: 3.0,
            show_border: true,
        }
    }
}

impl Config {
    /// Returns a copy with a different modifier gate.
    #[must_use]
    pub fn with_required_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.required_modifiers = modifiers;
        self
    }

    /// Returns a copy with a different propagation policy.
    #[must_use]
    pub fn with_stop_propagation(mut self, stop: bool) -> Self {
        self.stop_propagation = stop;
        self
    }

    /// Returns a copy with a different pan step.
    #[must_use]
    pub fn with_pan_delta(mut self, delta: f64) -> Self {
        self.pan_delta = delta;
        self
    }

    /// Returns a copy with a different zoom step (and so a different zoom floor).
    #[must_use]
    pub fn with_zoom_delta(mut self, delta: f64) -> Self {
        self.zoom_delta = delta;
        self
    }

    /// Returns a copy with a different fast zoom factor.
    #[must_use]
    pub fn with_fast_zoom_multiplier(mut self, multiplier: f64) -> Self {
        self.fast_zoom_multiplier = multiplier;
        self
    }

    /// Returns a copy with the border initially shown or hidden.
    #[must_use]
    pub fn with_show_border(mut self, show: bool) -> Self {
        self.show_border = show;
        self
    }

    /// The lowest zoom factor a node can reach: the zoom step itself.
    #[must_use]
    pub fn zoom_floor(&self) -> f64 {
        self.zoom_delta
    }

    /// The zoom step of the fast zoom commands.
    #[must_use]
    pub fn fast_zoom_delta(&self) -> f64 {
        self.zoom_delta * self.fast_zoom_multiplier
    }

    /// Returns `true` if `held` satisfies the modifier gate.
    #[must_use]
    pub fn gate_allows(&self, held: Modifiers) -> bool {
        held.contains(self.required_modifiers)
    }

    /// Flips [`Config::show_border`] and returns the new value.
    pub fn toggle_border(&mut self) -> bool {
        self.show_border = !self.show_border;
        self.show_border
    }
}
