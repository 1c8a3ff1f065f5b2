// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events delivered by a host, and what handling them produced.

use kurbo::Point;
use panscan_command::{Config, Modifiers};

/// The two kinds of input a [`Controller`](crate::Controller) listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A key was pressed.
    KeyDown,
    /// The pointer was clicked.
    Click,
}

impl EventKind {
    /// The DOM event type name.
    #[must_use]
    pub const fn dom_type(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::Click => "click",
        }
    }
}

/// A key press as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key value, e.g. `"e"`, `"+"` or `"Shift"`.
    pub key: String,
    /// Modifiers held while the key went down.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a key event.
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// A pointer click on `target` at `point`, in viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickEvent<N> {
    /// The node the host reported as the event target.
    pub target: N,
    /// Where the click happened.
    pub point: Point,
}

impl<N> ClickEvent<N> {
    /// Creates a click event.
    pub const fn new(target: N, point: Point) -> Self {
        Self { target, point }
    }
}

/// Result of handling one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The modifier gate was not satisfied; nothing was looked at.
    Ignored,
    /// No visible video could be targeted.
    NoTarget,
    /// A target exists but the key is not bound to a command.
    Unhandled,
    /// A command ran.
    Handled {
        /// Name of the command that ran.
        command: &'static str,
        /// Whether the target's transform was rewritten.
        refreshed: bool,
    },
}

impl KeyOutcome {
    /// Returns `true` if a command consumed the key.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    /// Returns `true` if the host should stop the event from propagating and
    /// suppress its default action.
    #[must_use]
    pub const fn should_stop_propagation(&self, config: &Config) -> bool {
        self.is_handled() && config.stop_propagation
    }
}
