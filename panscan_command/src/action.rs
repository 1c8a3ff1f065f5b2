// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use panscan_transform::{Axis, Identity, TransformState, TransformStore};

use crate::config::Config;

/// An operation a key can trigger on the targeted node.
///
/// Pan directions are named from the viewer's side: panning up moves the
/// picture down inside its frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Increase vertical pan by one pan step.
    PanUp,
    /// Decrease vertical pan by one pan step.
    PanDown,
    /// Increase horizontal pan by one pan step.
    PanLeft,
    /// Decrease horizontal pan by one pan step.
    PanRight,
    /// Increase zoom by one zoom step.
    ZoomIn,
    /// Decrease zoom by one zoom step.
    ZoomOut,
    /// Increase zoom by the fast zoom step.
    FastZoomIn,
    /// Decrease zoom by the fast zoom step.
    FastZoomOut,
    /// Reset pan and zoom.
    Reset,
    /// Flip the border flag and restyle every marked node.
    ToggleBorder,
    /// Enter or leave fullscreen with the targeted node.
    ToggleFullscreen,
}

impl Action {
    /// Returns `true` if the node's transform must be re-rendered afterwards.
    #[must_use]
    pub const fn requires_refresh(self) -> bool {
        !matches!(self, Self::ToggleBorder | Self::ToggleFullscreen)
    }

    /// Applies a transform action to the state of `id`.
    ///
    /// Returns the new state, or `None` for actions that do not touch the
    /// transform store ([`Action::ToggleBorder`], [`Action::ToggleFullscreen`]).
    pub fn apply(
        self,
        store: &mut TransformStore,
        id: &Identity,
        config: &Config,
    ) -> Option<TransformState> {
        let pan = config.pan_delta;
        let state = match self {
            Self::PanUp => store.pan_by(id, Axis::Y, pan),
            Self::PanDown => store.pan_by(id, Axis::Y, -pan),
            Self::PanLeft => store.pan_by(id, Axis::X, pan),
            Self::PanRight => store.pan_by(id, Axis::X, -pan),
            Self::ZoomIn => store.zoom_by(id, config.zoom_delta),
            Self::ZoomOut => store.zoom_by(id, -config.zoom_delta),
            Self::FastZoomIn => store.zoom_by(id, config.fast_zoom_delta()),
            Self::FastZoomOut => store.zoom_by(id, -config.fast_zoom_delta()),
            Self::Reset => store.reset(id),
            Self::ToggleBorder | Self::ToggleFullscreen => return None,
        };
        Some(state)
    }
}
