// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::identity::Identity;
use crate::state::{Axis, PAN_LIMIT, TransformState};

/// Per-node transform states keyed by [`Identity`].
///
/// States are created lazily as [`TransformState::IDENTITY`] on first access.
/// Every mutation is applied and clamped in one step, so no caller can observe
/// an out-of-range value.
#[derive(Clone, Debug)]
pub struct TransformStore {
    states: HashMap<Identity, TransformState>,
    zoom_floor: f64,
}

impl TransformStore {
    /// Creates an empty store whose zoom never drops below `zoom_floor`.
    ///
    /// Non-positive or non-finite floors are replaced by the smallest positive
    /// `f64`, so zoom can never reach zero.
    #[must_use]
    pub fn new(zoom_floor: f64) -> Self {
        let zoom_floor = if zoom_floor.is_finite() && zoom_floor > 0.0 {
            zoom_floor
        } else {
            f64::MIN_POSITIVE
        };
        Self {
            states: HashMap::new(),
            zoom_floor,
        }
    }

    /// Returns the lowest zoom factor this store allows.
    #[must_use]
    pub fn zoom_floor(&self) -> f64 {
        self.zoom_floor
    }

    /// Returns the number of nodes with a state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no node has a state yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the state of `id`, creating the identity state if absent.
    pub fn get(&mut self, id: &Identity) -> TransformState {
        *self.entry(id)
    }

    /// Returns the state of `id` without creating one.
    #[must_use]
    pub fn peek(&self, id: &Identity) -> Option<TransformState> {
        self.states.get(id).copied()
    }

    /// Resets `id` to [`TransformState::IDENTITY`].
    pub fn reset(&mut self, id: &Identity) -> TransformState {
        let state = self.entry(id);
        *state = TransformState::IDENTITY;
        *state
    }

    /// Adds `delta` percent of pan on `axis`, then clamps to `[-PAN_LIMIT, PAN_LIMIT]`.
    ///
    /// Non-finite deltas are ignored.
    pub fn pan_by(&mut self, id: &Identity, axis: Axis, delta: f64) -> TransformState {
        let state = self.entry(id);
        if delta.is_finite() {
            let value = match axis {
                Axis::X => &mut state.pan.x,
                Axis::Y => &mut state.pan.y,
            };
            *value = (*value + delta).clamp(-PAN_LIMIT, PAN_LIMIT);
        }
        *state
    }

    /// Adds `delta` to the zoom factor, then clamps to `[zoom_floor, +∞)`.
    ///
    /// Non-finite deltas are ignored.
    pub fn zoom_by(&mut self, id: &Identity, delta: f64) -> TransformState {
        let floor = self.zoom_floor;
        let state = self.entry(id);
        if delta.is_finite() {
            state.zoom = (state.zoom + delta).max(floor);
        }
        *state
    }

    /// Drops the state of `id`, if any.
    pub fn forget(&mut self, id: &Identity) -> Option<TransformState> {
        self.states.remove(id)
    }

    fn entry(&mut self, id: &Identity) -> &mut TransformState {
        self.states
            .entry(id.clone())
            .or_insert(TransformState::IDENTITY)
    }
}
