// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use panscan_command::{Action, CommandTable, Config};
use panscan_dom::{Document, FullscreenError};
use panscan_selection::SelectionManager;
use panscan_transform::{Identities, TransformState, TransformStore};
use tracing::{debug, warn};

use crate::event::{ClickEvent, KeyEvent, KeyOutcome};

/// Everything one installation knows: policy, bindings, per-node transforms,
/// and the selection.
///
/// A controller is built once per installation and handed every input event
/// the host delivers, in order. Reinstalling replaces it wholesale.
#[derive(Debug)]
pub struct Controller {
    config: Config,
    table: CommandTable,
    store: TransformStore,
    identities: Identities,
    selection: SelectionManager,
}

impl Controller {
    /// Creates a controller with the standard key bindings.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_table(config, CommandTable::standard())
    }

    /// Creates a controller with custom key bindings.
    #[must_use]
    pub fn with_table(config: Config, table: CommandTable) -> Self {
        let store = TransformStore::new(config.zoom_floor());
        Self {
            config,
            table,
            store,
            identities: Identities::default(),
            selection: SelectionManager::default(),
        }
    }

    /// Returns the current policy, including the live border flag.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the key bindings.
    #[must_use]
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Returns the transform store.
    #[must_use]
    pub fn store(&self) -> &TransformStore {
        &self.store
    }

    /// Returns the selection manager.
    #[must_use]
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Returns the transform state recorded for `node`, if it has one.
    pub fn state_of<D: Document + ?Sized>(&self, doc: &D, node: &D::Node) -> Option<TransformState> {
        let id = self.identities.existing(doc, node)?;
        self.store.peek(&id)
    }

    /// Returns the node keyboard commands act on right now.
    ///
    /// A visible selection wins. Otherwise the first visible video in the
    /// document is selected and returned.
    pub fn resolve_target<D: Document + ?Sized>(&mut self, doc: &mut D) -> Option<D::Node> {
        if let Some(node) = self.selection.current_visible_selection(doc) {
            return Some(node);
        }
        let root = doc.root()?;
        let found = self.selection.auto_discover_visible(doc, root)?;
        self.selection
            .select_explicit(doc, &found, self.config.show_border);
        debug!(node = ?found, "selected first visible video");
        Some(found)
    }

    /// Handles one key press.
    ///
    /// Runs synchronously to completion, so a fullscreen request issued here
    /// still carries the user activation of the triggering event.
    pub fn handle_key<D: Document + ?Sized>(&mut self, doc: &mut D, event: &KeyEvent) -> KeyOutcome {
        if !self.config.gate_allows(event.modifiers) {
            return KeyOutcome::Ignored;
        }
        let Some(target) = self.resolve_target(doc) else {
            debug!(key = %event.key, "no visible target");
            return KeyOutcome::NoTarget;
        };
        let id = self.identities.identity_of(doc, &target);
        self.store.get(&id);

        let Some(spec) = self.table.lookup(&event.key).copied() else {
            return KeyOutcome::Unhandled;
        };

        if spec.action == Action::ToggleFullscreen {
            if let Err(err) = toggle_fullscreen(doc, &target) {
                warn!(error = %err, "can't make full-screen");
            }
            return KeyOutcome::Handled {
                command: spec.name,
                refreshed: false,
            };
        }

        let refreshed = match spec.action {
            Action::ToggleBorder => {
                let show = self.config.toggle_border();
                self.selection.set_outline(doc, show);
                false
            }
            action => match action.apply(&mut self.store, &id, &self.config) {
                Some(state) if action.requires_refresh() => {
                    doc.set_transform(&target, &state.css());
                    true
                }
                _ => false,
            },
        };
        debug!(command = spec.name, identity = %id, refreshed, "dispatched command");
        KeyOutcome::Handled {
            command: spec.name,
            refreshed,
        }
    }

    /// Handles one pointer click, whatever modifiers are held.
    ///
    /// Returns the node the click selected. A click that resolves to no video
    /// changes nothing.
    pub fn handle_click<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        event: &ClickEvent<D::Node>,
    ) -> Option<D::Node> {
        let picked = self.selection.select_from_click(
            doc,
            &event.target,
            event.point,
            self.config.show_border,
        );
        if let Some(node) = &picked {
            debug!(?node, "selected from click");
        }
        picked
    }
}

fn toggle_fullscreen<D: Document + ?Sized>(
    doc: &mut D,
    target: &D::Node,
) -> Result<(), FullscreenError> {
    if doc.fullscreen_element().as_ref() == Some(target) {
        doc.exit_fullscreen()
    } else {
        doc.request_fullscreen(target)
    }
}
