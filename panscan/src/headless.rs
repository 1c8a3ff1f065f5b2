// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A browserless host: a [`MemoryDocument`] plus a listener list.

use std::rc::Rc;

use panscan_command::Config;
use panscan_dom::{MemoryDocument, NodeId};

use crate::event::{ClickEvent, EventKind, KeyEvent, KeyOutcome};
use crate::install::{EventHost, InstallError, Installer, SharedController};

/// Handle for one listener attached to [`Listeners`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Attached listeners, in attachment order.
#[derive(Debug, Default)]
pub struct Listeners {
    next: u64,
    entries: Vec<(SubscriptionId, EventKind, SharedController)>,
}

impl Listeners {
    /// Returns how many listeners of `kind` are attached.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|(_, k, _)| *k == kind).count()
    }

    /// Returns `true` if no listener is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Snapshot, so a listener may detach listeners while events are delivered.
    fn of_kind(&self, kind: EventKind) -> Vec<SharedController> {
        self.entries
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, c)| Rc::clone(c))
            .collect()
    }
}

impl EventHost for Listeners {
    type Subscription = SubscriptionId;

    fn attach(&mut self, kind: EventKind, controller: SharedController) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, kind, controller));
        id
    }

    fn detach(&mut self, subscription: SubscriptionId) {
        self.entries.retain(|(id, _, _)| *id != subscription);
    }
}

/// A document, its listeners, and its installation slot.
///
/// Events are delivered synchronously to every attached listener of the
/// matching kind, in attachment order, the way a browser delivers them to
/// document-level listeners.
#[derive(Debug)]
pub struct HeadlessPage {
    doc: MemoryDocument,
    listeners: Listeners,
    installer: Installer<SubscriptionId>,
}

impl HeadlessPage {
    /// Wraps `doc`. Nothing is installed yet.
    #[must_use]
    pub fn new(doc: MemoryDocument) -> Self {
        Self {
            doc,
            listeners: Listeners::default(),
            installer: Installer::new(),
        }
    }

    /// Returns the document.
    #[must_use]
    pub fn doc(&self) -> &MemoryDocument {
        &self.doc
    }

    /// Returns the document for host-side edits.
    pub fn doc_mut(&mut self) -> &mut MemoryDocument {
        &mut self.doc
    }

    /// Returns the attached listeners.
    #[must_use]
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Returns the controller of the current installation.
    #[must_use]
    pub fn controller(&self) -> Option<SharedController> {
        self.installer.controller()
    }

    /// Runs the installation routine, as an activation trigger would.
    ///
    /// Safe to call any number of times.
    pub fn activate(&mut self, config: Config) -> Result<SharedController, InstallError> {
        self.installer
            .install(&mut self.listeners, &mut self.doc, config)
    }

    /// Detaches every listener the current installation attached.
    pub fn deactivate(&mut self) {
        self.installer.uninstall(&mut self.listeners);
    }

    /// Delivers a key press. Returns one outcome per keydown listener.
    pub fn key_down(&mut self, event: &KeyEvent) -> Vec<KeyOutcome> {
        self.listeners
            .of_kind(EventKind::KeyDown)
            .into_iter()
            .map(|controller| controller.borrow_mut().handle_key(&mut self.doc, event))
            .collect()
    }

    /// Delivers a click. Returns one result per click listener.
    pub fn click(&mut self, event: &ClickEvent<NodeId>) -> Vec<Option<NodeId>> {
        self.listeners
            .of_kind(EventKind::Click)
            .into_iter()
            .map(|controller| controller.borrow_mut().handle_click(&mut self.doc, event))
            .collect()
    }
}
