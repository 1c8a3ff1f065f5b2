// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Idempotent installation of a [`Controller`] into a document.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use panscan_command::Config;
use panscan_dom::Document;
use panscan_selection::videos;
use tracing::{debug, info, warn};

use crate::controller::Controller;
use crate::event::EventKind;

/// Id of the stylesheet carrying the selection outline rule.
pub const STYLESHEET_ID: &str = "panscan-style";

/// The selection outline rule, keyed on
/// [`SELECTED_CLASS`](panscan_selection::SELECTED_CLASS).
pub const OUTLINE_CSS: &str =
    ".panscan-selected { outline: 3px solid #1e90ff !important; outline-offset: -3px; }";

/// A controller shared between the listeners of one installation.
pub type SharedController = Rc<RefCell<Controller>>;

/// Where listeners live: a browser document, or a headless test page.
///
/// A subscription is the handle for one attached listener. Detaching by
/// handle removes exactly that listener and nothing else.
pub trait EventHost {
    /// Handle for one attached listener.
    type Subscription;

    /// Starts delivering events of `kind` to `controller`.
    fn attach(&mut self, kind: EventKind, controller: SharedController) -> Self::Subscription;

    /// Stops delivering events through `subscription`.
    fn detach(&mut self, subscription: Self::Subscription);
}

/// Why an installation did not happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallError {
    /// The document has no video element at all.
    NoCandidates,
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => f.write_str("no candidate video found"),
        }
    }
}

impl std::error::Error for InstallError {}

#[derive(Debug)]
struct Installation<S> {
    controller: SharedController,
    subscriptions: Vec<S>,
}

/// The installation slot of one document.
///
/// Installing is idempotent: each [`Installer::install`] first detaches every
/// listener the previous installation attached, so repeated activation never
/// stacks handlers.
#[derive(Debug)]
pub struct Installer<S> {
    installed: Option<Installation<S>>,
}

impl<S> Default for Installer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Installer<S> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { installed: None }
    }

    /// Returns `true` if listeners are attached.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.installed.is_some()
    }

    /// Returns the controller of the current installation.
    #[must_use]
    pub fn controller(&self) -> Option<SharedController> {
        self.installed.as_ref().map(|i| Rc::clone(&i.controller))
    }

    /// Installs a fresh controller built from `config`.
    ///
    /// On success exactly one keydown and one click listener are attached.
    /// When the document has no video the slot is left empty.
    pub fn install<H, D>(
        &mut self,
        host: &mut H,
        doc: &mut D,
        config: Config,
    ) -> Result<SharedController, InstallError>
    where
        H: EventHost<Subscription = S>,
        D: Document + ?Sized,
    {
        self.uninstall(host);

        let candidates = match doc.root() {
            Some(root) => videos(&*doc, root).count(),
            None => 0,
        };
        if candidates == 0 {
            warn!("no candidate video found");
            return Err(InstallError::NoCandidates);
        }
        if doc.ensure_stylesheet(STYLESHEET_ID, OUTLINE_CSS) {
            debug!(id = STYLESHEET_ID, "injected outline stylesheet");
        }

        let controller = Rc::new(RefCell::new(Controller::new(config)));
        let subscriptions = [EventKind::KeyDown, EventKind::Click]
            .into_iter()
            .map(|kind| host.attach(kind, Rc::clone(&controller)))
            .collect();
        self.installed = Some(Installation {
            controller: Rc::clone(&controller),
            subscriptions,
        });
        info!(candidates, "installed");
        Ok(controller)
    }

    /// Detaches the current installation's listeners, if any.
    pub fn uninstall<H>(&mut self, host: &mut H)
    where
        H: EventHost<Subscription = S>,
    {
        if let Some(previous) = self.installed.take() {
            let count = previous.subscriptions.len();
            for subscription in previous.subscriptions {
                host.detach(subscription);
            }
            debug!(listeners = count, "detached previous installation");
        }
    }
}
