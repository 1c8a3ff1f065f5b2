// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use kurbo::Point;
use panscan::{
    ClickEvent, Config, EventHost, EventKind, InstallError, Installer, KeyEvent,
    SharedController, can_inject,
};
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

use crate::convert;
use crate::document::WebDocument;

/// Document-level listeners registered through gloo.
///
/// A subscription is the [`EventListener`] itself; dropping it removes the
/// listener from the document.
#[derive(Debug)]
pub struct WebHost {
    doc: WebDocument,
}

impl WebHost {
    /// Creates a host attaching listeners to `doc`.
    pub fn new(doc: WebDocument) -> Self {
        Self { doc }
    }
}

impl EventHost for WebHost {
    type Subscription = EventListener;

    fn attach(&mut self, kind: EventKind, controller: SharedController) -> EventListener {
        let mut doc = self.doc.clone();
        let options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        };
        EventListener::new_with_options(self.doc.raw(), kind.dom_type(), options, move |event| {
            // A listener fired while another one still holds the controller
            // is dropped rather than nested.
            let Ok(mut controller) = controller.try_borrow_mut() else {
                return;
            };
            match kind {
                EventKind::KeyDown => {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let key = KeyEvent::new(
                        event.key(),
                        convert::modifiers(
                            event.shift_key(),
                            event.alt_key(),
                            event.ctrl_key(),
                            event.meta_key(),
                        ),
                    );
                    let outcome = controller.handle_key(&mut doc, &key);
                    if outcome.should_stop_propagation(controller.config()) {
                        stop(event);
                    }
                }
                EventKind::Click => {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let Some(target) = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                    else {
                        return;
                    };
                    let point = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                    controller.handle_click(&mut doc, &ClickEvent::new(target, point));
                }
            }
        })
    }

    fn detach(&mut self, subscription: EventListener) {
        drop(subscription);
    }
}

fn stop(event: &Event) {
    event.prevent_default();
    event.stop_immediate_propagation();
    event.stop_propagation();
}

thread_local! {
    static INSTALLER: RefCell<Installer<EventListener>> = const { RefCell::new(Installer::new()) };
}

/// Installs Panscan into the current document with the default [`Config`].
///
/// This is what the extension's on-demand trigger runs. Calling it again
/// replaces the previous installation. Returns `false` when the document is
/// privileged or has no video.
#[wasm_bindgen]
pub fn activate() -> bool {
    let Some(doc) = WebDocument::current() else {
        return false;
    };
    match install_into(doc, Config::default()) {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "activation skipped");
            false
        }
    }
}

/// Removes every listener the current installation attached.
#[wasm_bindgen]
pub fn deactivate() {
    let Some(doc) = WebDocument::current() else {
        return;
    };
    let mut host = WebHost::new(doc);
    INSTALLER.with_borrow_mut(|installer| installer.uninstall(&mut host));
    info!("deactivated");
}

/// Why [`install_into`] did nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivationError {
    /// The document is privileged; scripts must not touch it.
    Privileged(String),
    /// Installation itself failed.
    Install(InstallError),
}

impl std::fmt::Display for ActivationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Privileged(url) => write!(f, "refusing to install into privileged page {url}"),
            Self::Install(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ActivationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Privileged(_) => None,
            Self::Install(err) => Some(err),
        }
    }
}

/// Installs into `doc` with `config`, through the thread's installation slot.
pub fn install_into(doc: WebDocument, config: Config) -> Result<(), ActivationError> {
    let url = doc.window().location().href().unwrap_or_default();
    if !can_inject(&url) {
        return Err(ActivationError::Privileged(url));
    }
    let mut host = WebHost::new(doc.clone());
    let mut doc = doc;
    INSTALLER.with_borrow_mut(|installer| {
        installer
            .install(&mut host, &mut doc, config)
            .map(drop)
            .map_err(ActivationError::Install)
    })
}
