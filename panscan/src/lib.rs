// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panscan --heading-base-level=0

//! Panscan: keyboard-driven pan, zoom and fullscreen for video elements.
//!
//! Panscan attaches to a document it does not own, picks one visible video,
//! and lets the user pan, zoom, reset, outline and fullscreen it from the
//! keyboard. It is built from small crates, each usable on its own:
//!
//! - `panscan_dom`: the [`Document`] seam and the in-memory [`MemoryDocument`].
//! - `panscan_visibility`: whether a node is practically visible.
//! - `panscan_transform`: node identities and clamped pan/zoom state.
//! - `panscan_selection`: the single selection mark and click resolution.
//! - `panscan_command`: [`Config`] and the key → [`Action`] table.
//!
//! This crate composes them:
//!
//! - [`Controller`] is the context of one installation. Its
//!   [`handle_key`](Controller::handle_key) and
//!   [`handle_click`](Controller::handle_click) are the step functions a host
//!   calls for each input event, in delivery order.
//! - [`Installer`] is a document's installation slot. Installing detaches the
//!   previous installation's listeners through the [`EventHost`] first, so
//!   activating twice never stacks handlers.
//! - [`HeadlessPage`] is an [`EventHost`] over a [`MemoryDocument`], for tests
//!   and hosts without a browser.
//! - [`can_inject`] tells an activation trigger which documents to skip.
//!
//! ## Keys
//!
//! With the default [`Config`], Shift and Alt must be held.
//!
//! | Key | Effect |
//! |---|---|
//! | `W` `S` `A` `D` | pan by one step, clamped to ±100% |
//! | `E` `Q` | zoom in / out by 0.1, never below 0.1 |
//! | `+` `-` | zoom in / out by 0.3 |
//! | `R` | reset |
//! | `B` | toggle the selection outline |
//! | `F` | toggle fullscreen |
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use panscan::{Config, HeadlessPage, KeyEvent, Modifiers};
//! use panscan_dom::MemoryDocument;
//!
//! let mut doc = MemoryDocument::new();
//! let video = doc.append(doc.document_element(), "video");
//! doc.set_rect(video, Rect::new(0.0, 0.0, 640.0, 360.0));
//!
//! let mut page = HeadlessPage::new(doc);
//! page.activate(Config::default()).unwrap();
//!
//! let held = Modifiers::SHIFT | Modifiers::ALT;
//! for _ in 0..3 {
//!     page.key_down(&KeyEvent::new("e", held));
//! }
//! assert_eq!(
//!     page.doc().transform(video),
//!     Some("scale(1.30) translate(0.00%, 0.00%)")
//! );
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through `tracing`: `debug` for per-event notes such as
//! "no visible target", `info` for installation, `warn` for "no candidate
//! video found" and "can't make full-screen". No subscriber is installed.

mod activation;
mod controller;
mod event;
mod headless;
mod install;

pub use activation::{PRIVILEGED_PREFIXES, can_inject};
pub use controller::Controller;
pub use event::{ClickEvent, EventKind, KeyEvent, KeyOutcome};
pub use headless::{HeadlessPage, Listeners, SubscriptionId};
pub use install::{
    EventHost, InstallError, Installer, OUTLINE_CSS, STYLESHEET_ID, SharedController,
};

pub use panscan_command::{Action, CommandSpec, CommandTable, Config, Modifiers};
pub use panscan_dom::{Document, FullscreenError, MemoryDocument};
pub use panscan_transform::TransformState;
pub use panscan_visibility::{Verdict, is_visible};
