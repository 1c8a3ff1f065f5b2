// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panscan_web --heading-base-level=0

//! Panscan Web: Panscan in a real browser page.
//!
//! When targeting `wasm32` this crate provides:
//!
//! - `WebDocument`: the `panscan_dom::Document` trait over `web_sys`. Rects
//!   come straight from `getBoundingClientRect` (viewport coordinates),
//!   styles from `getComputedStyle`, transforms go to the element's inline
//!   `style.transform`, and the outline stylesheet is a `<style>` element in
//!   `<head>` looked up by id.
//! - `WebHost`: a `panscan::EventHost` whose subscriptions are gloo
//!   `EventListener`s on the document. Dropping one removes the listener, so
//!   detaching by identity is the listener's own `Drop`.
//! - `activate()` / `deactivate()`: `#[wasm_bindgen]` entry points for the
//!   extension's on-demand trigger. The installation slot is thread-local, so
//!   activating again replaces the previous listeners instead of adding more.
//!   Privileged pages (see `panscan::can_inject`) are skipped.
//!
//! The conversions in [`convert`] are target-independent.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn on_toolbar_click() {
//!     if !panscan_web::activate() {
//!         // Privileged page, or no video in it.
//!     }
//! }
//! ```

pub mod convert;

#[cfg(target_arch = "wasm32")]
mod document;
#[cfg(target_arch = "wasm32")]
mod host;

#[cfg(target_arch = "wasm32")]
pub use document::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use host::{ActivationError, WebHost, activate, deactivate, install_into};
