// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=panscan_transform --heading-base-level=0

//! Panscan Transform: who is this node, and how is it panned and zoomed?
//!
//! This crate holds the two pieces of state Panscan keeps per node:
//!
//! - An [`Identity`]: an opaque, random string written to the node as a marker
//!   attribute the first time the node is resolved by [`Identities::identity_of`].
//!   Later resolutions read the attribute back, so the identity survives for as
//!   long as the host keeps the attribute on the node.
//! - A [`TransformState`]: pan on both axes in percent, clamped to
//!   `[-100, 100]`, and a zoom factor clamped to `[zoom_floor, +∞)`.
//!
//! [`TransformStore`] maps identities to states. It is keyed by the synthetic
//! string, never by a node handle, so it does not keep host nodes alive and
//! cannot dangle when the host drops them.
//!
//! ## Minimal example
//!
//! ```rust
//! use panscan_dom::MemoryDocument;
//! use panscan_transform::{Axis, Identities, TransformStore};
//!
//! let mut doc = MemoryDocument::new();
//! let video = doc.append(doc.document_element(), "video");
//!
//! let id = Identities::default().identity_of(&mut doc, &video);
//! let mut store = TransformStore::new(0.1);
//!
//! store.zoom_by(&id, 0.5);
//! store.pan_by(&id, Axis::X, 250.0);
//! let state = store.get(&id);
//! assert_eq!(state.pan_x(), 100.0);
//! assert_eq!(state.css(), "scale(1.50) translate(100.00%, 0.00%)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod identity;
mod state;
mod store;

pub use identity::{ID_ATTRIBUTE, Identities, Identity};
pub use state::{Axis, PAN_LIMIT, TransformState};
pub use store::TransformStore;
